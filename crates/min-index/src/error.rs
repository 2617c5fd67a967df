use thiserror::Error;

/// Errors that can occur when searching a sequence for its extremum.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The sequence has no elements, so no index can be returned.
    #[error("input sequence is empty")]
    EmptyInput,
}

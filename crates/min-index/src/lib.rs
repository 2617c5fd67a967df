//! Index of the minimum element of an integer sequence.
//!
//! The crate answers one question quickly: where in a sequence is its
//! smallest value? It is meant to sit behind a host data-analysis
//! environment, which converts its own vectors into a slice and calls
//! [`argmin`].
//!
//! # Algorithm
//!
//! A single left-to-right pass keeps the best value seen so far together with
//! its index, both seeded from the first element. A later element replaces
//! them only when it is strictly better, so the lowest index wins among equal
//! minima. The scan is O(n) time and O(1) extra space.
//!
//! # Operations
//!
//! - [`argmin`]: index of the first minimum
//! - [`argmax`]: index of the first maximum
//! - [`find`]: either direction, with a configurable [`TieBreak`], returning
//!   the index together with the value found there
//!
//! Every operation reports an empty input as [`Error::EmptyInput`].
//!
//! ```
//! assert_eq!(min_index::argmin(&[5, 1, 3]), Ok(1));
//! assert_eq!(min_index::argmax(&[5, 1, 5]), Ok(0));
//! assert!(min_index::argmin::<i32>(&[]).is_err());
//! ```

mod best;
mod config;
mod error;
mod extremum;
mod goal;
mod search;


pub use config::{Config, TieBreak};
pub use error::Error;
pub use extremum::Extremum;
pub use goal::{Goal, Maximize, Minimize};
pub use search::find;

/// Returns the index of the first minimum of `values`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `values` is empty.
pub fn argmin<T: Ord + Copy>(values: &[T]) -> Result<usize, Error> {
    find::<Minimize, T>(values, &Config::default()).map(|extremum| extremum.index)
}

/// Returns the index of the first maximum of `values`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `values` is empty.
pub fn argmax<T: Ord + Copy>(values: &[T]) -> Result<usize, Error> {
    find::<Maximize, T>(values, &Config::default()).map(|extremum| extremum.index)
}

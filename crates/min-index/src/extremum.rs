/// The result of an extremum scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremum<T> {
    /// Zero-based position of the reported element.
    pub index: usize,

    /// Value held at `index`.
    pub value: T,
}

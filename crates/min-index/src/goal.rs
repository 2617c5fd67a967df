use std::cmp::Ordering;

/// Defines the search direction.
///
/// The scan is written once and asks the goal how a candidate ranks against
/// the current best, so [`Minimize`] and [`Maximize`] share every other line.
pub trait Goal {
    /// Ranks `candidate` against `best`.
    ///
    /// - [`Ordering::Less`]: the candidate is strictly better
    /// - [`Ordering::Equal`]: the two are tied
    /// - [`Ordering::Greater`]: the candidate is strictly worse
    fn rank<T: Ord>(candidate: &T, best: &T) -> Ordering;
}

/// Search for the smallest value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimize;

impl Goal for Minimize {
    #[inline]
    fn rank<T: Ord>(candidate: &T, best: &T) -> Ordering {
        candidate.cmp(best)
    }
}

/// Search for the largest value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximize;

impl Goal for Maximize {
    #[inline]
    fn rank<T: Ord>(candidate: &T, best: &T) -> Ordering {
        best.cmp(candidate)
    }
}

use std::cmp::Ordering;

use crate::{Extremum, Goal, TieBreak};

/// Tracks the best element encountered so far.
///
/// Index and value only ever change together, so later candidates are always
/// ranked against the true running extremum.
pub(crate) struct Best<T> {
    index: usize,
    value: T,
}

impl<T: Ord + Copy> Best<T> {
    /// Seeds the tracker with the first element of the scan.
    pub(crate) fn start(index: usize, value: T) -> Self {
        Self { index, value }
    }

    /// Replaces the best element if the candidate improves on it.
    ///
    /// Ties replace the best only under [`TieBreak::Last`].
    pub(crate) fn offer<G: Goal>(&mut self, index: usize, value: T, tie_break: TieBreak) {
        let replace = match G::rank(&value, &self.value) {
            Ordering::Less => true,
            Ordering::Equal => tie_break == TieBreak::Last,
            Ordering::Greater => false,
        };

        if replace {
            self.index = index;
            self.value = value;
        }
    }

    /// Finalizes the scan.
    pub(crate) fn finish(self) -> Extremum<T> {
        Extremum {
            index: self.index,
            value: self.value,
        }
    }
}

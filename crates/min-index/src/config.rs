/// Which index wins when several elements hold the extremum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The lowest index among equal extrema is kept.
    #[default]
    First,

    /// The highest index among equal extrema is kept.
    Last,
}

/// Configuration for the extremum scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    tie_break: TieBreak,
}

impl Config {
    /// Creates a config with the given tie-break policy.
    #[must_use]
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Returns the tie-break policy.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_first_occurrence() {
        assert_eq!(Config::default().tie_break(), TieBreak::First);
    }

    #[test]
    fn new_stores_policy() {
        assert_eq!(Config::new(TieBreak::Last).tie_break(), TieBreak::Last);
    }
}

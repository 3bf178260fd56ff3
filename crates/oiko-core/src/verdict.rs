// Per-word speller verdicts.

/// Outcome of checking a single word against a speller.
///
/// Variants are ordered by severity: a smaller verdict is closer to
/// correct, so `min` over several interpretations of a word picks the
/// most favorable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellVerdict {
    /// The word is correctly spelled as written.
    Correct,
    /// The word is correct if its first letter is capitalized.
    CapitalizeFirst,
    /// The word exists but is written with the wrong capitalization.
    CapitalizationError,
    /// The word is not recognized.
    Unknown,
}

impl SpellVerdict {
    /// Whether the word should be accepted as written.
    pub fn is_acceptable(self) -> bool {
        self == SpellVerdict::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(SpellVerdict::Correct < SpellVerdict::CapitalizeFirst);
        assert!(SpellVerdict::CapitalizeFirst < SpellVerdict::CapitalizationError);
        assert!(SpellVerdict::CapitalizationError < SpellVerdict::Unknown);
    }

    #[test]
    fn min_picks_most_favorable() {
        let best = [SpellVerdict::Unknown, SpellVerdict::CapitalizeFirst]
            .into_iter()
            .min()
            .unwrap();
        assert_eq!(best, SpellVerdict::CapitalizeFirst);
    }

    #[test]
    fn only_correct_is_acceptable() {
        assert!(SpellVerdict::Correct.is_acceptable());
        assert!(!SpellVerdict::CapitalizeFirst.is_acceptable());
        assert!(!SpellVerdict::Unknown.is_acceptable());
    }
}

// Classification of why a word failed validation.

use std::fmt;

/// Enumerated reason a word was rejected by the checking engine.
///
/// Every failed check carries exactly one of these; a word is never
/// flagged for multiple reasons at once. The member set is defined by
/// the engine, not by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    /// No interpretation of the word exists in the dictionary.
    NotInDictionary,
    /// The word exists but is capitalized incorrectly.
    CapitalizationError,
    /// The word is a compound whose parts do not join at this boundary.
    InvalidCompound,
    /// The word is explicitly marked as one to avoid.
    ProhibitedWord,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::NotInDictionary => "not in dictionary",
            FailureKind::CapitalizationError => "capitalization error",
            FailureKind::InvalidCompound => "invalid compound",
            FailureKind::ProhibitedWord => "prohibited word",
        };
        f.write_str(name)
    }
}

// The read-only result contract queried by the host, and its single
// implementing variant.

use crate::failure::FailureKind;
use crate::locale::LanguageTag;

use std::collections::HashSet;

/// Error type for result construction.
///
/// Accessors on a constructed result never fail; all contract
/// violations are rejected here so that every live instance is valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultError {
    #[error("result constructed for an empty word")]
    EmptyWord,
    #[error("empty alternative at rank {0}")]
    EmptyAlternative(usize),
    #[error("duplicate alternative {0:?}")]
    DuplicateAlternative(String),
}

/// Read-only view of one failed spell check.
///
/// This is the contract the host queries; hosts treat implementors
/// polymorphically among their own result types. Every operation is a
/// pure read of immutable state.
pub trait SpellAlternatives {
    /// The exact original input word, unmodified.
    ///
    /// No normalization or case folding is applied; the host correlates
    /// this with the document position the word came from.
    fn word(&self) -> &str;

    /// The locale under which the check was performed.
    fn locale(&self) -> &LanguageTag;

    /// Why the word was flagged. Exactly one reason per result.
    fn failure_kind(&self) -> FailureKind;

    /// Number of candidate replacements, without materializing them.
    fn alternative_count(&self) -> usize;

    /// All candidate replacements, best match first. Empty when no
    /// suggestions exist, never absent.
    fn alternatives(&self) -> &[String];
}

/// The outcome of checking one word that was not recognized as
/// correctly spelled.
///
/// Constructed exactly once by the checking engine per failed check,
/// then immutable. Safe to share read-only across threads: no accessor
/// mutates state, so concurrent readers need no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuggestionResult {
    word: String,
    locale: LanguageTag,
    failure: FailureKind,
    alternatives: Box<[String]>,
}

impl SuggestionResult {
    /// Build a result from a ranked, duplicate-free list of candidates.
    ///
    /// `alternatives` must already be in relevance order, best first;
    /// it is stored as given. Construction fails on an empty word, an
    /// empty candidate string, or a duplicate candidate -- degraded
    /// instances are never created.
    pub fn new(
        word: impl Into<String>,
        locale: LanguageTag,
        failure: FailureKind,
        alternatives: Vec<String>,
    ) -> Result<Self, ResultError> {
        let word = word.into();
        if word.is_empty() {
            return Err(ResultError::EmptyWord);
        }
        let mut seen = HashSet::with_capacity(alternatives.len());
        for (rank, alternative) in alternatives.iter().enumerate() {
            if alternative.is_empty() {
                return Err(ResultError::EmptyAlternative(rank));
            }
            if !seen.insert(alternative.as_str()) {
                return Err(ResultError::DuplicateAlternative(alternative.clone()));
            }
        }
        Ok(Self {
            word,
            locale,
            failure,
            alternatives: alternatives.into_boxed_slice(),
        })
    }
}

impl SpellAlternatives for SuggestionResult {
    fn word(&self) -> &str {
        &self.word
    }

    fn locale(&self) -> &LanguageTag {
        &self.locale
    }

    fn failure_kind(&self) -> FailureKind {
        self.failure
    }

    fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fi() -> LanguageTag {
        LanguageTag::parse("fi-FI").unwrap()
    }

    fn alts(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn count_matches_sequence_length() {
        let result = SuggestionResult::new(
            "helo",
            fi(),
            FailureKind::NotInDictionary,
            alts(&["hello", "help", "held"]),
        )
        .unwrap();
        assert_eq!(result.alternative_count(), 3);
        assert_eq!(result.alternatives().len(), 3);
    }

    #[test]
    fn alternatives_preserve_rank_order() {
        let result = SuggestionResult::new(
            "helo",
            fi(),
            FailureKind::NotInDictionary,
            alts(&["hello", "help", "held"]),
        )
        .unwrap();
        assert_eq!(result.alternatives(), &["hello", "help", "held"]);
    }

    #[test]
    fn word_is_returned_unmodified() {
        let result =
            SuggestionResult::new("teh", fi(), FailureKind::NotInDictionary, alts(&["the"]))
                .unwrap();
        assert_eq!(result.word(), "teh");

        let cased =
            SuggestionResult::new("TeH", fi(), FailureKind::CapitalizationError, Vec::new())
                .unwrap();
        assert_eq!(cased.word(), "TeH");
    }

    #[test]
    fn locale_is_returned_as_constructed() {
        let result =
            SuggestionResult::new("helo", fi(), FailureKind::NotInDictionary, Vec::new()).unwrap();
        assert_eq!(result.locale(), &fi());
        assert_eq!(result.locale().to_string(), "fi-FI");
    }

    #[test]
    fn zero_alternatives_is_empty_not_absent() {
        let result =
            SuggestionResult::new("xyzzy", fi(), FailureKind::NotInDictionary, Vec::new()).unwrap();
        assert_eq!(result.alternative_count(), 0);
        assert_eq!(result.alternatives(), &[] as &[String]);
    }

    #[test]
    fn accessors_are_stable_across_calls() {
        let result = SuggestionResult::new(
            "helo",
            fi(),
            FailureKind::NotInDictionary,
            alts(&["hello", "help"]),
        )
        .unwrap();
        assert_eq!(result.word(), result.word());
        assert_eq!(result.alternative_count(), result.alternative_count());
        assert_eq!(result.alternatives(), result.alternatives());
        assert_eq!(result.failure_kind(), result.failure_kind());
    }

    #[test]
    fn empty_word_is_rejected() {
        let err = SuggestionResult::new("", fi(), FailureKind::NotInDictionary, Vec::new())
            .unwrap_err();
        assert_eq!(err, ResultError::EmptyWord);
    }

    #[test]
    fn duplicate_alternatives_are_rejected() {
        let err = SuggestionResult::new(
            "helo",
            fi(),
            FailureKind::NotInDictionary,
            alts(&["hello", "help", "hello"]),
        )
        .unwrap_err();
        assert_eq!(err, ResultError::DuplicateAlternative("hello".to_string()));
    }

    #[test]
    fn empty_alternative_is_rejected() {
        let err = SuggestionResult::new(
            "helo",
            fi(),
            FailureKind::NotInDictionary,
            alts(&["hello", ""]),
        )
        .unwrap_err();
        assert_eq!(err, ResultError::EmptyAlternative(1));
    }

    #[test]
    fn case_differing_alternatives_are_not_duplicates() {
        let result = SuggestionResult::new(
            "helsinki",
            fi(),
            FailureKind::CapitalizationError,
            alts(&["Helsinki", "helsinki"]),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn usable_through_trait_object() {
        let result = SuggestionResult::new(
            "helo",
            fi(),
            FailureKind::NotInDictionary,
            alts(&["hello"]),
        )
        .unwrap();
        let dyn_result: &dyn SpellAlternatives = &result;
        assert_eq!(dyn_result.word(), "helo");
        assert_eq!(dyn_result.alternative_count(), 1);
    }

    #[test]
    fn result_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SuggestionResult>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_json() {
        let result = SuggestionResult::new(
            "helo",
            fi(),
            FailureKind::NotInDictionary,
            alts(&["hello"]),
        )
        .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: SuggestionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}

// The seam the host calls: check one word, construct at most one
// result.

use log::{debug, trace};

use oiko_core::{FailureKind, LanguageTag, ResultError, SpellVerdict, SuggestionResult};

use crate::speller::Speller;
use crate::suggestion::collector::SuggestionCollector;
use crate::suggestion::strategy::{SuggestionStrategy, ocr_strategy, typing_strategy};

/// Longest word the session will check. Longer input is reported
/// misspelled with no alternatives instead of being searched.
pub const MAX_WORD_CHARS: usize = 255;

/// Which error model the suggestion search assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionProfile {
    /// Keyboard slips and common spelling mistakes.
    #[default]
    Typing,
    /// Glyph misreads from scanned text.
    Ocr,
}

/// Caller-owned session configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Most alternatives a result will carry. Default: 5.
    pub max_suggestions: usize,
    /// Error model for the suggestion search. Default: typing.
    pub profile: SuggestionProfile,
    /// Override for the profile's cost budget.
    pub cost_budget: Option<usize>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            profile: SuggestionProfile::Typing,
            cost_budget: None,
        }
    }
}

/// Outcome of checking one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The word is acceptable as written; no result object exists.
    Correct,
    /// The word failed validation; the result carries the ranked
    /// alternatives.
    Misspelled(SuggestionResult),
}

/// Error type for session operations.
///
/// Anything that goes wrong is reported here, before a result object
/// is ever constructed; a returned result is always valid.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("cannot check an empty word")]
    EmptyWord,
    #[error(transparent)]
    Result(#[from] ResultError),
}

/// A spell-checking session for one locale.
///
/// Owns the speller, the locale tag stamped onto results, and the
/// suggestion strategy. Sessions hold no global state and no cache;
/// independent sessions never interfere, so one session per locale
/// (or per thread) is the expected usage.
pub struct SpellSession<S> {
    speller: S,
    locale: LanguageTag,
    strategy: SuggestionStrategy,
    max_suggestions: usize,
}

impl<S: Speller> SpellSession<S> {
    /// Create a session with default options.
    pub fn new(speller: S, locale: LanguageTag) -> Self {
        Self::with_options(speller, locale, SessionOptions::default())
    }

    /// Create a session with explicit options.
    pub fn with_options(speller: S, locale: LanguageTag, options: SessionOptions) -> Self {
        debug!(
            "creating spell session for {} ({:?} profile, {} suggestions)",
            locale, options.profile, options.max_suggestions
        );
        let strategy = match (options.profile, options.cost_budget) {
            (SuggestionProfile::Typing, Some(budget)) => typing_strategy(budget),
            (SuggestionProfile::Typing, None) => typing_strategy(800),
            (SuggestionProfile::Ocr, Some(budget)) => ocr_strategy(budget),
            (SuggestionProfile::Ocr, None) => ocr_strategy(2000),
        };
        Self {
            speller,
            locale,
            strategy,
            max_suggestions: options.max_suggestions,
        }
    }

    /// The locale this session checks under.
    pub fn locale(&self) -> &LanguageTag {
        &self.locale
    }

    /// Check one word.
    ///
    /// Returns [`Verdict::Correct`] for acceptable words. For anything
    /// else, generates alternatives and constructs exactly one
    /// [`SuggestionResult`]; the word is stored in the result exactly
    /// as passed in. An empty word is a caller error.
    pub fn check(&self, word: &str) -> Result<Verdict, SessionError> {
        if word.is_empty() {
            return Err(SessionError::EmptyWord);
        }
        let chars: Vec<char> = word.chars().collect();

        if chars.len() > MAX_WORD_CHARS {
            debug!("word of {} chars exceeds checking limit", chars.len());
            let result = SuggestionResult::new(
                word,
                self.locale.clone(),
                FailureKind::NotInDictionary,
                Vec::new(),
            )?;
            return Ok(Verdict::Misspelled(result));
        }

        let verdict = self.speller.spell(&chars);
        trace!("speller verdict for {word:?}: {verdict:?}");
        if verdict.is_acceptable() {
            return Ok(Verdict::Correct);
        }
        let failure = match verdict {
            SpellVerdict::CapitalizeFirst | SpellVerdict::CapitalizationError => {
                FailureKind::CapitalizationError
            }
            _ => FailureKind::NotInDictionary,
        };

        // Collect three times the requested count, rank, then truncate,
        // so a late low-priority find can still displace an early one.
        let mut collector = SuggestionCollector::new(&chars, self.max_suggestions * 3);
        self.strategy.generate(&self.speller, &mut collector);
        let mut alternatives = collector.into_ranked();
        alternatives.truncate(self.max_suggestions);
        debug!(
            "{word:?} flagged as {failure}, {} alternative(s)",
            alternatives.len()
        );

        let result = SuggestionResult::new(word, self.locale.clone(), failure, alternatives)?;
        Ok(Verdict::Misspelled(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::WordSetSpeller;
    use oiko_core::SpellAlternatives;

    fn session() -> SpellSession<WordSetSpeller> {
        let speller = WordSetSpeller::new(["koira", "kissa", "Helsinki"]);
        SpellSession::new(speller, LanguageTag::parse("fi-FI").unwrap())
    }

    #[test]
    fn correct_word_yields_no_result() {
        assert_eq!(session().check("koira").unwrap(), Verdict::Correct);
    }

    #[test]
    fn empty_word_is_a_caller_error() {
        assert!(matches!(
            session().check(""),
            Err(SessionError::EmptyWord)
        ));
    }

    #[test]
    fn misspelled_word_carries_ranked_alternatives() {
        let Verdict::Misspelled(result) = session().check("kiora").unwrap() else {
            panic!("expected a misspelling");
        };
        assert_eq!(result.word(), "kiora");
        assert_eq!(result.locale().to_string(), "fi-FI");
        assert_eq!(result.failure_kind(), FailureKind::NotInDictionary);
        assert!(result.alternatives().contains(&"koira".to_string()));
        assert_eq!(result.alternative_count(), result.alternatives().len());
    }

    #[test]
    fn capitalization_failure_is_classified() {
        let Verdict::Misspelled(result) = session().check("helsinki").unwrap() else {
            panic!("expected a misspelling");
        };
        assert_eq!(result.failure_kind(), FailureKind::CapitalizationError);
        assert_eq!(result.alternatives().first().map(String::as_str), Some("Helsinki"));
        // The original word is preserved, not case-folded.
        assert_eq!(result.word(), "helsinki");
    }

    #[test]
    fn gibberish_yields_empty_alternatives() {
        let Verdict::Misspelled(result) = session().check("qqqqqq").unwrap() else {
            panic!("expected a misspelling");
        };
        assert_eq!(result.alternative_count(), 0);
        assert_eq!(result.alternatives(), &[] as &[String]);
    }

    #[test]
    fn overlong_word_is_misspelled_without_search() {
        let word = "a".repeat(MAX_WORD_CHARS + 1);
        let Verdict::Misspelled(result) = session().check(&word).unwrap() else {
            panic!("expected a misspelling");
        };
        assert_eq!(result.word(), word);
        assert_eq!(result.alternative_count(), 0);
    }

    #[test]
    fn suggestions_respect_configured_maximum() {
        let speller = WordSetSpeller::new(["ja", "jo", "jaa", "jaha", "vaja", "raja"]);
        let session = SpellSession::with_options(
            speller,
            LanguageTag::parse("fi").unwrap(),
            SessionOptions {
                max_suggestions: 2,
                ..SessionOptions::default()
            },
        );
        let Verdict::Misspelled(result) = session.check("jxa").unwrap() else {
            panic!("expected a misspelling");
        };
        assert!(result.alternative_count() <= 2);
    }

    #[test]
    fn ocr_profile_repairs_glyph_confusion() {
        let speller = WordSetSpeller::new(["koira"]);
        let session = SpellSession::with_options(
            speller,
            LanguageTag::parse("fi").unwrap(),
            SessionOptions {
                profile: SuggestionProfile::Ocr,
                ..SessionOptions::default()
            },
        );
        let Verdict::Misspelled(result) = session.check("k0ira").unwrap() else {
            panic!("expected a misspelling");
        };
        assert!(result.alternatives().contains(&"koira".to_string()));
    }

    #[test]
    fn repeated_checks_are_deterministic() {
        let a = session().check("kiora").unwrap();
        let b = session().check("kiora").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn session_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpellSession<WordSetSpeller>>();
    }
}

// In-memory word-set speller.
//
// Stands in for the morphological engine behind the `Speller` seam:
// a set of accepted surface forms with the usual case-handling rules.
// Useful on its own for small user dictionaries and as the validation
// backend for suggestion generation.

use hashbrown::{HashMap, HashSet};

use oiko_core::SpellVerdict;
use oiko_core::character::{is_lower, is_upper, simple_lower, simple_upper};

use super::Speller;

/// Caller-owned speller configuration.
///
/// Passed in at construction instead of being read from any global
/// registry; two spellers with different options are fully independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellerOptions {
    /// Accept a known word whose first letter was capitalized, e.g. at
    /// the start of a sentence. Default: true.
    pub accept_first_uppercase: bool,
    /// Accept a known word written entirely in uppercase. Default: true.
    pub accept_all_uppercase: bool,
    /// Accept any word containing a digit without checking it.
    /// Default: false.
    pub ignore_numbers: bool,
}

impl Default for SpellerOptions {
    fn default() -> Self {
        Self {
            accept_first_uppercase: true,
            accept_all_uppercase: true,
            ignore_numbers: false,
        }
    }
}

/// A speller backed by an explicit set of accepted words.
pub struct WordSetSpeller {
    /// Accepted surface forms, exactly as provided.
    exact: HashSet<String>,
    /// Case-folded form -> first canonical form seen for it.
    folded: HashMap<String, String>,
    options: SpellerOptions,
}

impl WordSetSpeller {
    /// Build a speller from accepted words with default options.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self::with_options(words, SpellerOptions::default())
    }

    /// Build a speller from accepted words with explicit options.
    pub fn with_options<I, W>(words: I, options: SpellerOptions) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut exact = HashSet::new();
        let mut folded = HashMap::new();
        for word in words {
            let word = word.into();
            if word.is_empty() {
                continue;
            }
            let fold: String = word.chars().map(simple_lower).collect();
            folded.entry(fold).or_insert_with(|| word.clone());
            exact.insert(word);
        }
        Self {
            exact,
            folded,
            options,
        }
    }

    /// Number of accepted surface forms.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

impl Speller for WordSetSpeller {
    fn spell(&self, word: &[char]) -> SpellVerdict {
        if word.is_empty() {
            return SpellVerdict::Unknown;
        }
        if self.options.ignore_numbers && word.iter().any(|c| c.is_ascii_digit()) {
            return SpellVerdict::Correct;
        }

        let surface: String = word.iter().collect();
        if self.exact.contains(&surface) {
            return SpellVerdict::Correct;
        }

        // Sentence-initial capitalization of a known lowercase word.
        if self.options.accept_first_uppercase && is_upper(word[0]) {
            let mut lowered: String = String::with_capacity(surface.len());
            lowered.push(simple_lower(word[0]));
            lowered.extend(word[1..].iter());
            if self.exact.contains(&lowered) {
                return SpellVerdict::Correct;
            }
        }

        // Headline style: the whole word in uppercase.
        let all_caps = word.len() > 1
            && word.iter().any(|&c| is_upper(c))
            && !word.iter().any(|&c| is_lower(c));
        let fold: String = word.iter().map(|&c| simple_lower(c)).collect();
        if self.options.accept_all_uppercase && all_caps && self.folded.contains_key(&fold) {
            return SpellVerdict::Correct;
        }

        // Proper noun written in lowercase: correct once capitalized.
        if is_lower(word[0]) {
            let mut capitalized = String::with_capacity(surface.len());
            capitalized.push(simple_upper(word[0]));
            capitalized.extend(word[1..].iter());
            if self.exact.contains(&capitalized) {
                return SpellVerdict::CapitalizeFirst;
            }
        }

        // Known word, wrong case pattern.
        if self.folded.contains_key(&fold) {
            return SpellVerdict::CapitalizationError;
        }

        SpellVerdict::Unknown
    }
}

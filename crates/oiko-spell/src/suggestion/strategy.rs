// Strategy orchestration: composes generators into the typing and OCR
// profiles with a cost budget.

use super::collector::SuggestionCollector;
use super::generators::{
    CaseRetry, Deletion, Duplication, Insertion, MultiReplacement, Replacement, ReplacementPair,
    StripSoftHyphens, SuggestionGenerator, Transposition, VowelHarmony, WordSplit,
};
use crate::speller::Speller;

// ---------------------------------------------------------------------------
// Replacement tables
// ---------------------------------------------------------------------------

/// Finnish QWERTY neighbor keys, most frequently confused first.
const KEYBOARD_NEIGHBORS: &[ReplacementPair] = &[
    ('a', 's'), ('s', 'a'), ('s', 'd'), ('d', 's'), ('d', 'f'),
    ('e', 'r'), ('r', 'e'), ('r', 't'), ('t', 'r'), ('t', 'y'),
    ('y', 't'), ('u', 'i'), ('i', 'u'), ('i', 'o'), ('o', 'i'),
    ('o', 'p'), ('p', 'o'), ('n', 'm'), ('m', 'n'), ('k', 'l'),
    ('l', 'k'), ('k', 'j'), ('j', 'k'), ('j', 'h'), ('h', 'j'),
    ('g', 'h'), ('g', 'f'), ('f', 'g'), ('v', 'b'), ('b', 'v'),
    ('b', 'n'), ('c', 'v'), ('x', 'c'), ('z', 'x'), ('q', 'w'),
    ('w', 'e'), ('ä', 'ö'), ('ö', 'ä'), ('ö', 'l'), ('ä', 'p'),
    ('å', 'p'), ('å', 'ä'),
];

/// Number-row keys hit instead of the letter below them.
const NUMBER_ROW: &[ReplacementPair] = &[
    ('1', 'q'), ('2', 'w'), ('3', 'e'), ('4', 'r'), ('5', 't'),
    ('6', 'y'), ('7', 'u'), ('8', 'i'), ('9', 'o'), ('0', 'p'),
];

/// Similar-sounding or similar-looking letters typed for one another.
const PHONETIC_CONFUSIONS: &[ReplacementPair] = &[
    ('c', 'k'), ('k', 'c'), ('c', 's'), ('w', 'v'), ('v', 'w'),
    ('x', 'z'), ('z', 'x'), ('s', 'š'), ('z', 'ž'), ('e', 'a'),
    ('a', 'e'), ('i', 'j'), ('j', 'i'),
];

/// Glyphs OCR software misreads for one another.
const OCR_CONFUSIONS: &[ReplacementPair] = &[
    ('0', 'o'), ('o', '0'), ('1', 'l'), ('l', '1'), ('l', 'i'),
    ('i', 'l'), ('5', 's'), ('8', 'b'), ('a', 'ä'), ('ä', 'a'),
    ('o', 'ö'), ('ö', 'o'), ('u', 'v'), ('v', 'u'), ('n', 'm'),
    ('m', 'n'), ('c', 'o'), ('o', 'c'), ('e', 'é'), ('b', 'h'),
    ('h', 'b'), ('p', 'b'), ('b', 'p'), ('s', 'š'), ('z', 'ž'),
];

/// Most common Finnish letters, tried first when inserting.
const INSERTION_PRIMARY: &str = "aitesn";

/// The rest of the insertion alphabet, still frequency-ordered.
const INSERTION_SECONDARY: &str = "ulkoämrvpyhjdögfbcwxzqå'.";

// ---------------------------------------------------------------------------
// SuggestionStrategy
// ---------------------------------------------------------------------------

/// An ordered generator pipeline with a cost budget.
///
/// Primary generators are cheap checks that run first; if any of them
/// produces a candidate, the secondary generators are skipped entirely.
pub struct SuggestionStrategy {
    max_cost: usize,
    primary: Vec<Box<dyn SuggestionGenerator + Send + Sync>>,
    secondary: Vec<Box<dyn SuggestionGenerator + Send + Sync>>,
}

impl SuggestionStrategy {
    /// Run the pipeline against `collector`.
    pub fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        collector.set_max_cost(self.max_cost);

        for generator in &self.primary {
            if collector.should_abort() {
                break;
            }
            generator.generate(speller, collector);
        }
        if !collector.is_empty() {
            return;
        }

        for generator in &self.secondary {
            if collector.should_abort() {
                break;
            }
            generator.generate(speller, collector);
        }
    }

    /// The cost budget this strategy runs with.
    pub fn max_cost(&self) -> usize {
        self.max_cost
    }
}

/// Build the typing profile: repairs for keyboard slips and common
/// Finnish spelling mistakes, cheapest repairs first.
pub fn typing_strategy(max_cost: usize) -> SuggestionStrategy {
    let primary: Vec<Box<dyn SuggestionGenerator + Send + Sync>> =
        vec![Box::new(CaseRetry), Box::new(StripSoftHyphens)];

    let secondary: Vec<Box<dyn SuggestionGenerator + Send + Sync>> = vec![
        Box::new(VowelHarmony),
        Box::new(Replacement {
            pairs: KEYBOARD_NEIGHBORS.to_vec(),
        }),
        Box::new(Deletion),
        Box::new(Duplication),
        Box::new(WordSplit),
        Box::new(Replacement {
            pairs: NUMBER_ROW.to_vec(),
        }),
        Box::new(Insertion {
            characters: INSERTION_PRIMARY.chars().collect(),
        }),
        Box::new(Transposition),
        Box::new(Replacement {
            pairs: PHONETIC_CONFUSIONS.to_vec(),
        }),
        Box::new(Insertion {
            characters: INSERTION_SECONDARY.chars().collect(),
        }),
    ];

    SuggestionStrategy {
        max_cost,
        primary,
        secondary,
    }
}

/// Build the OCR profile: glyph-confusion repairs, allowing two
/// simultaneous misreads.
pub fn ocr_strategy(max_cost: usize) -> SuggestionStrategy {
    let primary: Vec<Box<dyn SuggestionGenerator + Send + Sync>> = vec![Box::new(CaseRetry)];

    let secondary: Vec<Box<dyn SuggestionGenerator + Send + Sync>> = vec![
        Box::new(Replacement {
            pairs: OCR_CONFUSIONS.to_vec(),
        }),
        Box::new(MultiReplacement {
            pairs: OCR_CONFUSIONS.to_vec(),
            depth: 2,
        }),
    ];

    SuggestionStrategy {
        max_cost,
        primary,
        secondary,
    }
}

/// Typing profile with the standard budget.
pub fn default_typing_strategy() -> SuggestionStrategy {
    typing_strategy(800)
}

/// OCR profile with the standard budget. OCR text warrants a deeper
/// search, so the budget is larger.
pub fn default_ocr_strategy() -> SuggestionStrategy {
    ocr_strategy(2000)
}

// Suggestion generation.
//
// Produces correction candidates for misspelled words by applying edit
// operations (deletion, insertion, replacement, transposition, vowel
// flips, splitting) and validating every candidate through the speller.
//
// - `generators`: the individual edit-operation generators
// - `collector`: per-run state for the cost budget, deduplication,
//   and ranking
// - `strategy`: composes generators into the typing and OCR profiles

pub mod collector;
pub mod generators;
pub mod strategy;

pub use collector::{Candidate, SuggestionCollector};
pub use generators::SuggestionGenerator;
pub use strategy::{
    SuggestionStrategy, default_ocr_strategy, default_typing_strategy, ocr_strategy,
    typing_strategy,
};

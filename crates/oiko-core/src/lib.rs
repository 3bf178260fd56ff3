//! Shared value types for the oiko spelling-suggestion core.
//!
//! This crate holds the types that cross the boundary between the
//! suggestion engine and its host:
//!
//! - [`locale`] -- language/region identifiers scoping which rules apply
//! - [`verdict`] -- per-word speller verdicts
//! - [`failure`] -- classification of why a word was rejected
//! - [`alternatives`] -- the read-only result contract and its single
//!   implementing variant, [`alternatives::SuggestionResult`]
//! - [`character`] -- case utilities shared by suggestion generation

pub mod alternatives;
pub mod character;
pub mod failure;
pub mod locale;
pub mod verdict;

pub use alternatives::{ResultError, SpellAlternatives, SuggestionResult};
pub use failure::FailureKind;
pub use locale::{LanguageTag, LocaleError};
pub use verdict::SpellVerdict;

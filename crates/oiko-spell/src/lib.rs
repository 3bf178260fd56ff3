//! Spelling-suggestion generation and result aggregation.
//!
//! Given a word that a speller does not recognize, this crate produces
//! a deterministic, ranked, duplicate-free list of correction
//! candidates and packages it into an immutable
//! [`oiko_core::SuggestionResult`] for the host to query.
//!
//! # Architecture
//!
//! - [`speller`] -- the `Speller` trait behind which the real
//!   linguistic engine sits, plus an in-memory word-set implementation
//! - [`suggestion`] -- edit-operation generators, the typing/OCR
//!   strategies that orchestrate them, and the collector that enforces
//!   the cost budget, deduplication, and ranking
//! - [`session`] -- the seam the host calls: checks one word and
//!   constructs at most one result

pub mod session;
pub mod speller;
pub mod suggestion;

pub use session::{SessionError, SessionOptions, SpellSession, SuggestionProfile, Verdict};
pub use speller::{Speller, SpellerOptions, WordSetSpeller};

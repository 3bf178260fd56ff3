// Spell checking seam.

pub mod wordset;

pub use wordset::{SpellerOptions, WordSetSpeller};

use oiko_core::SpellVerdict;

/// Trait for spell checkers.
///
/// Implementations take the word as a `char` slice so that suggestion
/// generators can edit candidate buffers by character position. The
/// word is passed exactly as the caller wrote it; case handling is the
/// implementation's responsibility.
pub trait Speller {
    /// Check whether the word is correct as written, or would be with
    /// different capitalization.
    fn spell(&self, word: &[char]) -> SpellVerdict;
}

impl<S: Speller + ?Sized> Speller for &S {
    fn spell(&self, word: &[char]) -> SpellVerdict {
        (**self).spell(word)
    }
}

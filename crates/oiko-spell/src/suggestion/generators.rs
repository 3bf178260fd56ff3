// Edit-operation candidate generators.
//
// Each generator applies one class of edit to the misspelled word and
// validates every candidate through the speller, charging the
// collector's cost budget per check.

use oiko_core::SpellVerdict;
use oiko_core::character::{is_upper, simple_lower, simple_upper};

use super::collector::SuggestionCollector;
use crate::speller::Speller;

/// Back vowels of Finnish vowel harmony, with their front counterparts
/// at the same index.
const BACK_VOWELS: &[char] = &['a', 'o', 'u'];
const FRONT_VOWELS: &[char] = &['ä', 'ö', 'y'];

const SOFT_HYPHEN: char = '\u{00AD}';

/// A single-character edit in a replacement table.
pub type ReplacementPair = (char, char);

/// Trait for individual suggestion generators.
pub trait SuggestionGenerator {
    /// Generate candidates for the word tracked by `collector`,
    /// validating each through `speller`.
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>);
}

/// Spell-check one candidate buffer and record it if it passes.
///
/// A `CapitalizeFirst` verdict records the candidate with its first
/// letter uppercased; a `CapitalizationError` verdict records it as
/// written (fixing the full case pattern would need the engine's
/// analysis data, which sits behind the speller seam).
fn try_candidate(
    speller: &dyn Speller,
    collector: &mut SuggestionCollector<'_>,
    buffer: &[char],
) {
    if collector.should_abort() {
        return;
    }
    let verdict = speller.spell(buffer);
    collector.charge();
    let priority = match verdict {
        SpellVerdict::Correct => 1,
        SpellVerdict::CapitalizeFirst => 2,
        SpellVerdict::CapitalizationError => 3,
        SpellVerdict::Unknown => return,
    };
    let text: String = if verdict == SpellVerdict::CapitalizeFirst {
        std::iter::once(simple_upper(buffer[0]))
            .chain(buffer[1..].iter().copied())
            .collect()
    } else {
        buffer.iter().collect()
    };
    collector.push(text, priority);
}

// ---------------------------------------------------------------------------
// CaseRetry
// ---------------------------------------------------------------------------

/// Retry the word unedited, catching pure capitalization mistakes.
///
/// Costs a single spell check, so it runs as a primary generator.
pub struct CaseRetry;

impl SuggestionGenerator for CaseRetry {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        let word = collector.word().to_vec();
        try_candidate(speller, collector, &word);
    }
}

// ---------------------------------------------------------------------------
// StripSoftHyphens
// ---------------------------------------------------------------------------

/// Remove soft hyphens (U+00AD), repairing words pasted from
/// hyphenated text. Primary generator.
pub struct StripSoftHyphens;

impl SuggestionGenerator for StripSoftHyphens {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        if !collector.word().contains(&SOFT_HYPHEN) {
            return;
        }
        let stripped: Vec<char> = collector
            .word()
            .iter()
            .copied()
            .filter(|&c| c != SOFT_HYPHEN)
            .collect();
        if stripped.is_empty() {
            return;
        }
        try_candidate(speller, collector, &stripped);
    }
}

// ---------------------------------------------------------------------------
// VowelHarmony
// ---------------------------------------------------------------------------

/// Flip back vowels to front vowels and vice versa, in every
/// combination.
///
/// Finnish vowel harmony means a wrong-harmony suffix (e.g. `-lla` for
/// `-llä`) is a common error class. Words with more than 7 vowels are
/// skipped; the combination count would dwarf the cost budget anyway.
pub struct VowelHarmony;

impl VowelHarmony {
    fn flip(c: char) -> Option<char> {
        let lower = simple_lower(c);
        let flipped = if let Some(i) = BACK_VOWELS.iter().position(|&v| v == lower) {
            FRONT_VOWELS[i]
        } else if let Some(i) = FRONT_VOWELS.iter().position(|&v| v == lower) {
            BACK_VOWELS[i]
        } else {
            return None;
        };
        Some(if is_upper(c) { simple_upper(flipped) } else { flipped })
    }
}

impl SuggestionGenerator for VowelHarmony {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        let word = collector.word().to_vec();
        let positions: Vec<usize> = (0..word.len())
            .filter(|&i| Self::flip(word[i]).is_some())
            .collect();
        if positions.is_empty() || positions.len() > 7 {
            return;
        }

        let mut buffer = word.clone();
        for pattern in 1u32..(1 << positions.len()) {
            if collector.should_abort() {
                return;
            }
            buffer.copy_from_slice(&word);
            for (bit, &pos) in positions.iter().enumerate() {
                if pattern & (1 << bit) != 0 {
                    // flip() succeeded for every position collected above
                    if let Some(flipped) = Self::flip(word[pos]) {
                        buffer[pos] = flipped;
                    }
                }
            }
            try_candidate(speller, collector, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

/// Replace single characters according to a `(from, to)` table.
///
/// For each pair, every occurrence of `from` is replaced in turn and
/// the candidate checked. Uppercase occurrences are handled with the
/// uppercased replacement.
pub struct Replacement {
    pub pairs: Vec<ReplacementPair>,
}

impl SuggestionGenerator for Replacement {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        let word = collector.word().to_vec();
        let mut buffer = word.clone();

        for &(from, to) in &self.pairs {
            for pos in 0..word.len() {
                let (matched_from, replacement) = if word[pos] == from {
                    (true, to)
                } else if word[pos] == simple_upper(from) && simple_upper(from) != from {
                    (true, simple_upper(to))
                } else {
                    (false, to)
                };
                if !matched_from {
                    continue;
                }
                buffer[pos] = replacement;
                try_candidate(speller, collector, &buffer);
                buffer[pos] = word[pos];
                if collector.should_abort() {
                    return;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Delete one character at each position.
///
/// Positions whose character equals the previous one (ignoring case)
/// are skipped; deleting either of a doubled pair yields the same
/// candidate.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        let word = collector.word().to_vec();
        if word.len() < 2 {
            return;
        }
        let mut buffer: Vec<char> = Vec::with_capacity(word.len() - 1);
        for pos in 0..word.len() {
            if collector.should_abort() {
                return;
            }
            if pos > 0 && simple_lower(word[pos]) == simple_lower(word[pos - 1]) {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..pos]);
            buffer.extend_from_slice(&word[pos + 1..]);
            try_candidate(speller, collector, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert characters from a frequency-ordered set at every position.
pub struct Insertion {
    /// Characters to try, most common first.
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        let word = collector.word().to_vec();
        if word.is_empty() {
            return;
        }
        let mut buffer: Vec<char> = Vec::with_capacity(word.len() + 1);
        for &extra in &self.characters {
            for pos in 0..=word.len() {
                if collector.should_abort() {
                    return;
                }
                // Inserting next to the same letter duplicates a
                // candidate that Duplication already produces.
                if pos < word.len() && extra == simple_lower(word[pos]) {
                    continue;
                }
                if pos > 0 && extra == simple_lower(word[pos - 1]) {
                    continue;
                }
                buffer.clear();
                buffer.extend_from_slice(&word[..pos]);
                buffer.push(extra);
                buffer.extend_from_slice(&word[pos..]);
                try_candidate(speller, collector, &buffer);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Duplication
// ---------------------------------------------------------------------------

/// Double single characters and insert hyphens.
///
/// Finnish gemination errors (`kauan` / `kauaan`) and missing compound
/// hyphens (`linjaauto` / `linja-auto`) both add one character.
pub struct Duplication;

impl SuggestionGenerator for Duplication {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        let word = collector.word().to_vec();
        if word.len() < 4 {
            return;
        }
        let mut buffer: Vec<char> = Vec::with_capacity(word.len() + 1);

        // Hyphen insertion, away from word edges and existing hyphens.
        for pos in 2..=word.len() - 2 {
            if collector.should_abort() {
                return;
            }
            if word[pos - 2..=pos].contains(&'-')
                || (pos + 1 < word.len() && word[pos + 1] == '-')
            {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..pos]);
            buffer.push('-');
            buffer.extend_from_slice(&word[pos..]);
            try_candidate(speller, collector, &buffer);
        }

        // Character doubling.
        let mut pos = 0;
        while pos < word.len() {
            if collector.should_abort() {
                return;
            }
            // Already doubled, or a character that never doubles.
            if pos + 1 < word.len() && word[pos] == word[pos + 1] {
                pos += 2;
                continue;
            }
            if word[pos] == '-' || word[pos] == '\'' {
                pos += 1;
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..=pos]);
            buffer.push(word[pos]);
            buffer.extend_from_slice(&word[pos + 1..]);
            try_candidate(speller, collector, &buffer);
            pos += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swap pairs of characters within a length-dependent distance.
///
/// Short words try every pair; for longer words the distance shrinks
/// (`50 / len`) to keep the candidate count bounded. Identical
/// characters and harmony-vowel pairs are skipped, the latter because
/// `VowelHarmony` already covers them.
pub struct Transposition;

impl SuggestionGenerator for Transposition {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        let word = collector.word().to_vec();
        let len = word.len();
        if len < 2 {
            return;
        }
        let max_distance = if len <= 8 { len } else { 50 / len };
        if max_distance == 0 {
            return;
        }
        let mut buffer = word.clone();

        for i in 0..len {
            for j in i + 1..(i + 1 + max_distance).min(len) {
                if collector.should_abort() {
                    return;
                }
                let (a, b) = (simple_lower(word[i]), simple_lower(word[j]));
                if a == b {
                    continue;
                }
                let harmony_pair = BACK_VOWELS
                    .iter()
                    .zip(FRONT_VOWELS)
                    .any(|(&back, &front)| (a, b) == (back, front) || (a, b) == (front, back));
                if harmony_pair {
                    continue;
                }
                buffer[i] = word[j];
                buffer[j] = word[i];
                try_candidate(speller, collector, &buffer);
                buffer[i] = word[i];
                buffer[j] = word[j];
            }
        }
    }
}

// ---------------------------------------------------------------------------
// WordSplit
// ---------------------------------------------------------------------------

/// Split the word in two; both halves must pass the spell check.
///
/// Handles a hyphen at the split point, so `suuntaa-antava` can become
/// `suuntaa antava`.
pub struct WordSplit;

impl WordSplit {
    fn half_passes(
        speller: &dyn Speller,
        collector: &mut SuggestionCollector<'_>,
        half: &[char],
    ) -> Option<(String, i32)> {
        let verdict = speller.spell(half);
        collector.charge();
        match verdict {
            SpellVerdict::Correct => Some((half.iter().collect(), 1)),
            SpellVerdict::CapitalizeFirst => {
                let fixed: String = std::iter::once(simple_upper(half[0]))
                    .chain(half[1..].iter().copied())
                    .collect();
                Some((fixed, 2))
            }
            _ => None,
        }
    }
}

impl SuggestionGenerator for WordSplit {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        let word = collector.word().to_vec();
        let len = word.len();
        if len < 4 {
            return;
        }
        for split in 2..=len - 2 {
            if collector.should_abort() {
                return;
            }
            // Splitting right next to a hyphen would leave a dangling one.
            if word[split - 1] == '-' || (split + 1 < len && word[split + 1] == '-') {
                continue;
            }
            let second_start = if word[split] == '-' { split + 1 } else { split };

            let Some((first, prio_first)) =
                Self::half_passes(speller, collector, &word[..split])
            else {
                continue;
            };
            let Some((second, prio_second)) =
                Self::half_passes(speller, collector, &word[second_start..])
            else {
                continue;
            };

            // Dropping a written hyphen is a bigger edit; rank it lower.
            let hyphen_penalty = if second_start > split { 6 } else { 1 };
            collector.push(
                format!("{first} {second}"),
                (prio_first + prio_second) * hyphen_penalty,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// MultiReplacement
// ---------------------------------------------------------------------------

/// Apply up to `depth` replacements from a table simultaneously.
///
/// OCR errors often hit several characters of one word, which the
/// single-edit [`Replacement`] generator cannot repair.
pub struct MultiReplacement {
    pub pairs: Vec<ReplacementPair>,
    pub depth: usize,
}

impl MultiReplacement {
    fn recurse(
        &self,
        speller: &dyn Speller,
        collector: &mut SuggestionCollector<'_>,
        buffer: &mut [char],
        start: usize,
        remaining: usize,
    ) {
        for &(from, to) in &self.pairs {
            for pos in start..buffer.len() {
                if buffer[pos] != from {
                    continue;
                }
                buffer[pos] = to;
                if remaining == 1 {
                    try_candidate(speller, collector, buffer);
                } else {
                    self.recurse(speller, collector, buffer, pos, remaining - 1);
                }
                buffer[pos] = from;
                if collector.should_abort() {
                    return;
                }
            }
        }
    }
}

impl SuggestionGenerator for MultiReplacement {
    fn generate(&self, speller: &dyn Speller, collector: &mut SuggestionCollector<'_>) {
        if self.depth == 0 {
            return;
        }
        let mut buffer = collector.word().to_vec();
        self.recurse(speller, collector, &mut buffer, 0, self.depth);
    }
}

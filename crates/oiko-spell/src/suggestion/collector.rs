// Aggregation state for one suggestion-generation run: candidate cap,
// computational cost budget, deduplication, and ranking.

use std::collections::HashSet;

/// A correction candidate with its computed priority. Lower is better.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub priority: i32,
}

/// Collects candidates during one generation run.
///
/// Each spell check performed while generating costs one unit via
/// [`charge`](Self::charge); the strategy sets the budget. While no
/// candidate has been found the budget is doubled, so hard words get
/// extra search time before the run gives up empty-handed.
pub struct SuggestionCollector<'a> {
    /// The misspelled word, as characters.
    word: &'a [char],
    /// Most candidates that will be kept.
    max_candidates: usize,
    /// Cost budget for the run.
    max_cost: usize,
    current_cost: usize,
    candidates: Vec<Candidate>,
    /// Candidate strings already collected, for duplicate suppression.
    seen: HashSet<String>,
}

impl<'a> SuggestionCollector<'a> {
    pub fn new(word: &'a [char], max_candidates: usize) -> Self {
        Self {
            word,
            max_candidates,
            max_cost: 0,
            current_cost: 0,
            candidates: Vec::with_capacity(max_candidates),
            seen: HashSet::new(),
        }
    }

    /// Whether generation should stop: the candidate cap was reached or
    /// the cost budget ran out (doubled while nothing has been found).
    pub fn should_abort(&self) -> bool {
        if self.candidates.len() >= self.max_candidates {
            return true;
        }
        if self.current_cost < self.max_cost {
            return false;
        }
        // While nothing has been found the budget is doubled.
        !(self.candidates.is_empty() && self.current_cost < 2 * self.max_cost)
    }

    /// Spend one unit of the cost budget.
    pub fn charge(&mut self) {
        self.current_cost += 1;
    }

    pub fn set_max_cost(&mut self, max_cost: usize) {
        self.max_cost = max_cost;
    }

    /// Record a candidate with the given base priority.
    ///
    /// The stored priority is `priority * (found_so_far + 5)`, which
    /// penalizes candidates found later so that generators placed
    /// earlier in the strategy rank their finds higher. Duplicates and
    /// candidates identical to the word itself are silently dropped.
    pub fn push(&mut self, candidate: String, priority: i32) {
        if self.candidates.len() >= self.max_candidates {
            return;
        }
        if candidate.chars().eq(self.word.iter().copied()) {
            return;
        }
        if !self.seen.insert(candidate.clone()) {
            return;
        }
        let rank_penalty = self.candidates.len() as i32 + 5;
        self.candidates.push(Candidate {
            text: candidate,
            priority: priority.saturating_mul(rank_penalty),
        });
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The word suggestions are being generated for.
    pub fn word(&self) -> &[char] {
        self.word
    }

    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Finish the run: sort by priority and return the candidate texts,
    /// best first. The sort is stable, so equal priorities keep
    /// insertion order and the ranking is deterministic.
    pub fn into_ranked(mut self) -> Vec<String> {
        self.candidates.sort_by_key(|c| c.priority);
        self.candidates.into_iter().map(|c| c.text).collect()
    }

    #[cfg(test)]
    pub(crate) fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn new_collector_is_empty() {
        let word = chars("koira");
        let collector = SuggestionCollector::new(&word, 5);
        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
        assert_eq!(collector.word_len(), 5);
        assert_eq!(collector.word(), &word[..]);
    }

    #[test]
    fn aborts_when_cap_reached() {
        let word = chars("ab");
        let mut collector = SuggestionCollector::new(&word, 2);
        collector.set_max_cost(1000);
        collector.push("a".to_string(), 1);
        assert!(!collector.should_abort());
        collector.push("b".to_string(), 1);
        assert!(collector.should_abort());
    }

    #[test]
    fn budget_is_doubled_while_empty() {
        let word = chars("abc");
        let mut collector = SuggestionCollector::new(&word, 5);
        collector.set_max_cost(10);
        for _ in 0..10 {
            collector.charge();
        }
        // At the nominal budget with nothing found: keep going.
        assert!(!collector.should_abort());
        for _ in 0..10 {
            collector.charge();
        }
        // At twice the budget: give up.
        assert!(collector.should_abort());
    }

    #[test]
    fn budget_is_not_doubled_once_found() {
        let word = chars("abc");
        let mut collector = SuggestionCollector::new(&word, 5);
        collector.set_max_cost(10);
        collector.push("x".to_string(), 1);
        for _ in 0..10 {
            collector.charge();
        }
        assert!(collector.should_abort());
    }

    #[test]
    fn duplicates_are_dropped() {
        let word = chars("abc");
        let mut collector = SuggestionCollector::new(&word, 5);
        collector.set_max_cost(1000);
        collector.push("x".to_string(), 1);
        collector.push("x".to_string(), 2);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn later_candidates_are_penalized() {
        let word = chars("abc");
        let mut collector = SuggestionCollector::new(&word, 5);
        collector.set_max_cost(1000);
        collector.push("first".to_string(), 10);
        collector.push("second".to_string(), 10);
        assert_eq!(collector.candidates()[0].priority, 50);
        assert_eq!(collector.candidates()[1].priority, 60);
    }

    #[test]
    fn excess_candidates_are_dropped() {
        let word = chars("abc");
        let mut collector = SuggestionCollector::new(&word, 2);
        collector.set_max_cost(1000);
        collector.push("a".to_string(), 1);
        collector.push("b".to_string(), 1);
        collector.push("c".to_string(), 1);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn ranking_is_by_priority_then_insertion_order() {
        let word = chars("abc");
        let mut collector = SuggestionCollector::new(&word, 5);
        collector.set_max_cost(1000);
        collector.push("slow".to_string(), 100);
        collector.push("fast".to_string(), 1);
        collector.push("also-slow".to_string(), 70); // 70 * 7 = 490 < 500
        let ranked = collector.into_ranked();
        assert_eq!(ranked, vec!["fast", "also-slow", "slow"]);
    }

    #[test]
    fn candidate_equal_to_word_is_dropped() {
        let word = chars("koIra");
        let mut collector = SuggestionCollector::new(&word, 5);
        collector.set_max_cost(1000);
        collector.push("koIra".to_string(), 3);
        assert!(collector.is_empty());
    }

    #[test]
    fn ranked_output_contains_no_duplicates() {
        let word = chars("abc");
        let mut collector = SuggestionCollector::new(&word, 10);
        collector.set_max_cost(1000);
        for text in ["x", "y", "x", "z", "y"] {
            collector.push(text.to_string(), 1);
        }
        let ranked = collector.into_ranked();
        assert_eq!(ranked, vec!["x", "y", "z"]);
    }
}

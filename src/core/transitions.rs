// File: src/core/transitions.rs
use crate::core::types::{Candidate, SkillToken, TieBreak, Turn};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Counts of the skills that immediately followed one query skill.
///
/// Built fresh for every recommendation and dropped afterwards. Candidates are
/// stored in discovery order so ties can be resolved without relying on
/// hash map iteration.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    /// Maps successor skill -> index into `candidates`
    index: HashMap<SkillToken, usize>,
    candidates: Vec<Candidate>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans every adjacent `(a, b)` pair of every turn and counts `b` whenever
    /// `a == current_skill`. O(total skills in corpus).
    pub fn build<'a, I>(turns: I, current_skill: &str) -> Self
    where
        I: IntoIterator<Item = &'a Turn>,
    {
        let mut table = Self::new();
        for turn in turns {
            for pair in turn.windows(2) {
                if pair[0] == current_skill {
                    table.observe(&pair[1]);
                }
            }
        }
        table
    }

    /// Records one more occurrence of `next_skill`.
    pub fn observe(&mut self, next_skill: &str) {
        if let Some(&slot) = self.index.get(next_skill) {
            self.candidates[slot].count += 1;
        } else {
            let slot = self.candidates.len();
            self.index.insert(next_skill.to_string(), slot);
            self.candidates.push(Candidate {
                skill: next_skill.to_string(),
                count: 1,
                first_seen: slot,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn count(&self, skill: &str) -> u64 {
        self.index
            .get(skill)
            .map(|&slot| self.candidates[slot].count)
            .unwrap_or(0)
    }

    /// Consumes the table and returns candidates sorted by descending count,
    /// ties resolved by `tie_break`.
    pub fn into_ranked(self, tie_break: TieBreak) -> Vec<Candidate> {
        let mut ranked = self.candidates;
        match tie_break {
            // Candidates are already in discovery order and sort_by_key is stable.
            TieBreak::FirstSeen => ranked.sort_by_key(|c| Reverse(c.count)),
            TieBreak::Lexicographic => {
                ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)))
            }
        }
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turns(raw: &[&[&str]]) -> Vec<Turn> {
        raw.iter()
            .map(|t| t.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_counts_only_successors_of_query() {
        let corpus = turns(&[&["a", "b", "c"], &["b", "a", "d"]]);
        let table = TransitionTable::build(&corpus, "a");
        assert_eq!(table.len(), 2);
        assert_eq!(table.count("b"), 1);
        assert_eq!(table.count("d"), 1);
        assert_eq!(table.count("c"), 0);
    }

    #[test]
    fn test_final_position_contributes_nothing() {
        let corpus = turns(&[&["x", "y"], &["y"], &[]]);
        let table = TransitionTable::build(&corpus, "y");
        assert!(table.is_empty());
    }

    #[test]
    fn test_repeated_pairs_count_independently() {
        let corpus = turns(&[&["a", "b", "a", "b", "a", "a"]]);
        let table = TransitionTable::build(&corpus, "a");
        assert_eq!(table.count("b"), 2);
        assert_eq!(table.count("a"), 1);
    }

    #[test]
    fn test_first_seen_is_discovery_order() {
        let mut table = TransitionTable::new();
        table.observe("z");
        table.observe("m");
        table.observe("z");
        let ranked = table.into_ranked(TieBreak::FirstSeen);
        assert_eq!(ranked[0].skill, "z");
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[1].first_seen, 1);
    }

    #[test]
    fn test_lexicographic_tie_break() {
        let mut table = TransitionTable::new();
        for skill in ["c", "d", "b"] {
            table.observe(skill);
        }
        let ranked: Vec<String> = table
            .into_ranked(TieBreak::Lexicographic)
            .into_iter()
            .map(|c| c.skill)
            .collect();
        assert_eq!(ranked, vec!["b", "c", "d"]);
    }
}

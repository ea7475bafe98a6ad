// src/core/types.rs
use serde::{Deserialize, Serialize};

/// An opaque skill identifier such as "40o" or "801<".
/// Equality is exact string match, no normalization.
pub type SkillToken = String;

/// One routine as entered in the log, in the order the skills were performed.
pub type Turn = Vec<SkillToken>;

/// A possible next skill together with how often it followed the query skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub skill: SkillToken,
    /// Number of times `skill` immediately followed the query skill. Always > 0.
    pub count: u64,
    /// Order in which the candidate was first discovered while scanning the corpus.
    pub first_seen: usize,
}

/// How candidates with equal counts are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The successor discovered first (turn order, then position) wins.
    #[default]
    FirstSeen,
    /// Ties are ordered by byte-wise string comparison.
    Lexicographic,
}

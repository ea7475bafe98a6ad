use crate::config::RecommenderConfig;
use crate::core::transitions::TransitionTable;
use crate::core::types::{SkillToken, TieBreak, Turn};
use tracing::debug;

/// Number of suggestions shown under the routine field.
pub const DEFAULT_LIMIT: usize = 5;

/// Ranks the skills most likely to follow `current_skill`, using the default
/// limit and first-seen tie-break.
///
/// An empty result means "no suggestion available", never an error.
pub fn recommend(corpus: &[Turn], current_skill: &str) -> Vec<SkillToken> {
    Recommender::default().recommend(corpus, current_skill)
}

// Holds only settings; all per-call state lives in a TransitionTable.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn recommend(&self, corpus: &[Turn], current_skill: &str) -> Vec<SkillToken> {
        self.recommend_scored(corpus, current_skill)
            .into_iter()
            .map(|(skill, _)| skill)
            .collect()
    }

    /// Same ranking as [`Recommender::recommend`], keeping the counts that drove it.
    pub fn recommend_scored(&self, corpus: &[Turn], current_skill: &str) -> Vec<(SkillToken, u64)> {
        let table = TransitionTable::build(corpus, current_skill);
        if table.is_empty() {
            debug!(skill = current_skill, "no recorded successors");
            return vec![];
        }

        debug!(
            skill = current_skill,
            candidates = table.len(),
            "ranking next skills"
        );
        table
            .into_ranked(self.config.tie_break)
            .into_iter()
            .take(self.config.limit)
            .map(|c| (c.skill, c.count))
            .collect()
    }
}

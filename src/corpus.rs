// File: src/corpus.rs
use crate::core::types::Turn;
use crate::error::CorpusError;
use crate::routine::{parse_log, Event};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Every historical turn available to the recommender, oldest first.
///
/// Loaded once per session and never mutated afterwards. The JSON form is the
/// nested list the server renders into the page: `[["40o", "41o"], ["801<"]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    turns: Vec<Turn>,
}

impl Corpus {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        let corpus = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            turns = corpus.len(),
            "loaded corpus"
        );
        Ok(corpus)
    }

    /// Builds a corpus from raw practice-log text, one turn per line.
    pub fn from_log(text: &str, event: Event) -> Self {
        Self::new(parse_log(text, event))
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns a new corpus with `turn` appended; `self` is left untouched.
    pub fn with_turn(&self, turn: Turn) -> Self {
        let mut turns = self.turns.clone();
        turns.push(turn);
        Self { turns }
    }
}

impl From<Vec<Turn>> for Corpus {
    fn from(turns: Vec<Turn>) -> Self {
        Self::new(turns)
    }
}

impl AsRef<[Turn]> for Corpus {
    fn as_ref(&self) -> &[Turn] {
        &self.turns
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let corpus = Corpus::from_json(r#"[["40o", "41o"], [], ["801<"]]"#).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.turns()[0], vec!["40o", "41o"]);
        assert!(corpus.turns()[1].is_empty());
    }

    #[test]
    fn test_empty_json_list() {
        let corpus = Corpus::from_json("[]").unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_rejects_non_string_skills() {
        let err = Corpus::from_json("[[1, 2]]").unwrap_err();
        assert!(matches!(err, CorpusError::Json(_)));
        assert!(matches!(
            Corpus::from_json(r#"{"turns": []}"#),
            Err(CorpusError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Corpus::from_path(Path::new("/nonexistent/turns.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
    }

    #[test]
    fn test_with_turn_leaves_original() {
        let corpus = Corpus::from_log("40o 41o", Event::Trampoline);
        let extended = corpus.with_turn(vec!["801<".to_string()]);
        assert_eq!(corpus.len(), 1);
        assert_eq!(extended.len(), 2);
    }
}

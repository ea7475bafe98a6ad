//! End-to-end checks through the public API

use skill_core::routine::{suggest_for, Event};
use skill_core::{recommend, Corpus, Recommender, RecommenderConfig, TieBreak, Turn};
use std::io::Write;

fn corpus(raw: &[&[&str]]) -> Vec<Turn> {
    raw.iter()
        .map(|t| t.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_unknown_skill_has_no_suggestions() {
    let turns = corpus(&[&["40o", "41o"], &["801<"]]);
    assert!(recommend(&turns, "42/").is_empty());
    assert!(recommend(&turns, "41o").is_empty());
    assert!(recommend(&turns, "801<").is_empty());
}

#[test]
fn test_result_never_exceeds_five() {
    let mut turns = Vec::new();
    for i in 0..50 {
        turns.push(vec!["40o".to_string(), format!("skill{}", i % 12)]);
    }
    let result = recommend(&turns, "40o");
    assert_eq!(result.len(), 5);
    // skill0..skill1 appear 5 times, the rest 4; ties stay in discovery order
    assert_eq!(result, vec!["skill0", "skill1", "skill2", "skill3", "skill4"]);
}

#[test]
fn test_tie_break_policies_on_same_corpus() {
    let turns = corpus(&[&["a", "b", "c"], &["a", "b", "d"], &["a", "b", "b"]]);
    assert_eq!(recommend(&turns, "b"), vec!["c", "d", "b"]);

    let lexicographic = Recommender::new(RecommenderConfig {
        limit: 5,
        tie_break: TieBreak::Lexicographic,
    });
    assert_eq!(lexicographic.recommend(&turns, "b"), vec!["b", "c", "d"]);
}

#[test]
fn test_corpus_file_to_suggestions() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[["40o", "41o", "801<"], ["40o", "41o"], ["40o", "42/"], []]"#
    )
    .unwrap();

    let corpus = Corpus::from_path(file.path()).unwrap();
    assert_eq!(corpus.len(), 4);

    let recommender = Recommender::default();
    assert_eq!(
        suggest_for("801< 40o", corpus.turns(), &recommender),
        vec!["41o", "42/"]
    );
    assert_eq!(
        suggest_for("41o", corpus.turns(), &recommender),
        vec!["801<"]
    );
}

#[test]
fn test_log_text_feeds_recommender() {
    let log = "# warm up\n(40o 41o)x2\n40o x2 42/\n";
    let corpus = Corpus::from_log(log, Event::Trampoline);
    assert_eq!(corpus.len(), 2);
    // 40o -> 41o twice, 40o -> 40o once, 40o -> 42/ once
    assert_eq!(recommend(corpus.turns(), "40o"), vec!["41o", "40o", "42/"]);
}

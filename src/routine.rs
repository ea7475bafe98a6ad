// File: src/routine.rs
// Text handling around the routine log field: turning a practice log into
// turns, and the small edits the log field needs while the user types.

use crate::core::recommender::Recommender;
use crate::core::types::{SkillToken, Turn};
use crate::error::UnknownEvent;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Largest repeat count honored by `(..)xN` and `xN`. Larger counts are kept as literal text.
pub const MAX_REPEAT: usize = 50;

/// Apparatus a practice was logged for. Only affects which lines are notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    #[default]
    Trampoline,
    Dmt,
    Tumbling,
}

impl Event {
    fn note_markers(self) -> &'static [char] {
        match self {
            // Tumbling passes may legitimately start with '-'
            Event::Tumbling => &['#'],
            Event::Trampoline | Event::Dmt => &['-', '#'],
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Event::Trampoline => "trampoline",
            Event::Dmt => "dmt",
            Event::Tumbling => "tumbling",
        };
        f.write_str(name)
    }
}

impl FromStr for Event {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trampoline" => Ok(Event::Trampoline),
            "dmt" => Ok(Event::Dmt),
            "tumbling" => Ok(Event::Tumbling),
            other => Err(UnknownEvent(other.to_string())),
        }
    }
}

fn group_regex() -> &'static Regex {
    static GROUP: OnceLock<Regex> = OnceLock::new();
    GROUP.get_or_init(|| Regex::new(r"\(([^()]*)\)x([0-9]+)").expect("valid group pattern"))
}

fn repeat_regex() -> &'static Regex {
    static REPEAT: OnceLock<Regex> = OnceLock::new();
    REPEAT.get_or_init(|| Regex::new(r"^x([0-9]+)$").expect("valid repeat pattern"))
}

/// True if the line is a coach/athlete note rather than a turn.
pub fn is_comment(line: &str, event: Event) -> bool {
    line.trim_start().starts_with(event.note_markers())
}

/// Expands repeated groups: `(40o 41o)x2` becomes `40o 41o 40o 41o`.
/// A group without a count, or with one above [`MAX_REPEAT`], is left untouched.
pub fn expand_groups(text: &str) -> String {
    group_regex()
        .replace_all(text, |caps: &regex::Captures| match repeat_count(&caps[2]) {
            Some(times) => vec![caps[1].trim(); times].join(" "),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn repeat_count(digits: &str) -> Option<usize> {
    digits.parse().ok().filter(|&n| n <= MAX_REPEAT)
}

/// Splits one log line into skills.
///
/// `\` is read as `/`, and a bare `xN` token repeats the preceding skill so
/// that it appears N times in total. Skills are whitespace separated only, so
/// `40o41o` stays a single token.
pub fn parse_turn(line: &str) -> Turn {
    let mut turn: Turn = Vec::new();
    for token in expand_groups(line).split_whitespace() {
        let times = repeat_regex()
            .captures(token)
            .and_then(|caps| repeat_count(&caps[1]));
        if let Some(times) = times {
            if let Some(prev) = turn.last().cloned() {
                turn.extend(std::iter::repeat(prev).take(times.saturating_sub(1)));
            }
            continue;
        }
        turn.push(token.replace('\\', "/"));
    }
    turn
}

/// Parses a whole practice log, one turn per line. Blank lines and notes are skipped.
pub fn parse_log(text: &str, event: Event) -> Vec<Turn> {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !is_comment(line, event))
        .map(parse_turn)
        .filter(|turn| !turn.is_empty())
        .collect()
}

/// The skill the user is currently on, or `None` while they are between skills.
pub fn last_skill(text: &str) -> Option<&str> {
    if text.is_empty() || text.ends_with(char::is_whitespace) {
        return None;
    }
    text.split_whitespace().last()
}

pub fn count_skills(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Appends a picked suggestion to the routine text.
pub fn append_skill(text: &str, skill: &str) -> String {
    let head = text.trim_end();
    if head.is_empty() {
        skill.to_string()
    } else {
        format!("{} {}", head, skill)
    }
}

/// Suggestions for the current state of the routine field.
pub fn suggest_for(text: &str, corpus: &[Turn], recommender: &Recommender) -> Vec<SkillToken> {
    match last_skill(text) {
        Some(skill) => recommender.recommend(corpus, skill),
        None => vec![],
    }
}

use anyhow::Context;
use skill_core::logging::init_logging;
use skill_core::routine::{count_skills, suggest_for};
use skill_core::{Corpus, Recommender, Settings};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(None).context("loading settings")?;
    init_logging(&settings.logging.level)?;
    info!("--- Skill engine starting ---");

    let corpus = match Corpus::from_path(&settings.corpus.path) {
        Ok(corpus) => corpus,
        Err(e) => {
            warn!(path = %settings.corpus.path.display(), "no corpus, suggestions disabled: {}", e);
            Corpus::default()
        }
    };
    let recommender = Recommender::new(settings.recommender.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        debug!("<- {:?}", input);
        let (command, rest) = input.split_once(' ').unwrap_or((input.as_str(), ""));

        match command {
            "ROUTINE" => {
                let suggestions = suggest_for(rest, corpus.turns(), &recommender);
                send_suggestions(&suggestions, &mut stdout)?;
            }
            "COUNT" => {
                send(&mut stdout, &format!("NUM_SKILLS {}", count_skills(rest)))?;
            }
            "EXIT" => {
                info!("received EXIT");
                break;
            }
            _ => warn!("unknown command: {:?}", command),
        }
    }
    info!("shutting down");
    Ok(())
}

fn send(stdout: &mut io::Stdout, cmd: &str) -> io::Result<()> {
    debug!("-> {:?}", cmd);
    writeln!(stdout, "{}", cmd)
}

fn send_suggestions(suggestions: &[String], stdout: &mut io::Stdout) -> io::Result<()> {
    send(stdout, "CLEAR_SUGGESTIONS")?;

    if suggestions.is_empty() {
        send(stdout, "HIDE_SUGGESTIONS")?;
    } else {
        for (i, skill) in suggestions.iter().enumerate() {
            send(stdout, &format!("SUGGEST {} {}", i, skill))?;
        }
        send(stdout, "SHOW_SUGGESTIONS")?;
    }
    stdout.flush()
}

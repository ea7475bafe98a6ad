use anyhow::Context;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use skill_core::logging::init_logging;
use skill_core::routine::{append_skill, count_skills, last_skill, parse_turn};
use skill_core::{Corpus, Recommender, Settings};
use std::io::{stdin, stdout, Write};
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(None).context("loading settings")?;
    init_logging(&settings.logging.level)?;

    let mut corpus = Corpus::from_path(&settings.corpus.path).unwrap_or_else(|e| {
        warn!("starting with an empty corpus: {}", e);
        Corpus::default()
    });
    let recommender = Recommender::new(settings.recommender.clone());
    let mut routine = String::new();

    loop {
        let suggestions = match last_skill(&routine) {
            Some(skill) => recommender.recommend_scored(corpus.turns(), skill),
            None => vec![],
        };
        print_ui(&routine, &suggestions, &corpus)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "!" => {
                // Commit the routine as a turn for this session only
                let turn = parse_turn(&routine);
                if !turn.is_empty() {
                    corpus = corpus.with_turn(turn);
                }
                routine.clear();
            }
            s if s.starts_with(':') && s.len() > 1 => {
                if let Ok(n) = s[1..].parse::<usize>() {
                    if n > 0 && n <= suggestions.len() {
                        routine = append_skill(&routine, &suggestions[n - 1].0);
                    }
                }
            }
            "" => {}
            s => routine = append_skill(&routine, s),
        }
    }

    println!("\nNothing is saved; bye.");
    Ok(())
}

fn print_ui(routine: &str, suggestions: &[(String, u64)], corpus: &Corpus) -> anyhow::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Trampoline Skill Recommender Simulator".bold());
    println!("---------------------------------------------------------------");
    println!("Type skills and press [Enter]. Pick a suggestion with ':1', ':2'.");
    println!("'!' commits the routine as a turn, 'exit' quits.\n");

    println!("Corpus: {} turns", corpus.len());
    println!("\nRoutine: [{}]", routine.cyan());
    println!("Number of skills: {}", count_skills(routine));

    if !suggestions.is_empty() {
        println!("\nNext skill suggestions:");
        for (i, (skill, count)) in suggestions.iter().enumerate() {
            println!("  :{}: {} (seen {}x)", i + 1, skill.as_str().green(), count);
        }
    } else {
        println!("\n{}", "No suggestions.".dark_grey());
    }
    print!("\n> ");
    out.flush()?;
    Ok(())
}

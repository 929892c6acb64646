//! Decision Binary
//!
//! Reads a table snapshot as JSON and prints what a computer player does.
//! With `--sweep N`, plays N random spots instead and prints a histogram.

use clap::Parser;
use colored::*;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use robobrain::*;
use robobrain::difficulty::Difficulty;
use robobrain::engine::Engine;
use robobrain::engine::Session;
use robobrain::profile::Archetype;
use robobrain::profile::Profile;
use robobrain::table::Action;
use robobrain::table::TableSnapshot;
use std::collections::BTreeMap;
use std::io::Read;

#[derive(Parser)]
#[command(author, version, about = "Pick one action for the player to act", long_about = None)]
struct Args {
    /// Snapshot file. Reads stdin when absent.
    input: Option<std::path::PathBuf>,
    #[arg(short, long, default_value = "tag", value_parser = archetype)]
    archetype: Archetype,
    #[arg(short, long, default_value = "medium", value_parser = difficulty)]
    difficulty: Difficulty,
    /// Custom profile as JSON, overrides --archetype.
    #[arg(short, long)]
    player: Option<std::path::PathBuf>,
    /// Decide this many random spots in parallel.
    #[arg(short, long)]
    sweep: Option<usize>,
    /// Print the decision as JSON.
    #[arg(short, long)]
    json: bool,
}

fn archetype(s: &str) -> Result<Archetype, String> {
    Archetype::try_from(s)
}
fn difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::try_from(s)
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let profile = match args.player.as_ref() {
        Some(path) => serde_json::from_str::<Profile>(&std::fs::read_to_string(path)?)?.sanitized(),
        None => Profile::from(args.archetype),
    };
    let engine = Engine::from(args.difficulty);
    match args.sweep {
        Some(n) => sweep(engine, &profile, n),
        None => once(engine, &profile, args.input, args.json),
    }
}

fn once(engine: Engine, profile: &Profile, input: Option<std::path::PathBuf>, json: bool) -> anyhow::Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let table = serde_json::from_str::<TableSnapshot>(&text)?;
    let decision = engine.decide(&Session::default(), profile, &table)?;
    match json {
        true => println!("{}", serde_json::to_string_pretty(&decision)?),
        false => {
            println!("{} {} {}", profile.name.bold(), engine.difficulty(), paint(decision.action));
            print!("{}", decision.explanation);
        }
    }
    Ok(())
}

fn sweep(engine: Engine, profile: &Profile, n: usize) -> anyhow::Result<()> {
    let start = std::time::Instant::now();
    let actions = (0..n)
        .into_par_iter()
        .map(|_| engine.decide(&Session::default(), profile, &TableSnapshot::random()))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let mut histogram = BTreeMap::<&'static str, usize>::new();
    for decision in actions.iter() {
        *histogram.entry(decision.action.label()).or_default() += 1;
    }
    log::info!("{} spots in {:?}", n, start.elapsed());
    println!("{} {} over {} spots", profile.name.bold(), engine.difficulty(), n);
    for (label, count) in histogram {
        let share = count as f32 / n.max(1) as f32;
        println!("  {:<6} {:>6} {:>6.1}%", label, count, share * 100.0);
    }
    Ok(())
}

fn paint(action: Action) -> ColoredString {
    match action {
        Action::Fold => action.to_string().red(),
        Action::Check | Action::Call(_) => action.to_string().yellow(),
        Action::Bet(_) | Action::Raise(_) => action.to_string().green(),
        Action::AllIn(_) => action.to_string().magenta().bold(),
    }
}

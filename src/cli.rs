//! Interactive console front end.
//!
//! Parses flags, drives a [`Session`] with either a terminal prompt or
//! piped stdin, prints the summary, and saves the results file.
use crate::*;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Rock-paper-scissors against an opponent that learns your habits.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Rounds before the game ends on its own.
    #[arg(long, default_value_t = ROUND_CAP, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub rounds: usize,
    /// Where to write the per-round results.
    #[arg(long, default_value = RESULTS_PATH)]
    pub output: PathBuf,
    /// Spelling of the move names and the exit command.
    #[arg(long, value_enum, default_value_t = Locale::English)]
    pub locale: Locale,
    /// Who you play against.
    #[arg(long, value_enum, default_value_t = Strategy::Markov)]
    pub opponent: Strategy,
    /// Seed the opponent's random throws.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Directory for log files.
    #[arg(long, default_value = LOGS_DIR)]
    pub logs: PathBuf,
    /// Echo info-level logs to the terminal.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Info,
            false => log::LevelFilter::Warn,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            rounds: args.rounds,
            output: args.output.clone(),
            locale: args.locale,
            strategy: args.opponent,
            seed: args.seed,
        }
    }
}

/// Terminal player prompting through dialoguer.
pub struct Console(Locale);

impl From<Locale> for Console {
    fn from(locale: Locale) -> Self {
        Self(locale)
    }
}

impl Player for Console {
    fn decide(&mut self, round: usize) -> Option<String> {
        println!("{}", "-".repeat(40));
        Input::<String>::new()
            .with_prompt(format!(
                "Round {} > your move ({}, or '{}')",
                round,
                self.0.choices(),
                self.0.exit()
            ))
            .allow_empty(true)
            .report(false)
            .interact_text()
            .inspect_err(|e| log::warn!("prompt failed: {}", e))
            .ok()
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Invalid(_) => println!(
                "{}",
                format!("Type one of {} or '{}'.", self.0.choices(), self.0.exit()).red()
            ),
            Event::Resolved(record) => {
                let verdict = match record.outcome() {
                    Outcome::HumanWins => "you win!".green().bold(),
                    Outcome::OpponentWins => "computer wins".red().bold(),
                    Outcome::Tie => "tie".yellow(),
                };
                println!(
                    "   you: {}  vs  computer: {} => {}",
                    self.0.name(record.human()),
                    self.0.name(record.opponent()),
                    verdict
                );
            }
            Event::Capped(rounds) => println!("\nRound limit of {} reached.", rounds),
            Event::Exited => {}
        }
    }
}

/// Console driver for one session.
pub struct CLI(Config);

impl From<Config> for CLI {
    fn from(config: Config) -> Self {
        Self(config)
    }
}

impl CLI {
    pub fn run(&self) {
        log::info!("starting session {:?}", self.0);
        println!("{}", "=== ROCK, PAPER, SCISSORS ===".bold());
        println!("Statistics are computed when the game ends.");
        let mut session = Session::new(&self.0, self.0.opponent());
        let interactive = std::io::stdin().is_terminal();
        match interactive {
            true => session.play(&mut Console::from(self.0.locale)),
            false => session.play(&mut Lines::from(std::io::stdin().lock())),
        }
        if session.log().is_empty() {
            println!("No data produced.");
            return;
        }
        println!("\n{}", "--- FINAL SUMMARY ---".bold());
        println!("{}", session.summary());
        self.save(&session, interactive);
    }

    /// Exports to the configured path. On failure the log is still in
    /// memory, so an interactive user may name another path.
    fn save(&self, session: &Session, interactive: bool) {
        let mut path = self.0.output.clone();
        loop {
            match session.export(&mut CsvSink::from(path.clone())) {
                Ok(Export::Written(n)) => return println!("\nSaved {} rounds to {}", n, path.display()),
                Ok(Export::Empty) => return println!("No data produced."),
                Err(e) => {
                    log::error!("failed to save results: {:#}", e);
                    eprintln!("{} {:#}", "Failed to save results:".red(), e);
                }
            }
            match interactive.then(Self::retry).flatten() {
                Some(next) => path = next,
                None => return,
            }
        }
    }

    fn retry() -> Option<PathBuf> {
        Input::<String>::new()
            .with_prompt("Another path (empty to give up)")
            .allow_empty(true)
            .interact_text()
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}

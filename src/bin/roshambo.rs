//! Roshambo Binary
//!
//! Play rock-paper-scissors against the Markov opponent.
//!
//! Options: --rounds, --output, --locale, --opponent, --seed, --logs, -v

use clap::Parser;
use roshambo::cli::*;
use roshambo::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(&args.logs, args.level())?;
    CLI::from(Config::from(&args)).run();
    Ok(())
}

//! Rock-paper-scissors against an adaptive opponent.
//!
//! The opponent keeps a first-order Markov model of the human's throws
//! (previous move → next move counts) and plays whatever beats the most
//! likely next move. Until enough history exists it falls back to the
//! human's favourite move, and before that to a uniform random throw.
//!
//! ## Modules
//!
//! - [`game`] — moves, outcomes, and the input vocabulary
//! - [`predict`] — frequency counts, history, transition model, opponents
//! - [`session`] — the round loop, round records, and result export
pub mod game;
pub mod predict;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

pub use game::*;
pub use predict::*;
pub use session::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Cumulative move frequency on a 0..=100 scale.
pub type Percent = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Rounds played before the session ends on its own.
pub const ROUND_CAP: usize = 50;
/// Where round records go unless the caller says otherwise.
pub const RESULTS_PATH: &str = "results/roshambo.csv";
/// Directory for timestamped log files.
pub const LOGS_DIR: &str = "logs";

// ============================================================================
// PREDICTION THRESHOLDS
// Below COLD_START human moves the opponent throws at random. Below
// MARKOV_START it counters the overall favourite. From there on it consults
// the transition row of the last human move.
// ============================================================================
/// Human moves required before any prediction is attempted.
pub const COLD_START: usize = 3;
/// Human moves required before the transition model is consulted.
pub const MARKOV_START: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with a timestamped log file.
/// Writes DEBUG to `<dir>/<unix-seconds>.log` and `level` to the terminal.
#[cfg(feature = "cli")]
pub fn log(dir: &std::path::Path, level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = dir.join(format!("{}.log", time));
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).with_context(|| format!("create {}", path.display()))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

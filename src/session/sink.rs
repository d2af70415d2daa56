use crate::*;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Trait for wherever a finished session log ends up.
pub trait Sink {
    fn export(&mut self, records: &[Record]) -> anyhow::Result<()>;
}

/// Comma-separated results file, one header row plus one row per round.
#[derive(Debug, Clone)]
pub struct CsvSink(PathBuf);

impl CsvSink {
    pub const COLUMNS: [&'static str; 10] = [
        "round_number",
        "human_move",
        "opponent_move",
        "outcome",
        "human_pct_rock",
        "human_pct_paper",
        "human_pct_scissors",
        "opponent_pct_rock",
        "opponent_pct_paper",
        "opponent_pct_scissors",
    ];

    pub fn path(&self) -> &Path {
        &self.0
    }

    fn write_header<W: Write>(writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", Self::COLUMNS.join(","))
    }

    fn write_record<W: Write>(writer: &mut W, record: &Record) -> std::io::Result<()> {
        let h = record.human_freq();
        let o = record.opponent_freq();
        writeln!(
            writer,
            "{},{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            record.round(),
            record.human(),
            record.opponent(),
            record.outcome().label(),
            h.get(Move::Rock),
            h.get(Move::Paper),
            h.get(Move::Scissors),
            o.get(Move::Rock),
            o.get(Move::Paper),
            o.get(Move::Scissors),
        )
    }
}

impl From<PathBuf> for CsvSink {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for CsvSink {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl Sink for CsvSink {
    fn export(&mut self, records: &[Record]) -> anyhow::Result<()> {
        let path = self.path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        Self::write_header(&mut writer)
            .and_then(|_| records.iter().try_for_each(|r| Self::write_record(&mut writer, r)))
            .and_then(|_| writer.flush())
            .with_context(|| format!("write {}", path.display()))?;
        log::info!("wrote {} rounds to {}", records.len(), path.display());
        Ok(())
    }
}

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use super::runner::RunRecord;

/// Aggregate figures over a batch of runs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub runs: usize,
    pub wins: usize,
    pub stalled: usize,
    pub best_score: u32,
    pub average_score: f64,
    pub high_score: u32,
}

impl RunSummary {
    #[must_use]
    pub fn from_records(records: &[RunRecord], high_score: u32) -> Self {
        let runs = records.len();
        let total: u64 = records.iter().map(|r| u64::from(r.score)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_score = if runs == 0 {
            0.0
        } else {
            total as f64 / runs as f64
        };
        Self {
            runs,
            wins: records.iter().filter(|r| r.won).count(),
            stalled: records.iter().filter(|r| r.stalled).count(),
            best_score: records.iter().map(|r| r.score).max().unwrap_or(0),
            average_score,
            high_score,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    player: &'a str,
    summary: &'a RunSummary,
    runs: &'a [RunRecord],
}

pub fn write_console_report(
    out: &mut dyn Write,
    records: &[RunRecord],
    summary: &RunSummary,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Session Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==========================".cyan())?;
    writeln!(out, "Total runs: {}", summary.runs)?;
    writeln!(out, "Won: {}", summary.wins.to_string().green())?;
    writeln!(
        out,
        "Lost: {}",
        (summary.runs - summary.wins).to_string().red()
    )?;
    if summary.stalled > 0 {
        writeln!(out, "Stalled: {}", summary.stalled.to_string().yellow())?;
    }
    writeln!(out, "Best score: {}", summary.best_score)?;
    writeln!(out, "Average score: {:.1}", summary.average_score)?;
    writeln!(out, "High score: {}", summary.high_score.to_string().bold())?;
    writeln!(out)?;

    for record in records {
        let status = if record.won {
            "✅ WON ".green()
        } else {
            "❌ LOST".red()
        };
        writeln!(
            out,
            "{status} seed {} #{} [{}]",
            record.seed, record.iteration, record.player
        )?;
        writeln!(
            out,
            "   Score: {}  Levels: {}  Lives left: {}  Lives lost: {}",
            record.score, record.levels_cleared, record.lives_left, record.lives_lost
        )?;
        writeln!(out, "   Hits: {}  Frames: {}", record.hits, record.frames)?;
        writeln!(out, "   \"{}\"", record.end_message)?;
    }
    Ok(())
}

pub fn write_json_report(
    out: &mut dyn Write,
    player: &str,
    records: &[RunRecord],
    summary: &RunSummary,
) -> Result<()> {
    let report = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        player,
        summary,
        runs: records,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

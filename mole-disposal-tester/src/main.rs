mod logic;
mod store;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use mole_disposal_game::{
    MemoryScoreStore, SceneLog, ScoreStore, SeededSpawner, SessionConfig, SessionController,
};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use logic::{
    PlayerKind, RunConfig, RunRecord, RunSummary, SessionRunner, resolve_seed_inputs, split_csv,
    write_console_report, write_json_report,
};
use store::JsonFileStore;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Colored human-readable summary
    Console,
    /// Machine-readable JSON document
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mole-disposal-tester", version = "0.1.0")]
#[command(about = "Headless QA runs for Mole Disposal - full sessions driven by bot players")]
struct Args {
    /// Seeds to run (comma-separated, decimal or 0x-hex)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Sessions per seed, played back to back on one controller
    #[arg(long, default_value_t = 3)]
    iterations: usize,

    /// Bot player driving the avatar
    #[arg(long, value_enum, default_value_t = PlayerKind::Perfect)]
    player: PlayerKind,

    /// Override the configured starting lives
    #[arg(long)]
    lives: Option<u32>,

    /// Override the configured level count
    #[arg(long)]
    levels: Option<usize>,

    /// Seconds per simulated frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Session config JSON (defaults apply for missing fields)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file persisting the high score between invocations
    #[arg(long)]
    store: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let seeds = resolve_seed_inputs(&split_csv(&args.seeds))?;
    anyhow::ensure!(args.dt > 0.0, "--dt must be positive (got {})", args.dt);
    let run_config = RunConfig {
        player: args.player,
        iterations: args.iterations,
        frame_secs: args.dt,
    };

    let (records, high_score) = match &args.store {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .with_context(|| format!("opening score store {}", path.display()))?;
            log::info!("persisting high score to {}", store.path().display());
            run(config, store, run_config, &seeds)?
        }
        None => run(config, MemoryScoreStore::new(), run_config, &seeds)?,
    };

    let summary = RunSummary::from_records(&records, high_score);
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(stdout().lock()),
    };
    match args.report {
        ReportFormat::Console => {
            writeln!(writer, "{}", "🔨 Mole Disposal Automated Tester".bright_green().bold())?;
            write_console_report(&mut writer, &records, &summary)?;
        }
        ReportFormat::Json => {
            write_json_report(&mut writer, args.player.label(), &records, &summary)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(args: &Args) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SessionConfig::load(&raw)?
        }
        None => SessionConfig::default(),
    };
    if let Some(levels) = args.levels {
        config = config.with_level_count(levels);
    }
    if let Some(lives) = args.lives {
        config = config.with_starting_lives(lives);
    }
    config.validate()?;
    Ok(config)
}

fn run<S: ScoreStore>(
    config: SessionConfig,
    store: S,
    run_config: RunConfig,
    seeds: &[u64],
) -> Result<(Vec<RunRecord>, u32)> {
    let first_seed = seeds.first().copied().unwrap_or_default();
    let mut controller =
        SessionController::new(config, SceneLog::new(), SeededSpawner::new(first_seed), store)?;
    controller.initialize();
    let mut runner = SessionRunner::new(controller, run_config);
    let records = runner.run_seeds(seeds);
    Ok((records, runner.controller().high_score()))
}

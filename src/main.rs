//! Replay a recorded authoring session and print the exported position.
//!
//! ```text
//! ccg-position --catalog /cards --fallback data/cards.json --script session.json
//! ```

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use ccg_position::cards::{load_catalog, source_for};
use ccg_position::{Action, GameState, SessionConfig, SnapshotBuilder};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Build a card-game position from recorded actions and export it as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Catalog file path or http(s) URL
    #[arg(long)]
    catalog: String,

    /// Catalog source tried once if the primary one fails
    #[arg(long)]
    fallback: Option<String>,

    /// JSON array of recorded actions; omit for an empty position
    #[arg(long)]
    script: Option<PathBuf>,

    /// Session config (starting life, active player, id numbering)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the document here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Single-line JSON instead of indented
    #[arg(long)]
    compact: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn main() -> ExitCode {
    let args = Args::parse();
    simple_logging::log_to_stderr(args.log_level.into());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => SessionConfig::from_json(&fs::read_to_string(path)?)?,
        None => SessionConfig::default(),
    };

    let primary = source_for(&args.catalog);
    let fallback = args.fallback.as_deref().map(source_for);
    let load = load_catalog(&*primary, fallback.as_deref());
    eprintln!("{}", load.status);

    let mut state = GameState::with_config(&config);
    if let Some(path) = &args.script {
        let actions: Vec<Action> = serde_json::from_str(&fs::read_to_string(path)?)?;
        let total = actions.len();
        let changed = state.apply_all(actions);
        info!("replayed {total} actions ({changed} changed the position)");
    }

    let document = SnapshotBuilder::new(&load.catalog).build(&state)?;
    let json = if args.compact {
        document.to_json()?
    } else {
        document.to_json_pretty()?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

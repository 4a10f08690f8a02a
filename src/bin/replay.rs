//! Headless Replay Runner
//!
//! Feeds a recorded match through the bot and prints the per-turn decisions
//! as JSON.

use camp_warden::core::config::WardenConfig;
use camp_warden::simulation::{run_replay, ReplayFile};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Replay recorded snapshots with a fixed seed
#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Replay recorded snapshots and print decisions as JSON")]
struct Args {
    /// Replay file (JSON)
    file: PathBuf,

    /// TOML file overriding the tuning defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Patrol seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("camp_warden=warn")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match WardenConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => WardenConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let replay = match ReplayFile::load(&args.file) {
        Ok(replay) => replay,
        Err(e) => {
            eprintln!("Failed to load replay {}: {}", args.file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let reports = run_replay(&replay, config);
    let json = if args.pretty {
        serde_json::to_string_pretty(&reports)
    } else {
        serde_json::to_string(&reports)
    };

    match json {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize reports: {}", e);
            ExitCode::FAILURE
        }
    }
}

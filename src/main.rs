//! Camp Warden - Entry Point
//!
//! Reads the handshake and per-turn snapshots from stdin and answers with one
//! command line per hero on stdout. Logs go to stderr so they never mix with
//! the protocol.

use camp_warden::core::config::WardenConfig;
use camp_warden::core::error::Result;
use camp_warden::protocol::{write_commands, SnapshotReader};
use camp_warden::simulation::MatchState;
use camp_warden::spatial::Position;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Camp Warden - defend one base, harass the other
#[derive(Parser, Debug)]
#[command(name = "camp-warden")]
#[command(about = "Hero bot speaking the two-base arena protocol")]
struct Args {
    /// TOML file overriding the tuning defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Patrol seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. "camp_warden=debug"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("camp_warden=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => WardenConfig::load(path)?,
        None => WardenConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let stdin = io::stdin();
    let mut reader = SnapshotReader::new(stdin.lock());
    let handshake = reader.read_handshake()?;
    tracing::info!(
        base_x = handshake.base.x,
        base_y = handshake.base.y,
        heroes = handshake.heroes_per_player,
        seed = config.seed,
        "Camp Warden starting"
    );

    let mut state = MatchState::new(Position::from_raw(handshake.base), config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    while let Some(snapshot) = reader.read_turn()? {
        let outcome = state.play_turn(&snapshot);
        write_commands(&mut out, &outcome.commands())?;
    }

    tracing::info!(turns = state.turn(), "Input closed, shutting down");
    Ok(())
}

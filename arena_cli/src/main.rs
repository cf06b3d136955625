//! Arena - play a duel against an automated opponent from the terminal
//!
//! Reads settings from an optional TOML file, loads the equipment catalog
//! and runs an interactive session on stdin/stdout. Logs go to stderr and
//! honour `RUST_LOG`.

mod config;
mod session;

use arena_core::{Arena, ArenaError, EquipmentCatalog, MatchEngine};
use clap::Parser;
use config::{ArenaConfig, ConfigError};
use session::Session;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Arena(#[from] ArenaError),
    #[error("terminal IO failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Turn-based duel against an automated opponent")]
struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Equipment JSON file, overrides the config
    #[arg(short, long)]
    equipment: Option<PathBuf>,
    /// Seed for reproducible fights, overrides the config
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ArenaConfig::load_from_path(path)?,
        None => ArenaConfig::default(),
    };
    if let Some(path) = cli.equipment {
        config.equipment_path = path;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = EquipmentCatalog::load(&config.equipment_path).map_err(ArenaError::from)?;
    let engine = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed seed");
            MatchEngine::from_seed(seed)
        }
        None => MatchEngine::new(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(Arena::with_engine(catalog, engine), stdin.lock(), stdout.lock()).run()
}

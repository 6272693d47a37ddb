//! timelog library root.
//! Exposes the CLI parser, the high-level run() function and the
//! parsing/aggregation core used by the `timelog` binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::logic::Core;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Events { .. } => cli::commands::events::handle(&cli.command),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse CLI (usage errors exit with status 2 before anything else runs)
    let cli = Cli::parse();

    // load config once, honouring --config
    let cfg_path = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };
    let cfg = Config::load(&cfg_path)?;

    logging::init_logging(&logging::level_for(cli.verbose, &cfg.log_level));
    tracing::debug!(command = ?cli.command, config = %cfg_path.display(), "starting");

    dispatch(&cli, &cfg, &cfg_path)
}

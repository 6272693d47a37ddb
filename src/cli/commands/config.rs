use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { init, force, .. } = cmd {
        // ---- INIT CONFIG ----
        if *init {
            return ConfigLogic::init(path, *force);
        }

        // ---- PRINT CONFIG (default) ----
        ConfigLogic::print(cfg)?;
    }
    Ok(())
}

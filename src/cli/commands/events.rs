use crate::cli::parser::Commands;
use crate::core::log_file;
use crate::core::parser;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `events` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Events { log } = cmd {
        let lines = log_file::read_lines(&expand_tilde(log))?;
        let parsed = parser::parse_lines(&lines)?;

        for ev in parsed.sorted_events() {
            println!("{ev}");
        }
    }
    Ok(())
}

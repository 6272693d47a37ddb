use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::periods::DayPeriods;
use crate::core::log_file;
use crate::core::logic::Core;
use crate::core::parser;
use crate::errors::AppResult;
use crate::export::{self, ReportFormat};
use crate::models::day_summary::DaySummary;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::num::NonZeroUsize;
use tracing::info;

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        log,
        limit,
        format,
        output,
        force,
        details,
    } = cmd
    {
        let path = expand_tilde(log);
        let lines = log_file::read_lines(&path)?;
        let parsed = parser::parse_lines(&lines)?;

        let days = Core::build_day_periods(&parsed);
        let limit = cfg.effective_limit(limit.map(NonZeroUsize::get));
        let summaries = Core::build_summaries(&days, limit);
        let format = format.unwrap_or(cfg.default_format);

        info!(
            days = summaries.len(),
            format = format.as_str(),
            ?limit,
            "report ready"
        );

        if *details {
            if format == ReportFormat::Text && output.is_none() {
                print_details(&summaries, &days);
                return Ok(());
            }
            warning("--details only applies to text output on stdout, ignoring it");
        }

        match output {
            Some(out) => export::export_to_file(&summaries, format, &expand_tilde(out), *force)?,
            None => export::export_to_stdout(&summaries, format)?,
        }
    }
    Ok(())
}

fn print_details(summaries: &[DaySummary], days: &DayPeriods) {
    for summary in summaries {
        println!("{summary}");
        if let Some(periods) = days.get(&summary.date) {
            for period in periods {
                println!("  {period}");
            }
        }
    }
}

use crate::export::ReportFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::num::NonZeroUsize;

/// Command-line interface definition for timelog
/// Turns a Start/End time log into per-day working hour summaries
#[derive(Parser, Debug)]
#[command(
    name = "timelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarise a Start/End time log into daily working hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one summary line per day: first start, last end and total hours
    Report {
        /// Time log file with `Start: D.M.YYYY H:mm` / `End: D.M.YYYY H:mm` lines
        #[arg(long = "log", value_name = "FILE")]
        log: String,

        /// Print at most N days (earliest first)
        #[arg(long = "limit", short = 'n', value_name = "N")]
        limit: Option<NonZeroUsize>,

        /// Output format (defaults to the configured one, usually text)
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f', requires = "output")]
        force: bool,

        /// List the working periods below each day (text format only)
        #[arg(long = "details")]
        details: bool,
    },

    /// List every recognised event in chronological order
    Events {
        /// Time log file
        #[arg(long = "log", value_name = "FILE")]
        log: String,
    },

    /// Show or create the configuration file
    Config {
        #[arg(
            long = "print",
            conflicts_with = "init",
            help = "Print the effective configuration"
        )]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}

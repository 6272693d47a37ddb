// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::SummaryExport;

use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

/// Write the summaries in `format` to `out`.
pub fn write_report<W: Write>(
    summaries: &[DaySummary],
    format: ReportFormat,
    out: &mut W,
) -> AppResult<()> {
    match format {
        ReportFormat::Text => {
            for s in summaries {
                writeln!(out, "{s}")?;
            }
            Ok(())
        }
        ReportFormat::Json => json_csv::write_json(&to_export(summaries), out),
        ReportFormat::Csv => json_csv::write_csv(&to_export(summaries), out),
    }
}

/// Write the summaries to `path`, refusing to replace an existing file unless `force`.
pub fn export_to_file(
    summaries: &[DaySummary],
    format: ReportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    let mut writer = BufWriter::new(File::create(path)?);
    write_report(summaries, format, &mut writer)?;
    writer.flush()?;

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}

/// Write the summaries to stdout.
pub fn export_to_stdout(summaries: &[DaySummary], format: ReportFormat) -> AppResult<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(summaries, format, &mut lock)?;
    lock.flush()?;
    Ok(())
}

fn to_export(summaries: &[DaySummary]) -> Vec<SummaryExport> {
    summaries.iter().map(SummaryExport::from).collect()
}

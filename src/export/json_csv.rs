// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::SummaryExport;
use std::io::Write;

/// Export JSON pretty-printed, followed by a newline.
pub(crate) fn write_json<W: Write>(rows: &[SummaryExport], out: &mut W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    writeln!(out)?;
    Ok(())
}

/// Export CSV (header included thanks to serde).
pub(crate) fn write_csv<W: Write>(rows: &[SummaryExport], out: &mut W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}

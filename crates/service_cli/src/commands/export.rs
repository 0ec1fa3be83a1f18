//! Export command implementation
//!
//! Writes the monthly series as CSV with the header
//! `month,label,incoming,outgoing,net`.

use std::path::Path;

use tracing::info;

use super::series::{series_rows, SeriesRow};
use super::Context;
use crate::Result;

/// Run the export command
pub fn run(ctx: &Context, output: &Path) -> Result<()> {
    let rows = series_rows(ctx);
    write_csv(&rows, output)?;
    info!(rows = rows.len(), path = %output.display(), "Series exported");
    println!("Wrote {} months to {}", rows.len(), output.display());
    Ok(())
}

fn write_csv(rows: &[SeriesRow], output: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

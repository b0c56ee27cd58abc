//! CSV output for `Legal_Resource__c` import files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use lrm_model::Record;

/// Writes records to `path` as CSV in the given column order.
///
/// The header is always written, so an empty record set produces a
/// header-only file. Fields a record does not carry are written empty.
/// Parent directories are created when absent.
pub fn write_csv(path: &Path, columns: &[&str], records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("open output file {}", path.display()))?;
    writer
        .write_record(columns)
        .with_context(|| format!("write header to {}", path.display()))?;
    for record in records {
        writer
            .write_record(columns.iter().map(|column| record.value_or_empty(column)))
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;

    debug!(path = %path.display(), rows = records.len(), columns = columns.len(), "wrote csv");
    Ok(())
}

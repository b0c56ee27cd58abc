use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use lrm_ingest::read_resource_csv;
use lrm_model::{
    CULTURALLY_SPECIFIC_COLUMN, CULTURALLY_SPECIFIC_JSON_FIELD, DESCRIPTION_COLUMN, FIELD_MAPPING,
    LANGUAGES_COLUMN, LANGUAGES_JSON_FIELD, SERVICES_COLUMN, SERVICES_JSON_FIELD, Schema,
};
use lrm_output::write_csv;
use lrm_transform::transform_records;

use crate::cli::ConvertArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

/// Prints the source-to-CRM field mapping table.
pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Source field", "CRM field"]);
    apply_table_style(&mut table);
    for (source, target) in FIELD_MAPPING {
        table.add_row(vec![source, target]);
    }
    for (source, target) in [
        (SERVICES_JSON_FIELD, SERVICES_COLUMN),
        (LANGUAGES_JSON_FIELD, LANGUAGES_COLUMN),
        (CULTURALLY_SPECIFIC_JSON_FIELD, CULTURALLY_SPECIFIC_COLUMN),
    ] {
        table.add_row(vec![source, target]);
    }
    table.add_row(vec!["(synthesized)", DESCRIPTION_COLUMN]);
    println!("{table}");
    Ok(())
}

/// Runs one read-transform-write pass under the given schema.
pub fn run_convert(schema: Schema, args: &ConvertArgs) -> Result<RunResult> {
    let input = &args.input;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(schema.default_output()));
    let span = info_span!("convert", schema = schema.label());
    let _guard = span.enter();

    let read_start = Instant::now();
    let records = read_resource_csv(input)?;
    info!(
        rows = records.len(),
        duration_ms = read_start.elapsed().as_millis(),
        "read complete"
    );
    if records.is_empty() {
        warn!(input = %input.display(), "no rows found, writing header-only output");
    }

    let transform_start = Instant::now();
    let transformed = transform_records(schema, &records);
    info!(
        rows = transformed.len(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    let columns = schema.columns();
    let write_start = Instant::now();
    write_csv(&output, &columns, &transformed)
        .with_context(|| format!("write output {}", output.display()))?;
    info!(
        rows = transformed.len(),
        columns = columns.len(),
        duration_ms = write_start.elapsed().as_millis(),
        output = %output.display(),
        "write complete"
    );

    Ok(RunResult {
        schema,
        input: input.clone(),
        output,
        rows_read: records.len(),
        rows_written: transformed.len(),
        columns: columns.len(),
    })
}

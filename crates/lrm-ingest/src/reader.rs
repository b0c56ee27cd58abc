use std::path::Path;

use tracing::debug;

use lrm_model::{LrmError, Record, Result};

/// Reads a resource export CSV into memory as header-keyed records.
///
/// The header row determines field names. No schema validation happens
/// here: unknown columns are carried along and missing ones surface later
/// as empty values. Headers and cells are trimmed, with a leading BOM
/// stripped.
pub fn read_resource_csv(path: &Path) -> Result<Vec<Record>> {
    if !path.is_file() {
        return Err(LrmError::InputNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| malformed(path, source))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| malformed(path, source))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| malformed(path, source))?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.clone(), normalize_cell(cell)))
            .collect();
        records.push(record);
    }

    debug!(path = %path.display(), rows = records.len(), columns = headers.len(), "read csv");
    Ok(records)
}

fn malformed(path: &Path, source: csv::Error) -> LrmError {
    LrmError::MalformedCsv {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_header_keyed_records() {
        let file = write_csv("organizationName,city\nSafe House,Portland\nHaven,Salem\n");
        let records = read_resource_csv(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("organizationName"), Some("Safe House"));
        assert_eq!(records[1].get("city"), Some("Salem"));
    }

    #[test]
    fn strips_bom_and_whitespace() {
        let file = write_csv("\u{feff}organizationName, city \n Safe House ,Portland\n");
        let records = read_resource_csv(file.path()).unwrap();

        assert_eq!(records[0].get("organizationName"), Some("Safe House"));
        assert_eq!(records[0].get("city"), Some("Portland"));
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let error = read_resource_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(error, LrmError::InputNotFound(_)));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let file = write_csv("a,b\n1,2,3\n");
        let error = read_resource_csv(file.path()).unwrap_err();
        assert!(matches!(error, LrmError::MalformedCsv { .. }));
    }

    #[test]
    fn header_only_file_yields_no_records() {
        let file = write_csv("organizationName,city\n");
        let records = read_resource_csv(file.path()).unwrap();
        assert!(records.is_empty());
    }
}

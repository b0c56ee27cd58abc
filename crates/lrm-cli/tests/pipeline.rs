//! End-to-end tests for the read-transform-write pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use lrm_cli::cli::ConvertArgs;
use lrm_cli::commands::run_convert;
use lrm_model::Schema;

const INPUT_HEADER: &str = "id,organizationName,resourceType,city,state,latitude,longitude,servesLGBTQIA,servicesJson";

fn write_input(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("legal_resources.csv");
    let mut content = String::from(INPUT_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

fn convert(schema: Schema, input: PathBuf, output: PathBuf) -> lrm_cli::types::RunResult {
    let args = ConvertArgs {
        input,
        output: Some(output),
    };
    run_convert(schema, &args).unwrap()
}

#[test]
fn full_conversion_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        &[r#"res-1,Safe House,shelter,Portland,OR,45.52,-122.68,1,"[""counseling"",""housing""]""#],
    );
    let output = dir.path().join("out").join("full.csv");

    let result = convert(Schema::Full, input, output.clone());

    assert_eq!(result.rows_read, 1);
    assert_eq!(result.rows_written, 1);
    let content = fs::read_to_string(&output).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    let row = lines.next().unwrap();
    assert!(header.starts_with("External_ID__c,Resource_Type__c,Organization_Name__c"));
    assert!(header.ends_with("Services__c,Languages_Supported__c,Culturally_Specific__c,Description__c"));
    assert!(row.starts_with("res-1,Shelter,Safe House"));
    assert!(row.contains("counseling;housing"));
    assert!(row.contains("Services: counseling;housing"));
}

#[test]
fn minimal_conversion_stamps_run_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        &[
            "res-1,Safe House,shelter,Portland,OR,45.52,-122.68,1,[]",
            "res-2,Haven,hotline,Salem,OR,44.94,-123.03,0,[]",
        ],
    );
    let output = dir.path().join("minimal.csv");

    let result = convert(Schema::Minimal, input, output.clone());

    assert_eq!(result.rows_written, 2);
    let content = fs::read_to_string(&output).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Name,Organization_Name__c,Resource_Type__c,City__c,State__c,Latitude__c,Longitude__c,Created_Timestamp__c,Last_Modified_Timestamp__c"
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with("Safe House,Safe House,shelter,Portland,OR,45.52,-122.68,"));
    assert!(first.ends_with(".000Z"));
}

#[test]
fn simple_conversion_writes_names_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        &["res-1,Safe House,shelter,Portland,OR,45.52,-122.68,1,[]"],
    );
    let output = dir.path().join("simple.csv");

    convert(Schema::Simple, input, output.clone());

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "Name\nSafe House\n");
}

#[test]
fn zero_rows_produce_header_only_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), &[]);
    let output = dir.path().join("empty.csv");

    let result = convert(Schema::Full, input, output.clone());

    assert_eq!(result.rows_read, 0);
    assert_eq!(result.rows_written, 0);
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let args = ConvertArgs {
        input: dir.path().join("nope.csv"),
        output: Some(dir.path().join("out.csv")),
    };
    let error = run_convert(Schema::Full, &args).unwrap_err();
    assert!(error.to_string().contains("input file not found"));
}

#[test]
fn row_count_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<String> = (0..25)
        .map(|i| format!("res-{i},Org {i},therapy,Salem,OR,44.9,-123.0,0,[]"))
        .collect();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(dir.path(), &row_refs);

    for schema in [Schema::Full, Schema::Minimal, Schema::Simple] {
        let output = dir.path().join(format!("{}.csv", schema.label()));
        let result = convert(schema, input.clone(), output.clone());
        assert_eq!(result.rows_read, 25);
        assert_eq!(result.rows_written, 25);
        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 26);
    }
}

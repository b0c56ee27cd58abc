//! Record-level transformers, one per output schema.

use chrono::Utc;

use lrm_model::{
    CULTURALLY_SPECIFIC_COLUMN, CULTURALLY_SPECIFIC_JSON_FIELD, DESCRIPTION_COLUMN, FIELD_MAPPING,
    LANGUAGES_COLUMN, LANGUAGES_JSON_FIELD, RESOURCE_TYPE_FIELD, Record, SERVICES_COLUMN,
    SERVICES_JSON_FIELD, Schema,
};

use crate::normalize::{flatten_json_list, is_boolean_field, map_resource_type, normalize_boolean};

/// Transforms every record under the given schema's policy.
///
/// Never fails on row content: every anomaly degrades to an empty or
/// default value, and the output always has one record per input record.
#[must_use]
pub fn transform_records(schema: Schema, records: &[Record]) -> Vec<Record> {
    match schema {
        Schema::Full => records.iter().map(transform_full).collect(),
        Schema::Minimal => {
            // One shared timestamp for the whole run.
            let timestamp = run_timestamp();
            records
                .iter()
                .map(|record| transform_minimal(record, &timestamp))
                .collect()
        }
        Schema::Simple => records.iter().map(transform_simple).collect(),
    }
}

/// Current UTC time in the CRM's ISO 8601 timestamp form.
#[must_use]
pub fn run_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

fn transform_full(record: &Record) -> Record {
    let mut out = Record::new();

    for (source, target) in FIELD_MAPPING {
        let raw = record.value_or_empty(source);
        if source == RESOURCE_TYPE_FIELD {
            out.insert(target, map_resource_type(raw));
        } else if is_boolean_field(source) {
            out.insert(target, normalize_boolean(raw));
        } else if raw.is_empty() || raw == "N/A" {
            out.insert(target, "");
        } else {
            out.insert(target, raw);
        }
    }

    for (json_field, column) in [
        (SERVICES_JSON_FIELD, SERVICES_COLUMN),
        (LANGUAGES_JSON_FIELD, LANGUAGES_COLUMN),
        (CULTURALLY_SPECIFIC_JSON_FIELD, CULTURALLY_SPECIFIC_COLUMN),
    ] {
        if let Some(raw) = record.get(json_field) {
            out.insert(column, flatten_json_list(raw));
        }
    }

    // Synthesize a description from the services list when the source has
    // no explicit one.
    if out.value_or_empty(DESCRIPTION_COLUMN).is_empty() {
        let services = flatten_json_list(record.value_or_empty(SERVICES_JSON_FIELD));
        if !services.is_empty() {
            out.insert(DESCRIPTION_COLUMN, format!("Services: {services}"));
        }
    }

    out
}

fn transform_minimal(record: &Record, timestamp: &str) -> Record {
    let name = record.value_or_empty("organizationName");
    let mut out = Record::new();
    out.insert("Name", name);
    out.insert("Organization_Name__c", name);
    out.insert("Resource_Type__c", record.value_or_empty(RESOURCE_TYPE_FIELD));
    out.insert("City__c", record.value_or_empty("city"));
    out.insert("State__c", record.value_or_empty("state"));
    out.insert("Latitude__c", record.value_or_empty("latitude"));
    out.insert("Longitude__c", record.value_or_empty("longitude"));
    out.insert("Created_Timestamp__c", timestamp);
    out.insert("Last_Modified_Timestamp__c", timestamp);
    out
}

fn transform_simple(record: &Record) -> Record {
    let mut out = Record::new();
    out.insert("Name", record.value_or_empty("organizationName"));
    out
}

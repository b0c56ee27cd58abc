//! Value-level normalization helpers.
//!
//! All helpers are lenient: anomalies degrade to a default value and emit a
//! warning instead of failing the run.

use serde_json::Value;
use tracing::warn;

/// Resource-type token → CRM picklist label.
const RESOURCE_TYPE_LABELS: [(&str, &str); 7] = [
    ("shelter", "Shelter"),
    ("legal_aid", "Legal Aid"),
    ("hotline", "Hotline"),
    ("therapy", "Therapy"),
    ("financial_assistance", "Financial Assistance"),
    ("immigration_support", "Immigration Support"),
    ("housing_assistance", "Housing Assistance"),
];

/// Normalizes a raw flag value to the CRM boolean representation.
///
/// Unrecognized tokens default to `FALSE`; the import must never reject a
/// row over a stray flag value.
pub fn normalize_boolean(raw: &str) -> &'static str {
    match raw {
        "1" | "true" | "True" | "TRUE" => "TRUE",
        "0" | "false" | "False" | "FALSE" | "" => "FALSE",
        other => {
            warn!(token = other, "unrecognized boolean token, defaulting to FALSE");
            "FALSE"
        }
    }
}

/// Returns true when a source field holds a boolean flag, by naming
/// convention.
#[must_use]
pub fn is_boolean_field(source: &str) -> bool {
    source.starts_with("serves")
        || source.starts_with("is")
        || source.ends_with("Inclusive")
        || source.ends_with("Specialized")
        || source.ends_with("Support")
        || source.ends_with("Accessible")
        || source.ends_with("Scale")
}

/// Flattens a JSON-encoded list into a semicolon-delimited string.
///
/// Empty input, `N/A`, and the empty-list literal all flatten to the empty
/// string. A parsed non-list value is stringified. Malformed JSON passes
/// through unchanged so the raw value is still visible in the output.
#[must_use]
pub fn flatten_json_list(raw: &str) -> String {
    if raw.is_empty() || raw == "N/A" || raw == "[]" {
        return String::new();
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(";"),
        Ok(Value::String(text)) => text,
        Ok(other) => other.to_string(),
        Err(error) => {
            warn!(value = raw, %error, "malformed JSON field, passing value through");
            raw.to_string()
        }
    }
}

/// Maps a resource-type token to its picklist label.
///
/// Unknown tokens fall back to a title-cased rendering of the token, on the
/// assumption that new categories still resemble readable words.
#[must_use]
pub fn map_resource_type(raw: &str) -> String {
    if let Some((_, label)) = RESOURCE_TYPE_LABELS
        .iter()
        .find(|(token, _)| *token == raw)
    {
        return (*label).to_string();
    }
    if !raw.is_empty() {
        warn!(token = raw, "unknown resource type, falling back to title case");
    }
    title_case(raw)
}

/// Capitalizes the first letter of every alphabetic run, lowercasing the
/// rest (so `peer_support` becomes `Peer_Support`).
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_tokens_normalize() {
        assert_eq!(normalize_boolean("1"), "TRUE");
        assert_eq!(normalize_boolean("true"), "TRUE");
        assert_eq!(normalize_boolean("True"), "TRUE");
        assert_eq!(normalize_boolean("TRUE"), "TRUE");
        assert_eq!(normalize_boolean("0"), "FALSE");
        assert_eq!(normalize_boolean("false"), "FALSE");
        assert_eq!(normalize_boolean(""), "FALSE");
        assert_eq!(normalize_boolean("maybe"), "FALSE");
    }

    #[test]
    fn boolean_normalization_is_idempotent() {
        for token in ["1", "true", "0", "garbage", ""] {
            let once = normalize_boolean(token);
            assert_eq!(normalize_boolean(once), once);
        }
    }

    #[test]
    fn boolean_field_predicate() {
        assert!(is_boolean_field("servesLGBTQIA"));
        assert!(is_boolean_field("is24_7"));
        assert!(is_boolean_field("transInclusive"));
        assert!(is_boolean_field("lgbtqSpecialized"));
        assert!(is_boolean_field("uVisaSupport"));
        assert!(is_boolean_field("wheelchairAccessible"));
        assert!(is_boolean_field("slidingScale"));
        // Flags that the naming convention does not catch are copied verbatim.
        assert!(!is_boolean_field("bipocLed"));
        assert!(!is_boolean_field("noICEContact"));
        assert!(!is_boolean_field("aslInterpreter"));
        assert!(!is_boolean_field("organizationName"));
    }

    #[test]
    fn flattens_simple_list() {
        assert_eq!(flatten_json_list(r#"["a","b"]"#), "a;b");
        assert_eq!(
            flatten_json_list(r#"["counseling","housing"]"#),
            "counseling;housing"
        );
    }

    #[test]
    fn empty_tokens_flatten_to_empty() {
        assert_eq!(flatten_json_list(""), "");
        assert_eq!(flatten_json_list("N/A"), "");
        assert_eq!(flatten_json_list("[]"), "");
    }

    #[test]
    fn non_list_json_is_stringified() {
        assert_eq!(flatten_json_list(r#""hotline""#), "hotline");
        assert_eq!(flatten_json_list("42"), "42");
    }

    #[test]
    fn malformed_json_passes_through() {
        assert_eq!(flatten_json_list("{not valid"), "{not valid");
    }

    #[test]
    fn known_resource_types_map_to_labels() {
        assert_eq!(map_resource_type("shelter"), "Shelter");
        assert_eq!(map_resource_type("legal_aid"), "Legal Aid");
        assert_eq!(map_resource_type("financial_assistance"), "Financial Assistance");
    }

    #[test]
    fn unknown_resource_type_title_cases() {
        assert_eq!(map_resource_type("peer_support"), "Peer_Support");
        assert_eq!(map_resource_type("community outreach"), "Community Outreach");
        assert_eq!(map_resource_type("SHELTER"), "Shelter");
    }
}

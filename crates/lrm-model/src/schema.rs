use serde::{Deserialize, Serialize};

use crate::mapping::{
    CULTURALLY_SPECIFIC_COLUMN, DESCRIPTION_COLUMN, FIELD_MAPPING, LANGUAGES_COLUMN,
    SERVICES_COLUMN,
};

/// Output schema for a `Legal_Resource__c` import file.
///
/// Each variant fixes a column set and ordering; transformation policy is
/// keyed off the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Full field-by-field remapping with boolean, picklist, and JSON-list
    /// handling.
    Full,
    /// The minimal set of fields the CRM requires on insert, plus run
    /// timestamps.
    Minimal,
    /// `Name` only.
    Simple,
}

impl Schema {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Minimal => "minimal",
            Self::Simple => "simple",
        }
    }

    /// Output columns in write order.
    #[must_use]
    pub fn columns(self) -> Vec<&'static str> {
        match self {
            Self::Full => {
                let mut columns: Vec<&'static str> =
                    FIELD_MAPPING.iter().map(|(_, target)| *target).collect();
                columns.extend([
                    SERVICES_COLUMN,
                    LANGUAGES_COLUMN,
                    CULTURALLY_SPECIFIC_COLUMN,
                    DESCRIPTION_COLUMN,
                ]);
                columns
            }
            Self::Minimal => vec![
                "Name",
                "Organization_Name__c",
                "Resource_Type__c",
                "City__c",
                "State__c",
                "Latitude__c",
                "Longitude__c",
                "Created_Timestamp__c",
                "Last_Modified_Timestamp__c",
            ],
            Self::Simple => vec!["Name"],
        }
    }

    /// Default output path, relative to the repository root.
    #[must_use]
    pub fn default_output(self) -> &'static str {
        match self {
            Self::Full => "salesforce/data/Legal_Resource__c.csv",
            Self::Minimal => "salesforce/data/Legal_Resource__c_required.csv",
            Self::Simple => "salesforce/data/Legal_Resource__c_simple.csv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_schema_covers_mapping_and_flattened_columns() {
        let columns = Schema::Full.columns();
        assert_eq!(columns.len(), FIELD_MAPPING.len() + 4);
        assert_eq!(columns.first(), Some(&"External_ID__c"));
        assert_eq!(columns.last(), Some(&"Description__c"));
    }

    #[test]
    fn simple_schema_is_name_only() {
        assert_eq!(Schema::Simple.columns(), vec!["Name"]);
    }
}

//! Static field mapping from the Android asset CSV to `Legal_Resource__c`.

/// Source field name → Salesforce custom field name, in output column order.
pub const FIELD_MAPPING: [(&str, &str); 30] = [
    ("id", "External_ID__c"),
    ("resourceType", "Resource_Type__c"),
    ("organizationName", "Organization_Name__c"),
    ("phone", "Phone__c"),
    ("website", "Website__c"),
    ("email", "Email__c"),
    ("address", "Address__c"),
    ("city", "City__c"),
    ("state", "State__c"),
    ("zipCode", "Zip_Code__c"),
    ("latitude", "Latitude__c"),
    ("longitude", "Longitude__c"),
    ("is24_7", "Is_24_7__c"),
    ("servesLGBTQIA", "Serves_LGBTQIA__c"),
    ("lgbtqSpecialized", "LGBTQ_Specialized__c"),
    ("transInclusive", "Trans_Inclusive__c"),
    ("nonBinaryInclusive", "Non_Binary_Inclusive__c"),
    ("servesBIPOC", "Serves_BIPOC__c"),
    ("bipocLed", "BIPOC_Led__c"),
    ("servesMaleIdentifying", "Serves_Male_Identifying__c"),
    ("servesUndocumented", "Serves_Undocumented__c"),
    ("uVisaSupport", "U_Visa_Support__c"),
    ("vawaSupport", "VAWA_Support__c"),
    ("noICEContact", "No_ICE_Contact__c"),
    ("servesDisabled", "Serves_Disabled__c"),
    ("wheelchairAccessible", "Wheelchair_Accessible__c"),
    ("servesDeaf", "Serves_Deaf__c"),
    ("aslInterpreter", "ASL_Interpreter__c"),
    ("isFree", "Is_Free__c"),
    ("slidingScale", "Sliding_Scale__c"),
];

/// Source field carrying the resource-type picklist token.
pub const RESOURCE_TYPE_FIELD: &str = "resourceType";

/// JSON-encoded list fields and their flattened destination columns.
pub const SERVICES_JSON_FIELD: &str = "servicesJson";
pub const SERVICES_COLUMN: &str = "Services__c";
pub const LANGUAGES_JSON_FIELD: &str = "languagesJson";
pub const LANGUAGES_COLUMN: &str = "Languages_Supported__c";
pub const CULTURALLY_SPECIFIC_JSON_FIELD: &str = "culturallySpecificJson";
pub const CULTURALLY_SPECIFIC_COLUMN: &str = "Culturally_Specific__c";

/// Synthesized from the services list when the source has no description.
pub const DESCRIPTION_COLUMN: &str = "Description__c";

/// Looks up the Salesforce field for a source field name.
#[must_use]
pub fn target_field(source: &str) -> Option<&'static str> {
    FIELD_MAPPING
        .iter()
        .find(|(from, _)| *from == source)
        .map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_targets_are_salesforce_custom_fields() {
        for (source, target) in FIELD_MAPPING {
            assert!(!source.is_empty());
            assert!(target.ends_with("__c"), "{target} is not a custom field");
        }
    }

    #[test]
    fn target_field_lookup() {
        assert_eq!(target_field("id"), Some("External_ID__c"));
        assert_eq!(target_field("slidingScale"), Some("Sliding_Scale__c"));
        assert_eq!(target_field("servicesJson"), None);
    }
}

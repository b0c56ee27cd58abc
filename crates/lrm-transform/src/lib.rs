//! Transformation logic for `Legal_Resource__c` import files.
//!
//! - **normalize**: value-level helpers (boolean tokens, picklist labels,
//!   JSON-list flattening)
//! - **rows**: record-level transformers, one per output schema

pub mod normalize;
pub mod rows;

pub use normalize::{flatten_json_list, is_boolean_field, map_resource_type, normalize_boolean};
pub use rows::{run_timestamp, transform_records};

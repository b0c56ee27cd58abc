pub mod error;
pub mod mapping;
pub mod record;
pub mod schema;

pub use error::{LrmError, Result};
pub use mapping::{
    CULTURALLY_SPECIFIC_COLUMN, CULTURALLY_SPECIFIC_JSON_FIELD, DESCRIPTION_COLUMN, FIELD_MAPPING,
    LANGUAGES_COLUMN, LANGUAGES_JSON_FIELD, RESOURCE_TYPE_FIELD, SERVICES_COLUMN,
    SERVICES_JSON_FIELD, target_field,
};
pub use record::Record;
pub use schema::Schema;

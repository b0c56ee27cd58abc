//! CSV ingestion: loads a header-keyed resource export into memory.

mod reader;

pub use reader::read_resource_csv;

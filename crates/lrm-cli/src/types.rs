use std::path::PathBuf;

use lrm_model::Schema;

/// Outcome of one conversion run, for the end-of-run summary.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub schema: Schema,
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_read: usize,
    pub rows_written: usize,
    pub columns: usize,
}

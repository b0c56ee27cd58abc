//! Legal resource migration CLI.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;

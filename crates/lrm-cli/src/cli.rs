//! CLI argument definitions for the migration tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default location of the mobile app's bundled asset export.
pub const DEFAULT_INPUT: &str = "app/src/main/assets/legal_resources.csv";

#[derive(Parser)]
#[command(
    name = "lrm",
    version,
    about = "Legal resource migration - convert app CSV exports to CRM import files",
    long_about = "Convert a legal resource CSV export into CSV files formatted for\n\
                  Legal_Resource__c import.\n\n\
                  Three output schemas are supported: the full field-by-field mapping,\n\
                  the minimal set of required fields, and a name-only file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the full field-by-field mapping.
    Full(ConvertArgs),

    /// Write only the fields the CRM requires on insert, with run timestamps.
    Minimal(ConvertArgs),

    /// Write a name-only file.
    Simple(ConvertArgs),

    /// List the source-to-CRM field mapping table.
    Fields,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Input CSV export.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output file (default depends on the chosen schema).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! CLI argument definitions for the sale order importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "soi",
    version,
    about = "Sale Order Importer - feed external CSV exports into the host platform",
    long_about = "Read a CSV export dropped by the external system, remap its columns\n\
                  into the sale order schema, convert dates, assign external ids, and\n\
                  build the bulk import request."
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
    /// Import one CSV export into the sale order schema.
    Import(ImportArgs),

    /// Show the active column-to-field mapping.
    Mapping,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Directory the external system drops exports into.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Name of the export file inside DIR.
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Also write the prepared request buffer to this path.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
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

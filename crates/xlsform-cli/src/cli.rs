//! CLI argument definitions for the data-dictionary generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "xlsform-dict",
    version,
    about = "Render an XLSForm workbook as a browsable HTML data dictionary",
    long_about = "Read the survey, choices, and settings sheets of an XLSForm\n\
                  workbook and write a single self-contained HTML document\n\
                  listing every question with its metadata and answer choices."
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
    /// Convert a workbook into an HTML data dictionary.
    Generate(GenerateArgs),

    /// Load and parse a workbook, then print its summary without writing output.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the XLSForm workbook.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Output HTML file path.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Skip the per-group summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the XLSForm workbook.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
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

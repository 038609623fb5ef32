//! CLI argument definitions for the flat table builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "flat-table",
    version,
    about = "Flat Table - Build grid column configuration from column metadata",
    long_about = "Build grid column definitions, render options and the row dataset\n\
                  from declarative column metadata and row records.\n\n\
                  Accepts both metadata schema variants (col_header/colheader)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Build the grid from a metadata file and an optional data file.
    Build(BuildArgs),

    /// Build the grid for the built-in planning dashboard sample.
    Demo(DemoArgs),

    /// Print the default grid configuration as TOML.
    Config,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// JSON file with the column metadata array.
    #[arg(value_name = "METADATA")]
    pub metadata: PathBuf,

    /// JSON file with the row records array.
    #[arg(long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// TOML file with label rules and layout settings.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// TOML file with label rules and layout settings.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

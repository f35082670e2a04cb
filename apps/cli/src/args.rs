//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nlpd")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Design, validate and export NLP model configurations")]
pub struct Cli {
    /// Tool configuration file (defaults to `nlpd.{toml,json,yaml}` when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, off)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every configurable field with its kind, domain and default
    Fields,
    /// Validate a selection and print its summary
    Summary {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Validate a selection, print its summary and write the configuration file
    Generate {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Directory to write the configuration into
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// File name of the written configuration
        #[arg(long, value_name = "NAME")]
        file_name: Option<String>,

        /// Pretty-print the JSON
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Write single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Re-validate an existing configuration file
    Check {
        /// Path to a previously generated configuration
        file: PathBuf,
    },
}

/// Where the raw field values come from. Assignments win over the file.
#[derive(Debug, Default, Args)]
pub struct SelectionArgs {
    /// JSON or TOML file mapping field names to values
    #[arg(short, long, value_name = "FILE")]
    pub selection: Option<PathBuf>,

    /// Set one field, e.g. `--set num_heads=16` or `--set data_sources=Books,Wikipedia`
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,
}

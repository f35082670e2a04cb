#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;
mod handlers;
mod output;

use crate::args::{Cli, Commands};
use crate::handlers::design::GenerateOptions;
use crate::handlers::{check, design, fields};
use anyhow::{Context, Result};
use clap::Parser;
use nlpd::kernel::config::load_config;
use nlpd::prelude::ToolConfig;
use nlpd_logger::LoggerBuilder;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config: ToolConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = LoggerBuilder::from_config("nlpd", &config.logging, cli.log_level.as_deref())?
        .init()
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Fields => {
            fields::list_fields();
            Ok(ExitCode::SUCCESS)
        },
        Commands::Summary { selection } => design::summarize(&selection),
        Commands::Generate { selection, output, file_name, pretty, compact } => {
            let options = GenerateOptions::resolve(&config, output, file_name, pretty, compact);
            design::generate(&selection, options)
        },
        Commands::Check { file } => check::check_artifact(&file),
    }
}

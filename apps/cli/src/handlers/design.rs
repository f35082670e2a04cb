use crate::args::SelectionArgs;
use crate::output::{TerminalSink, print_sections, print_violations};
use anyhow::{Context, Result};
use nlpd::designer::{DesignError, Layout, SelectionSnapshot, registry, render_sections, run, validate};
use nlpd::kernel::selection::{load_selection, parse_assignment};
use nlpd::prelude::ToolConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Options of `nlpd generate` after merging flags with the tool configuration.
#[derive(Debug)]
pub struct GenerateOptions {
    pub directory: PathBuf,
    pub file_name: String,
    pub layout: Layout,
}

impl GenerateOptions {
    pub fn resolve(
        config: &ToolConfig,
        output: Option<PathBuf>,
        file_name: Option<String>,
        pretty: bool,
        compact: bool,
    ) -> Self {
        let pretty = if pretty || compact { pretty } else { config.output.pretty };
        Self {
            directory: output.unwrap_or_else(|| config.output.directory.clone()),
            file_name: file_name.unwrap_or_else(|| config.output.file_name.clone()),
            layout: if pretty { Layout::Pretty } else { Layout::Compact },
        }
    }
}

/// Builds a snapshot from the selection file (if any) and then the `--set` assignments.
///
/// # Errors
/// Fails on unreadable files, malformed assignments or unknown field names.
pub fn load_snapshot(args: &SelectionArgs) -> Result<SelectionSnapshot> {
    let mut entries = match &args.selection {
        Some(path) => load_selection(path)
            .with_context(|| format!("Failed to load selection from {}", path.display()))?,
        None => Vec::new(),
    };

    for assignment in &args.assignments {
        entries.push(parse_assignment(assignment, |name| {
            registry().get(name).ok().map(|spec| spec.kind)
        })?);
    }

    debug!(entries = entries.len(), "Selection collected");

    Ok(SelectionSnapshot::from_entries(entries)?)
}

/// Validates the selection and prints the sectioned summary.
///
/// # Errors
/// Fails when the selection cannot be collected.
pub fn summarize(args: &SelectionArgs) -> Result<ExitCode> {
    match validate(&load_snapshot(args)?) {
        Ok(config) => {
            print_sections(&render_sections(&config));
            Ok(ExitCode::SUCCESS)
        },
        Err(report) => {
            print_violations(&report);
            Ok(ExitCode::FAILURE)
        },
    }
}

/// Validates the selection, prints the summary and writes the configuration file.
///
/// # Errors
/// Fails when the selection cannot be collected or the file cannot be written.
pub fn generate(args: &SelectionArgs, options: GenerateOptions) -> Result<ExitCode> {
    let snapshot = load_snapshot(args)?;
    let mut sink = TerminalSink::new(options.directory, Some(options.file_name));

    match run(&snapshot, options.layout, &mut sink) {
        Ok(_) => {
            if let Some(path) = sink.written() {
                println!("\n✅ Wrote {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        },
        Err(err) if err.downcast_ref::<DesignError>().is_some_and(|e| e.report().is_some()) => {
            Ok(ExitCode::FAILURE)
        },
        Err(err) => Err(err),
    }
}

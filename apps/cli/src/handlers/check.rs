use crate::output::{print_sections, print_violations};
use anyhow::{Context, Result};
use nlpd::designer::{deserialize, render_sections};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Re-reads a generated configuration and reports whether it still validates.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a configuration artifact at all.
pub fn check_artifact(file: &Path) -> Result<ExitCode> {
    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    match deserialize(&text) {
        Ok(config) => {
            println!("✅ {} is a valid configuration (head_dim {})", file.display(), config.head_dim());
            print_sections(&render_sections(&config));
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => match err.report() {
            Some(report) => {
                print_violations(report);
                Ok(ExitCode::FAILURE)
            },
            None => Err(err).with_context(|| format!("{} is not a configuration artifact", file.display())),
        },
    }
}

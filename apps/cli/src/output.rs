//! Terminal rendering and artifact writing.

use anyhow::{Context, Result, bail};
use nlpd::designer::{Artifact, PresentationSink, SummaryLine, ValidationReport};
use nlpd::domain::choices::Section;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

pub fn print_sections(sections: &[(Section, Vec<SummaryLine>)]) {
    for (section, lines) in sections {
        println!("\n## {section}");
        for line in lines {
            println!("  {:<22}{}", format!("{}:", line.label), line.text);
        }
    }
}

pub fn print_violations(report: &ValidationReport) {
    eprintln!("❌ Configuration rejected with {report_len} violation(s):", report_len = report.len());
    for violation in report {
        eprintln!("  - {violation}");
    }
}

/// Writes `body` next to its final location, then renames it into place.
///
/// # Errors
/// Fails when `file_name` is not a bare file name or the directory is not writable.
pub fn write_atomically(directory: &Path, file_name: &str, body: &str) -> Result<PathBuf> {
    if Path::new(file_name).file_name().and_then(|n| n.to_str()) != Some(file_name) {
        bail!("'{file_name}' is not a plain file name");
    }

    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create {}", directory.display()))?;

    let target = directory.join(file_name);
    let mut staged = NamedTempFile::new_in(directory)
        .with_context(|| format!("Failed to stage a file in {}", directory.display()))?;
    staged.write_all(body.as_bytes())?;
    staged.write_all(b"\n")?;
    staged
        .persist(&target)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    Ok(target)
}

/// Prints to the terminal and writes the artifact to disk.
#[derive(Debug)]
pub struct TerminalSink {
    directory: PathBuf,
    file_name: Option<String>,
    written: Option<PathBuf>,
}

impl TerminalSink {
    pub const fn new(directory: PathBuf, file_name: Option<String>) -> Self {
        Self { directory, file_name, written: None }
    }

    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl PresentationSink for TerminalSink {
    type Error = anyhow::Error;

    fn show_summary(&mut self, sections: &[(Section, Vec<SummaryLine>)]) -> Result<()> {
        print_sections(sections);
        Ok(())
    }

    fn offer_artifact(&mut self, artifact: &Artifact) -> Result<()> {
        let file_name = self.file_name.as_deref().unwrap_or(artifact.file_name());
        let path = write_atomically(&self.directory, file_name, artifact.body())?;
        info!(path = %path.display(), mime = artifact.mime(), "Artifact written");
        self.written = Some(path);
        Ok(())
    }

    fn show_violations(&mut self, report: &ValidationReport) -> Result<()> {
        print_violations(report);
        Ok(())
    }
}

//! # Logger
//!
//! Sets up `tracing` output for one run of an `nlpd` tool.
//!
//! Console records always go to **stderr** so that summaries and artifacts on
//! stdout stay clean. When a directory is configured, every record is also
//! appended to `<name>.log` in it, as plain text or JSON lines.
//!
//! ```rust
//! # use nlpd_logger::{LevelFilter, Logger};
//! let _logger = Logger::builder("nlpd").level(LevelFilter::DEBUG).init().unwrap();
//! tracing::debug!("ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use nlpd_domain::config::LoggingConfig;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Settings for [`Logger`]; build with [`Logger::builder`] or [`LoggerBuilder::from_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    directory: Option<PathBuf>,
    json: bool,
}

impl LoggerBuilder {
    /// Reads `[logging]` from the tool configuration; `level_override` replaces its level.
    ///
    /// # Errors
    /// [`LoggerError::InvalidLevel`] when the chosen level is not a tracing level name.
    pub fn from_config(
        name: impl Into<String>,
        config: &LoggingConfig,
        level_override: Option<&str>,
    ) -> Result<Self, LoggerError> {
        let level = parse_level(level_override.unwrap_or(&config.level))?;
        let builder = Logger::builder(name).level(level).json(config.json);

        Ok(match &config.directory {
            Some(directory) => builder.directory(directory),
            None => builder,
        })
    }

    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Also writes records to `<name>.log` inside `directory`, created if missing.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Writes file records as JSON lines. The console stays human-readable.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Installs the global subscriber. `RUST_LOG`, when set, takes precedence over the level.
    ///
    /// Keep the returned [`Logger`] alive until the run ends; dropping it flushes the file.
    ///
    /// # Errors
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] when the log file cannot be opened.
    /// * [`LoggerError::Subscriber`] when a subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let filter = EnvFilter::builder().with_default_directive(self.level.into()).from_env_lossy();
        let console = layer()
            .compact()
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .boxed();

        let (file, guard) = match &self.directory {
            Some(directory) => {
                let (file, guard) = file_layer(&self.name, directory, self.json)?;
                (Some(file), Some(guard))
            },
            None => (None, None),
        };

        tracing_subscriber::registry().with(filter).with(console).with(file).try_init()?;

        let file = self.directory.map(|d| d.join(format!("{}.{LOG_FILE_SUFFIX}", self.name)));
        Ok(Logger { file, guard })
    }
}

fn file_layer<S>(
    name: &str,
    directory: &Path,
    json: bool,
) -> Result<(Box<dyn Layer<S> + Send + Sync>, WorkerGuard), LoggerError>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    fs::create_dir_all(directory)
        .context(format!("Failed to create {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = layer().with_writer(writer).with_ansi(false);
    let layer = if json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse().map_err(|_| LoggerError::InvalidLevel {
        level: level.to_owned().into(),
        context: Some("expected trace, debug, info, warn, error or off".into()),
    })
}

/// Logging for the current run.
#[must_use = "Dropping the logger stops file output."]
#[derive(Debug)]
pub struct Logger {
    file: Option<PathBuf>,
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Console-only settings at `warn`.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder { name: name.into(), level: LevelFilter::WARN, directory: None, json: false }
    }

    /// The log file records are appended to, if any.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log file");
        }
    }
}

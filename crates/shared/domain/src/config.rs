use crate::constants::ARTIFACT_FILE_NAME;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level tool configuration, loaded from `nlpd.{toml,json,yaml}` plus `NLPD__*` overrides.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where and how the serialized configuration is written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub file_name: String,
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace` .. `error`, or `off`).
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for OutputConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from("."), file_name: ARTIFACT_FILE_NAME.to_owned(), pretty: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), directory: None, json: false }
    }
}

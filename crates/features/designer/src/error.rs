use crate::violation::ValidationReport;
use std::borrow::Cow;

/// Error types of the design pipeline.
#[nlpd_derive::nlpd_error]
pub enum DesignError {
    /// A selection referenced a field that is not in the registry.
    #[error("Unknown field '{name}'{}", format_context(.context))]
    UnknownField { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The selection failed one or more per-field or cross-field checks.
    #[error("Configuration rejected{}: {source}", format_context(.context))]
    Rejected { source: ValidationReport, context: Option<Cow<'static, str>> },

    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// A serialized artifact is structurally valid JSON but not a faithful configuration.
    #[error("Corrupt configuration artifact{}: {message}", format_context(.context))]
    CorruptArtifact { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DesignError {
    pub(crate) fn unknown_field(name: &str) -> Self {
        Self::UnknownField { name: Cow::Owned(name.to_owned()), context: None }
    }

    /// The violations behind a rejection, if this is one.
    #[must_use]
    pub const fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Rejected { source, .. } => Some(source),
            _ => None,
        }
    }
}

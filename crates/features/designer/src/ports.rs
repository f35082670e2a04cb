//! Boundaries to the host: where selections come from and where results go.

use crate::error::DesignError;
use crate::serializer::Artifact;
use crate::snapshot::SelectionSnapshot;
use crate::summary::SummaryLine;
use crate::violation::ValidationReport;
use nlpd_domain::choices::Section;
use std::fmt::Debug;

/// Supplies one raw value per registered field.
pub trait SelectionSource: Debug {
    /// Captures the current selection.
    ///
    /// # Errors
    /// Returns [`DesignError::UnknownField`] when the source names an unregistered field,
    /// or any source-specific failure mapped into [`DesignError`].
    fn snapshot(&self) -> Result<SelectionSnapshot, DesignError>;
}

impl SelectionSource for SelectionSnapshot {
    fn snapshot(&self) -> Result<SelectionSnapshot, DesignError> {
        Ok(self.clone())
    }
}

/// Receives the rendered summary, the artifact, or the reasons there is none.
///
/// Nothing flows back into the core.
pub trait PresentationSink {
    type Error;

    fn show_summary(&mut self, sections: &[(Section, Vec<SummaryLine>)]) -> Result<(), Self::Error>;

    fn offer_artifact(&mut self, artifact: &Artifact) -> Result<(), Self::Error>;

    fn show_violations(&mut self, report: &ValidationReport) -> Result<(), Self::Error>;
}

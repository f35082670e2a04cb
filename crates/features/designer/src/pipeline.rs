use crate::configuration::Configuration;
use crate::error::DesignError;
use crate::ports::{PresentationSink, SelectionSource};
use crate::serializer::{Artifact, Layout};
use crate::summary::{SummaryLine, render_sections};
use crate::validator::validate;
use nlpd_domain::choices::Section;
use tracing::{info, instrument};

/// Everything a presentation sink needs for one accepted selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub configuration: Configuration,
    pub summary: Vec<(Section, Vec<SummaryLine>)>,
    pub artifact: Artifact,
}

/// Runs selection → validation → build → serialization for one request.
///
/// # Errors
/// - [`DesignError::UnknownField`] from the source.
/// - [`DesignError::Rejected`] carrying every violation when the selection is illegal.
/// - [`DesignError::Serialization`] if the artifact cannot be produced.
#[instrument(level = "info", skip_all)]
pub fn design(source: &impl SelectionSource, layout: Layout) -> Result<Design, DesignError> {
    let snapshot = source.snapshot()?;
    let configuration = validate(&snapshot)?;
    let artifact = Artifact::new(&configuration, layout)?;
    let summary = render_sections(&configuration);

    info!(
        task = %configuration.task(),
        head_dim = configuration.head_dim(),
        bytes = artifact.body().len(),
        "Configuration built"
    );

    Ok(Design { configuration, summary, artifact })
}

/// Runs [`design`] and hands the outcome to `sink`.
///
/// A rejected selection is shown through [`PresentationSink::show_violations`] and is
/// still returned as an error so the host can choose its exit status.
///
/// # Errors
/// Sink failures, or the [`design`] failure converted into the sink's error type.
pub fn run<S>(source: &impl SelectionSource, layout: Layout, sink: &mut S) -> Result<Design, S::Error>
where
    S: PresentationSink,
    S::Error: From<DesignError>,
{
    match design(source, layout) {
        Ok(design) => {
            sink.show_summary(&design.summary)?;
            sink.offer_artifact(&design.artifact)?;
            Ok(design)
        },
        Err(err) => {
            if let Some(report) = err.report() {
                sink.show_violations(report)?;
            }
            Err(err.into())
        },
    }
}

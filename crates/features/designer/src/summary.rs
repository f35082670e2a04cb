//! # Summary Renderer
//!
//! Human-readable `(label, text)` pairs for a validated configuration, one per
//! registered field in registry order.

use crate::configuration::Configuration;
use crate::registry::registry;
use nlpd_domain::choices::Section;
use nlpd_domain::constants::{CONTEXT_LENGTH, QUANTIZATION, SCALE};
use nlpd_domain::field::FieldSpec;
use nlpd_domain::value::FieldValue;

/// One rendered line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub text: String,
}

/// Renders every registered field of `config`.
#[must_use]
pub fn render(config: &Configuration) -> Vec<SummaryLine> {
    registry().all().iter().map(|spec| line(config, spec)).collect()
}

/// Same lines as [`render`], grouped under their section headings.
#[must_use]
pub fn render_sections(config: &Configuration) -> Vec<(Section, Vec<SummaryLine>)> {
    registry()
        .sections()
        .map(|(section, specs)| (section, specs.into_iter().map(|spec| line(config, spec)).collect()))
        .collect()
}

fn line(config: &Configuration, spec: &FieldSpec) -> SummaryLine {
    let text = match spec.name {
        SCALE => format!("{:.1} billion parameters", config.scale()),
        CONTEXT_LENGTH => format!("{} tokens", config.context_length()),
        QUANTIZATION => String::from(if config.quantization() { "Enabled" } else { "Disabled" }),
        name => config.value(name).map(plain_text).unwrap_or_default(),
    };
    SummaryLine { label: spec.label, text }
}

fn plain_text(value: FieldValue) -> String {
    match value {
        FieldValue::Enum(label) => label,
        FieldValue::MultiEnum(labels) => labels.join(", "),
        other => other.to_string(),
    }
}

//! # Validator
//!
//! Decides whether a [`SelectionSnapshot`] describes a legal model design.
//!
//! Validation runs in two passes and never stops at the first problem:
//! 1. **Per-field**: every field is checked against its registry kind and domain
//!    (choice membership, numeric range and step, non-empty required multi-selects).
//! 2. **Cross-field**: architectural constraints spanning several fields. Rules see
//!    every value of the right kind, in range or not, and are skipped only when they
//!    cannot be computed (a value of the wrong kind, or zero heads).
//!
//! Zero violations yields a [`Configuration`]; anything else yields the whole
//! [`ValidationReport`].

use crate::builder::{self, CheckedSelection};
use crate::configuration::Configuration;
use crate::registry::registry;
use crate::snapshot::SelectionSnapshot;
use crate::violation::{CrossFieldRule, ValidationReport, ValidationViolation};
use nlpd_domain::choices::{Hardware, InferenceFramework, ServingFramework};
use nlpd_domain::constants::{
    CONTEXT_LENGTH, DATA_SOURCES, HARDWARE, HIDDEN_UNITS, INFERENCE_FRAMEWORK, MODEL_ARCHITECTURE,
    NUM_HEADS, NUM_LAYERS, OPTIMIZER, PREPROCESSING_STEPS, QUANTIZATION, SCALE, SCHEDULER,
    SERVING_FRAMEWORK, TASK,
};
use nlpd_domain::field::{FieldDomain, FieldKind, FieldSpec, FloatRange, IntRange};
use nlpd_domain::sets::LabelledSet;
use nlpd_domain::value::FieldValue;
use std::num::NonZeroU32;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Allowed drift, in units of `step`, when matching floats to their step grid.
const FLOAT_TOLERANCE: f64 = 1e-6;

/// Scale (in billions) from which the long context window is allowed.
pub const LARGE_MODEL_SCALE: f64 = 1.0;
pub const LARGE_MODEL_CONTEXT_CEILING: u32 = 8192;
pub const SMALL_MODEL_CONTEXT_CEILING: u32 = 2048;

/// Validates a snapshot and, when it is clean, builds the canonical configuration.
///
/// # Errors
/// Returns a [`ValidationReport`] listing every per-field and cross-field violation.
#[instrument(level = "debug", skip_all)]
pub fn validate(snapshot: &SelectionSnapshot) -> Result<Configuration, ValidationReport> {
    let mut pass = FieldPass::run(snapshot);
    let checked = pass.checked_selection();
    let view = CrossFieldView::new(&pass.effective);
    let mut report = pass.report;
    check_cross_field(&view, &mut report);

    match checked {
        Some(checked) if report.is_empty() => {
            let config = builder::build(checked);
            debug!(head_dim = config.head_dim(), "Selection accepted");
            Ok(config)
        },
        _ => {
            debug!(violations = report.len(), "Selection rejected");
            Err(report)
        },
    }
}

/// The maximum context length for a model of `scale` billion parameters.
#[must_use]
pub fn context_ceiling(scale: f64) -> u32 {
    if scale >= LARGE_MODEL_SCALE { LARGE_MODEL_CONTEXT_CEILING } else { SMALL_MODEL_CONTEXT_CEILING }
}

// --- Per-field checks ---

/// Checks one raw value against its spec, returning the normalised value.
fn check_field(spec: &FieldSpec, raw: &FieldValue) -> Result<FieldValue, String> {
    match (spec.kind, spec.domain, raw) {
        (FieldKind::Enum, FieldDomain::Choices(choices), FieldValue::Enum(value)) => {
            check_choice(choices, value)
        },
        (FieldKind::MultiEnum, FieldDomain::Choices(choices), FieldValue::MultiEnum(values)) => {
            check_multi_choice(choices, values, spec.required)
        },
        (FieldKind::Int, FieldDomain::Int(range), FieldValue::Int(value)) => {
            check_int(range, *value)
        },
        (FieldKind::Float, FieldDomain::Float(range), FieldValue::Float(value)) => {
            check_float(range, *value)
        },
        (FieldKind::Float, FieldDomain::Float(range), FieldValue::Int(value)) => {
            check_float(range, *value as f64)
        },
        (FieldKind::Bool, FieldDomain::Flag, FieldValue::Bool(value)) => Ok(FieldValue::Bool(*value)),
        _ => Err(format!("expected a {} value, got {} {raw}", spec.kind, raw.shape())),
    }
}

fn check_choice(choices: &[&str], value: &str) -> Result<FieldValue, String> {
    if choices.contains(&value) {
        Ok(FieldValue::from(value))
    } else {
        Err(format!("'{value}' is not one of: {}", choices.join(", ")))
    }
}

/// Deduplicates and reorders the selection into domain order.
fn check_multi_choice(choices: &[&str], values: &[String], required: bool) -> Result<FieldValue, String> {
    let unknown: Vec<&str> =
        values.iter().map(String::as_str).filter(|v| !choices.contains(v)).collect();
    if !unknown.is_empty() {
        return Err(format!(
            "unknown option(s) '{}'; allowed: {}",
            unknown.join("', '"),
            choices.join(", ")
        ));
    }

    if required && values.is_empty() {
        return Err("at least one option must be selected".to_owned());
    }

    Ok(FieldValue::multi(choices.iter().filter(|c| values.iter().any(|v| v == *c)).copied()))
}

fn check_int(range: IntRange, value: i64) -> Result<FieldValue, String> {
    if value < range.min || value > range.max {
        return Err(format!("{value} is outside [{}, {}]", range.min, range.max));
    }
    if range.step > 1 && (value - range.min) % range.step != 0 {
        return Err(format!("{value} is not a multiple of {} from {}", range.step, range.min));
    }
    Ok(FieldValue::Int(value))
}

/// Snaps the value onto the step grid and rounds it to the range precision.
fn check_float(range: FloatRange, value: f64) -> Result<FieldValue, String> {
    if !value.is_finite() {
        return Err(format!("{value} is not a finite number"));
    }

    let slack = range.step * FLOAT_TOLERANCE;
    if value < range.min - slack || value > range.max + slack {
        return Err(format!("{value} is outside [{}, {}]", range.min, range.max));
    }

    let steps = (value - range.min) / range.step;
    let nearest = steps.round();
    if (steps - nearest).abs() > FLOAT_TOLERANCE {
        return Err(format!("{value} is not a multiple of {} from {}", range.step, range.min));
    }

    let factor = 10_f64.powi(range.decimals);
    let snapped = (range.step.mul_add(nearest, range.min) * factor).round() / factor;
    Ok(FieldValue::Float(snapped.clamp(range.min, range.max)))
}

// --- Cross-field checks ---

fn check_cross_field(view: &CrossFieldView, report: &mut ValidationReport) {
    if let (Some(hidden), Some(heads)) = (view.hidden_units, view.num_heads)
        && hidden % heads.get() != 0
    {
        report.push(ValidationViolation::cross_field(
            CrossFieldRule::HeadDivisibility,
            format!(
                "hidden_units ({hidden}) must be divisible by num_heads ({heads}) \
                 so that every attention head gets an integer dimension"
            ),
        ));
    }

    if let (Some(context), Some(scale)) = (view.context_length, view.scale) {
        let ceiling = context_ceiling(scale);
        if context > ceiling {
            report.push(ValidationViolation::cross_field(
                CrossFieldRule::ContextCeiling,
                format!(
                    "context_length ({context}) exceeds the {ceiling}-token ceiling for a \
                     {scale:.1}B parameter model (models below {LARGE_MODEL_SCALE:.1}B are \
                     limited to {SMALL_MODEL_CONTEXT_CEILING})"
                ),
            ));
        }
    }

    if let (Some(true), Some(framework)) = (view.quantization, view.inference_framework)
        && !framework.supports_quantization()
    {
        report.push(ValidationViolation::cross_field(
            CrossFieldRule::QuantizationSupport,
            format!(
                "quantization requires an inference framework with a quantized execution path \
                 ({}, {}); {framework} has none",
                InferenceFramework::TensorRt,
                InferenceFramework::Vllm
            ),
        ));
    }

    if let (Some(serving), Some(hardware)) = (view.serving_framework, view.hardware)
        && serving.requires_gpu()
        && !hardware.is_gpu()
    {
        report.push(ValidationViolation::cross_field(
            CrossFieldRule::ServingHardware,
            format!("{serving} requires GPU hardware; {hardware} is not supported"),
        ));
    }
}

/// Values the cross-field rules are computed from.
#[derive(Debug, Default)]
struct CrossFieldView {
    scale: Option<f64>,
    num_heads: Option<NonZeroU32>,
    hidden_units: Option<u32>,
    context_length: Option<u32>,
    hardware: Option<Hardware>,
    quantization: Option<bool>,
    inference_framework: Option<InferenceFramework>,
    serving_framework: Option<ServingFramework>,
}

impl CrossFieldView {
    fn new(values: &[FieldValue]) -> Self {
        let lookup = |name: &str| registry().position(name).and_then(|i| values.get(i));

        Self {
            scale: lookup(SCALE).and_then(float),
            num_heads: lookup(NUM_HEADS).and_then(heads),
            hidden_units: lookup(HIDDEN_UNITS).and_then(uint),
            context_length: lookup(CONTEXT_LENGTH).and_then(uint),
            hardware: lookup(HARDWARE).and_then(choice),
            quantization: lookup(QUANTIZATION).and_then(flag),
            inference_framework: lookup(INFERENCE_FRAMEWORK).and_then(choice),
            serving_framework: lookup(SERVING_FRAMEWORK).and_then(choice),
        }
    }
}

/// Outcome of the per-field pass, one slot per registered field.
struct FieldPass {
    /// Normalised value of every field that passed.
    accepted: Vec<Option<FieldValue>>,
    /// What the cross-field rules see: the normalised value, or the raw one on failure.
    effective: Vec<FieldValue>,
    report: ValidationReport,
}

impl FieldPass {
    fn run(snapshot: &SelectionSnapshot) -> Self {
        let mut pass = Self {
            accepted: Vec::with_capacity(registry().len()),
            effective: Vec::with_capacity(registry().len()),
            report: ValidationReport::default(),
        };

        for (spec, raw) in snapshot.iter() {
            match check_field(spec, raw) {
                Ok(value) => {
                    pass.effective.push(value.clone());
                    pass.accepted.push(Some(value));
                },
                Err(message) => {
                    pass.report.push(ValidationViolation::out_of_domain(spec.name, message));
                    pass.effective.push(raw.clone());
                    pass.accepted.push(None);
                },
            }
        }

        pass
    }

    /// Every field is taken before any `?`, so a `None` always leaves a violation behind.
    fn checked_selection(&mut self) -> Option<CheckedSelection> {
        let task = self.take(TASK, choice);
        let model_architecture = self.take(MODEL_ARCHITECTURE, choice);
        let scale = self.take(SCALE, float);
        let data_sources = self.take(DATA_SOURCES, set);
        let preprocessing_steps = self.take(PREPROCESSING_STEPS, set);
        let num_layers = self.take(NUM_LAYERS, uint);
        let num_heads = self.take(NUM_HEADS, heads);
        let hidden_units = self.take(HIDDEN_UNITS, uint);
        let context_length = self.take(CONTEXT_LENGTH, uint);
        let hardware = self.take(HARDWARE, choice);
        let optimizer = self.take(OPTIMIZER, choice);
        let scheduler = self.take(SCHEDULER, choice);
        let quantization = self.take(QUANTIZATION, flag);
        let inference_framework = self.take(INFERENCE_FRAMEWORK, choice);
        let serving_framework = self.take(SERVING_FRAMEWORK, choice);

        Some(CheckedSelection {
            task: task?,
            model_architecture: model_architecture?,
            scale: scale?,
            data_sources: data_sources?,
            preprocessing_steps: preprocessing_steps?,
            num_layers: num_layers?,
            num_heads: num_heads?,
            hidden_units: hidden_units?,
            context_length: context_length?,
            hardware: hardware?,
            optimizer: optimizer?,
            scheduler: scheduler?,
            quantization: quantization?,
            inference_framework: inference_framework?,
            serving_framework: serving_framework?,
        })
    }

    fn take<T>(&mut self, name: &'static str, extract: fn(&FieldValue) -> Option<T>) -> Option<T> {
        let slot = registry().position(name).and_then(|i| self.accepted.get(i));
        let message = match slot {
            // Already reported by the per-field check.
            Some(None) => return None,
            Some(Some(value)) => match extract(value) {
                Some(typed) => return Some(typed),
                None => format!("{value} cannot be read as {name}"),
            },
            None => "field is not registered".to_owned(),
        };

        self.report.push(ValidationViolation::out_of_domain(name, message));
        None
    }
}

fn choice<T: FromStr>(value: &FieldValue) -> Option<T> {
    match value {
        FieldValue::Enum(label) => label.parse().ok(),
        _ => None,
    }
}

fn set<T: LabelledSet>(value: &FieldValue) -> Option<T> {
    match value {
        FieldValue::MultiEnum(labels) => T::try_from_labels(labels.iter().map(String::as_str)).ok(),
        _ => None,
    }
}

fn uint(value: &FieldValue) -> Option<u32> {
    match value {
        FieldValue::Int(v) => u32::try_from(*v).ok(),
        _ => None,
    }
}

fn heads(value: &FieldValue) -> Option<NonZeroU32> {
    uint(value).and_then(NonZeroU32::new)
}

fn float(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Float(v) => Some(*v),
        FieldValue::Int(v) => Some(*v as f64),
        _ => None,
    }
}

fn flag(value: &FieldValue) -> Option<bool> {
    match value {
        FieldValue::Bool(v) => Some(*v),
        _ => None,
    }
}

//! Validation findings.

use nlpd_domain::constants::{
    CONTEXT_LENGTH, CROSS_FIELD, HARDWARE, HIDDEN_UNITS, INFERENCE_FRAMEWORK, NUM_HEADS,
    QUANTIZATION, SCALE, SERVING_FRAMEWORK,
};
use std::fmt;

/// The architectural constraints that span more than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossFieldRule {
    /// `hidden_units` must split evenly across `num_heads`.
    HeadDivisibility,
    /// Sub-billion models are capped at a shorter context window.
    ContextCeiling,
    /// Quantized weights need an inference framework with a quantized path.
    QuantizationSupport,
    /// Ray Serve deployments are GPU only.
    ServingHardware,
}

impl CrossFieldRule {
    pub const ALL: [Self; 4] =
        [Self::HeadDivisibility, Self::ContextCeiling, Self::QuantizationSupport, Self::ServingHardware];

    /// Fields participating in the rule.
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::HeadDivisibility => &[HIDDEN_UNITS, NUM_HEADS],
            Self::ContextCeiling => &[CONTEXT_LENGTH, SCALE],
            Self::QuantizationSupport => &[QUANTIZATION, INFERENCE_FRAMEWORK],
            Self::ServingHardware => &[SERVING_FRAMEWORK, HARDWARE],
        }
    }
}

impl fmt::Display for CrossFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields().join("/"))
    }
}

/// What kind of check a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A single field's value is outside its declared domain.
    OutOfDomain,
    CrossFieldConstraintViolation(CrossFieldRule),
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolation {
    field: &'static str,
    kind: ViolationKind,
    message: String,
}

impl ValidationViolation {
    pub(crate) fn out_of_domain(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, kind: ViolationKind::OutOfDomain, message: message.into() }
    }

    pub(crate) fn cross_field(rule: CrossFieldRule, message: impl Into<String>) -> Self {
        Self {
            field: CROSS_FIELD,
            kind: ViolationKind::CrossFieldConstraintViolation(rule),
            message: message.into(),
        }
    }

    /// The offending field name, or `"cross-field"`.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn rule(&self) -> Option<CrossFieldRule> {
        match self.kind {
            ViolationKind::CrossFieldConstraintViolation(rule) => Some(rule),
            ViolationKind::OutOfDomain => None,
        }
    }

    /// Whether the violation concerns `name`, directly or as a rule participant.
    #[must_use]
    pub fn references(&self, name: &str) -> bool {
        self.field == name || self.rule().is_some_and(|rule| rule.fields().contains(&name))
    }
}

impl fmt::Display for ValidationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::OutOfDomain => write!(f, "{}: {}", self.field, self.message),
            ViolationKind::CrossFieldConstraintViolation(rule) => {
                write!(f, "{} ({rule}): {}", self.field, self.message)
            },
        }
    }
}

/// Every violation found in one validation run, in field order then rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<ValidationViolation>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, violation: ValidationViolation) {
        self.violations.push(violation);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationViolation> {
        self.violations.iter()
    }

    pub fn cross_field(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations.iter().filter(|v| v.rule().is_some())
    }

    /// Violations mentioning `name`, including cross-field rules it takes part in.
    pub fn for_field<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ValidationViolation> {
        self.violations.iter().filter(move |v| v.references(name))
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationViolation> {
        self.violations
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationViolation;
    type IntoIter = std::slice::Iter<'a, ValidationViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        write!(f, "{count} violation{}", if count == 1 { "" } else { "s" })?;
        for violation in &self.violations {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

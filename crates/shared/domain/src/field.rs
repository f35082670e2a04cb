//! Declared shape of a configurable field.

use crate::choices::Section;
use crate::value::FieldValue;
use std::fmt;

/// The kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Enum,
    Int,
    Float,
    Bool,
    MultiEnum,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Enum => "enum",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::MultiEnum => "multi-enum",
        })
    }
}

/// Inclusive integer range with a step measured from `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

/// Inclusive float range with a step measured from `min`.
///
/// `decimals` is the precision implied by `step`; validated values are rounded to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub decimals: i32,
}

/// The legal values of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDomain {
    /// Allowed labels for `enum` and `multi-enum` fields, in display order.
    Choices(&'static [&'static str]),
    Int(IntRange),
    Float(FloatRange),
    Flag,
}

impl fmt::Display for FieldDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choices(choices) => write!(f, "{{{}}}", choices.join(", ")),
            Self::Int(r) => write!(f, "[{}, {}] step {}", r.min, r.max, r.step),
            Self::Float(r) => {
                let p = usize::try_from(r.decimals).unwrap_or_default();
                write!(f, "[{:.p$}, {:.p$}] step {:.p$}", r.min, r.max, r.step)
            },
            Self::Flag => f.write_str("{true, false}"),
        }
    }
}

/// One configurable parameter: identity, display metadata, kind, domain and default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: FieldKind,
    pub domain: FieldDomain,
    pub default: FieldValue,
    /// Multi-enum only: at least one option must be selected.
    pub required: bool,
}

impl FieldSpec {
    /// Single-select field; the default is the first choice.
    #[must_use]
    pub fn choice(
        name: &'static str,
        label: &'static str,
        section: Section,
        choices: &'static [&'static str],
    ) -> Self {
        let default = FieldValue::from(choices.first().copied().unwrap_or_default());
        Self {
            name,
            label,
            section,
            kind: FieldKind::Enum,
            domain: FieldDomain::Choices(choices),
            default,
            required: false,
        }
    }

    /// Multi-select field with an empty default.
    #[must_use]
    pub const fn multi_choice(
        name: &'static str,
        label: &'static str,
        section: Section,
        choices: &'static [&'static str],
        required: bool,
    ) -> Self {
        Self {
            name,
            label,
            section,
            kind: FieldKind::MultiEnum,
            domain: FieldDomain::Choices(choices),
            default: FieldValue::MultiEnum(Vec::new()),
            required,
        }
    }

    #[must_use]
    pub const fn int(
        name: &'static str,
        label: &'static str,
        section: Section,
        range: IntRange,
        default: i64,
    ) -> Self {
        Self {
            name,
            label,
            section,
            kind: FieldKind::Int,
            domain: FieldDomain::Int(range),
            default: FieldValue::Int(default),
            required: false,
        }
    }

    #[must_use]
    pub const fn float(
        name: &'static str,
        label: &'static str,
        section: Section,
        range: FloatRange,
        default: f64,
    ) -> Self {
        Self {
            name,
            label,
            section,
            kind: FieldKind::Float,
            domain: FieldDomain::Float(range),
            default: FieldValue::Float(default),
            required: false,
        }
    }

    #[must_use]
    pub const fn flag(name: &'static str, label: &'static str, section: Section, default: bool) -> Self {
        Self {
            name,
            label,
            section,
            kind: FieldKind::Bool,
            domain: FieldDomain::Flag,
            default: FieldValue::Bool(default),
            required: false,
        }
    }
}

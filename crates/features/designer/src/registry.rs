//! # Field Registry
//!
//! The fixed, ordered catalogue of configurable fields. It is built once on first use
//! and shared read-only for the rest of the process, so concurrent callers never
//! contend on it.
//!
//! Definition order is significant: it drives snapshot layout, serialization key order
//! and summary order.

use crate::error::DesignError;
use fxhash::FxHashMap;
use nlpd_domain::choices::{
    Hardware, InferenceFramework, ModelArchitecture, Optimizer, Scheduler, Section,
    ServingFramework, Task,
};
use nlpd_domain::constants::{
    CONTEXT_LENGTH, DATA_SOURCES, HARDWARE, HIDDEN_UNITS, INFERENCE_FRAMEWORK, MODEL_ARCHITECTURE,
    NUM_HEADS, NUM_LAYERS, OPTIMIZER, PREPROCESSING_STEPS, QUANTIZATION, SCALE, SCHEDULER,
    SERVING_FRAMEWORK, TASK,
};
use nlpd_domain::field::{FieldSpec, FloatRange, IntRange};
use nlpd_domain::sets::{DataSources, LabelledSet, PreprocessingSteps};
use std::sync::LazyLock;
use strum::{IntoEnumIterator, VariantNames};

static REGISTRY: LazyLock<FieldRegistry> = LazyLock::new(FieldRegistry::standard);

/// Multi-enum domains, materialised once so they can be handed out as `&'static`.
static DATA_SOURCE_LABELS: LazyLock<Vec<&'static str>> = LazyLock::new(DataSources::domain);
static PREPROCESSING_LABELS: LazyLock<Vec<&'static str>> =
    LazyLock::new(PreprocessingSteps::domain);

/// Returns the process-wide registry.
#[must_use]
pub fn registry() -> &'static FieldRegistry {
    &REGISTRY
}

/// Ordered mapping from field name to [`FieldSpec`].
#[derive(Debug)]
pub struct FieldRegistry {
    fields: Vec<FieldSpec>,
    index: FxHashMap<&'static str, usize>,
}

impl FieldRegistry {
    fn standard() -> Self {
        use Section::{Architecture, Data, Deployment, Objective, Training};

        let fields = vec![
            FieldSpec::choice(TASK, "Task", Objective, Task::VARIANTS),
            FieldSpec::choice(
                MODEL_ARCHITECTURE,
                "Model Architecture",
                Objective,
                ModelArchitecture::VARIANTS,
            ),
            FieldSpec::float(
                SCALE,
                "Scale",
                Objective,
                FloatRange { min: 0.1, max: 100.0, step: 0.1, decimals: 1 },
                1.0,
            ),
            FieldSpec::multi_choice(
                DATA_SOURCES,
                "Data Sources",
                Data,
                DATA_SOURCE_LABELS.as_slice(),
                true,
            ),
            FieldSpec::multi_choice(
                PREPROCESSING_STEPS,
                "Preprocessing Steps",
                Data,
                PREPROCESSING_LABELS.as_slice(),
                true,
            ),
            FieldSpec::int(
                NUM_LAYERS,
                "Model Layers",
                Architecture,
                IntRange { min: 1, max: 100, step: 1 },
                12,
            ),
            FieldSpec::int(NUM_HEADS, "Heads", Architecture, IntRange { min: 1, max: 32, step: 1 }, 8),
            FieldSpec::int(
                HIDDEN_UNITS,
                "Hidden Units",
                Architecture,
                IntRange { min: 128, max: 8192, step: 1 },
                768,
            ),
            FieldSpec::int(
                CONTEXT_LENGTH,
                "Context Length",
                Architecture,
                IntRange { min: 512, max: 8192, step: 1 },
                2048,
            ),
            FieldSpec::choice(HARDWARE, "Hardware", Training, Hardware::VARIANTS),
            FieldSpec::choice(OPTIMIZER, "Optimizer", Training, Optimizer::VARIANTS),
            FieldSpec::choice(SCHEDULER, "Scheduler", Training, Scheduler::VARIANTS),
            FieldSpec::flag(QUANTIZATION, "Quantization", Deployment, false),
            FieldSpec::choice(
                INFERENCE_FRAMEWORK,
                "Inference Framework",
                Deployment,
                InferenceFramework::VARIANTS,
            ),
            FieldSpec::choice(
                SERVING_FRAMEWORK,
                "Serving Framework",
                Deployment,
                ServingFramework::VARIANTS,
            ),
        ];

        let index = fields.iter().enumerate().map(|(i, spec)| (spec.name, i)).collect();

        Self { fields, index }
    }

    /// Looks up a field by name.
    ///
    /// # Errors
    /// Returns [`DesignError::UnknownField`] when `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&FieldSpec, DesignError> {
        self.position(name).map(|i| &self.fields[i]).ok_or_else(|| DesignError::unknown_field(name))
    }

    /// All fields in definition order.
    #[must_use]
    pub fn all(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Definition index of `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Fields grouped by display section, sections and fields both in definition order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, Vec<&FieldSpec>)> + '_ {
        Section::iter().map(|section| {
            (section, self.fields.iter().filter(|spec| spec.section == section).collect())
        })
    }
}

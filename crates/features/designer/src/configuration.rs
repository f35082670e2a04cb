use crate::snapshot::SelectionSnapshot;
use nlpd_domain::choices::{
    Hardware, InferenceFramework, ModelArchitecture, Optimizer, Scheduler, ServingFramework, Task,
};
use nlpd_domain::constants::{
    CONTEXT_LENGTH, DATA_SOURCES, HARDWARE, HEAD_DIM, HIDDEN_UNITS, INFERENCE_FRAMEWORK,
    MODEL_ARCHITECTURE, NUM_HEADS, NUM_LAYERS, OPTIMIZER, PARAMETER_ESTIMATE, PREPROCESSING_STEPS,
    QUANTIZATION, SCALE, SCHEDULER, SERVING_FRAMEWORK, TASK,
};
use nlpd_domain::sets::{DataSources, LabelledSet, PreprocessingSteps};
use nlpd_domain::value::FieldValue;

/// A validated, canonical model design.
///
/// Instances only come out of [`crate::validator::validate`] (directly or through
/// [`crate::serializer::deserialize`]); there is no way to construct or mutate one
/// that skipped validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub(crate) task: Task,
    pub(crate) model_architecture: ModelArchitecture,
    pub(crate) scale: f64,
    pub(crate) data_sources: DataSources,
    pub(crate) preprocessing_steps: PreprocessingSteps,
    pub(crate) num_layers: u32,
    pub(crate) num_heads: u32,
    pub(crate) hidden_units: u32,
    pub(crate) context_length: u32,
    pub(crate) hardware: Hardware,
    pub(crate) optimizer: Optimizer,
    pub(crate) scheduler: Scheduler,
    pub(crate) quantization: bool,
    pub(crate) inference_framework: InferenceFramework,
    pub(crate) serving_framework: ServingFramework,
    pub(crate) head_dim: u32,
    pub(crate) parameter_estimate: u64,
}

impl Configuration {
    #[must_use]
    pub const fn task(&self) -> Task {
        self.task
    }

    #[must_use]
    pub const fn model_architecture(&self) -> ModelArchitecture {
        self.model_architecture
    }

    /// Parameter count in billions, as selected.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub const fn data_sources(&self) -> DataSources {
        self.data_sources
    }

    #[must_use]
    pub const fn preprocessing_steps(&self) -> PreprocessingSteps {
        self.preprocessing_steps
    }

    #[must_use]
    pub const fn num_layers(&self) -> u32 {
        self.num_layers
    }

    #[must_use]
    pub const fn num_heads(&self) -> u32 {
        self.num_heads
    }

    #[must_use]
    pub const fn hidden_units(&self) -> u32 {
        self.hidden_units
    }

    #[must_use]
    pub const fn context_length(&self) -> u32 {
        self.context_length
    }

    #[must_use]
    pub const fn hardware(&self) -> Hardware {
        self.hardware
    }

    #[must_use]
    pub const fn optimizer(&self) -> Optimizer {
        self.optimizer
    }

    #[must_use]
    pub const fn scheduler(&self) -> Scheduler {
        self.scheduler
    }

    #[must_use]
    pub const fn quantization(&self) -> bool {
        self.quantization
    }

    #[must_use]
    pub const fn inference_framework(&self) -> InferenceFramework {
        self.inference_framework
    }

    #[must_use]
    pub const fn serving_framework(&self) -> ServingFramework {
        self.serving_framework
    }

    /// `hidden_units / num_heads`.
    #[must_use]
    pub const fn head_dim(&self) -> u32 {
        self.head_dim
    }

    /// Informational parameter count derived from `scale`.
    #[must_use]
    pub const fn parameter_estimate(&self) -> u64 {
        self.parameter_estimate
    }

    /// The canonical value of a registered field (derived fields included).
    #[must_use]
    pub fn value(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            TASK => self.task.label().into(),
            MODEL_ARCHITECTURE => self.model_architecture.label().into(),
            SCALE => self.scale.into(),
            DATA_SOURCES => self.data_sources.labels().into(),
            PREPROCESSING_STEPS => self.preprocessing_steps.labels().into(),
            NUM_LAYERS => self.num_layers.into(),
            NUM_HEADS => self.num_heads.into(),
            HIDDEN_UNITS => self.hidden_units.into(),
            CONTEXT_LENGTH => self.context_length.into(),
            HARDWARE => self.hardware.label().into(),
            OPTIMIZER => self.optimizer.label().into(),
            SCHEDULER => self.scheduler.label().into(),
            QUANTIZATION => self.quantization.into(),
            INFERENCE_FRAMEWORK => self.inference_framework.label().into(),
            SERVING_FRAMEWORK => self.serving_framework.label().into(),
            HEAD_DIM => self.head_dim.into(),
            PARAMETER_ESTIMATE => FieldValue::Int(i64::try_from(self.parameter_estimate).ok()?),
            _ => return None,
        };
        Some(value)
    }

    /// The selection this configuration was built from, in canonical form.
    ///
    /// Re-validating the result yields an equal configuration.
    #[must_use]
    pub fn to_snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot::from_fn(|spec| {
            self.value(spec.name).unwrap_or_else(|| spec.default.clone())
        })
    }
}

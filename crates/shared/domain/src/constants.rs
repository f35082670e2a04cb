//! Field identifiers and artifact defaults.

pub const TASK: &str = "task";
pub const MODEL_ARCHITECTURE: &str = "model_architecture";
pub const SCALE: &str = "scale";
pub const DATA_SOURCES: &str = "data_sources";
pub const PREPROCESSING_STEPS: &str = "preprocessing_steps";
pub const NUM_LAYERS: &str = "num_layers";
pub const NUM_HEADS: &str = "num_heads";
pub const HIDDEN_UNITS: &str = "hidden_units";
pub const CONTEXT_LENGTH: &str = "context_length";
pub const HARDWARE: &str = "hardware";
pub const OPTIMIZER: &str = "optimizer";
pub const SCHEDULER: &str = "scheduler";
pub const QUANTIZATION: &str = "quantization";
pub const INFERENCE_FRAMEWORK: &str = "inference_framework";
pub const SERVING_FRAMEWORK: &str = "serving_framework";

/// Derived attributes, appended after the registered fields.
pub const HEAD_DIM: &str = "head_dim";
pub const PARAMETER_ESTIMATE: &str = "parameter_estimate";

/// Pseudo field name used by violations that span several fields.
pub const CROSS_FIELD: &str = "cross-field";

pub const ARTIFACT_FILE_NAME: &str = "model_config.json";
pub const ARTIFACT_MIME: &str = "application/json";

/// Parameters per unit of `scale` (the scale slider is expressed in billions).
pub const PARAMETERS_PER_SCALE_UNIT: f64 = 1_000_000_000.0;

//! Turns an accepted selection into a [`Configuration`].

use crate::configuration::Configuration;
use nlpd_domain::choices::{
    Hardware, InferenceFramework, ModelArchitecture, Optimizer, Scheduler, ServingFramework, Task,
};
use nlpd_domain::constants::PARAMETERS_PER_SCALE_UNIT;
use nlpd_domain::sets::{DataSources, PreprocessingSteps};
use std::num::NonZeroU32;

/// Fully typed selection that passed every per-field and cross-field check.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CheckedSelection {
    pub(crate) task: Task,
    pub(crate) model_architecture: ModelArchitecture,
    pub(crate) scale: f64,
    pub(crate) data_sources: DataSources,
    pub(crate) preprocessing_steps: PreprocessingSteps,
    pub(crate) num_layers: u32,
    pub(crate) num_heads: NonZeroU32,
    pub(crate) hidden_units: u32,
    pub(crate) context_length: u32,
    pub(crate) hardware: Hardware,
    pub(crate) optimizer: Optimizer,
    pub(crate) scheduler: Scheduler,
    pub(crate) quantization: bool,
    pub(crate) inference_framework: InferenceFramework,
    pub(crate) serving_framework: ServingFramework,
}

/// Copies the checked fields and computes the derived attributes.
///
/// Only the validator's success path calls this.
pub(crate) fn build(checked: CheckedSelection) -> Configuration {
    let head_dim = checked.hidden_units / checked.num_heads;
    let parameter_estimate = parameter_estimate(checked.scale);

    Configuration {
        task: checked.task,
        model_architecture: checked.model_architecture,
        scale: checked.scale,
        data_sources: checked.data_sources,
        preprocessing_steps: checked.preprocessing_steps,
        num_layers: checked.num_layers,
        num_heads: checked.num_heads.get(),
        hidden_units: checked.hidden_units,
        context_length: checked.context_length,
        hardware: checked.hardware,
        optimizer: checked.optimizer,
        scheduler: checked.scheduler,
        quantization: checked.quantization,
        inference_framework: checked.inference_framework,
        serving_framework: checked.serving_framework,
        head_dim,
        parameter_estimate,
    }
}

/// Scale is authoritative: the estimate is not recomputed from layers or hidden units.
pub(crate) fn parameter_estimate(scale: f64) -> u64 {
    (scale * PARAMETERS_PER_SCALE_UNIT).round().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked() -> CheckedSelection {
        CheckedSelection {
            task: Task::CodeCompletion,
            model_architecture: ModelArchitecture::LlamaLike,
            scale: 7.0,
            data_sources: DataSources::CODE_REPOSITORIES,
            preprocessing_steps: PreprocessingSteps::TOKENIZATION,
            num_layers: 32,
            num_heads: NonZeroU32::new(32).unwrap(),
            hidden_units: 4096,
            context_length: 4096,
            hardware: Hardware::H100,
            optimizer: Optimizer::AdamW,
            scheduler: Scheduler::CosineDecay,
            quantization: true,
            inference_framework: InferenceFramework::Vllm,
            serving_framework: ServingFramework::RayServe,
        }
    }

    #[test]
    fn derived_attributes_are_computed() {
        let config = build(checked());
        assert_eq!(config.head_dim(), 128);
        assert_eq!(config.parameter_estimate(), 7_000_000_000);
        assert_eq!(config.num_heads(), 32);
    }

    #[test]
    fn parameter_estimate_rounds_float_noise() {
        assert_eq!(parameter_estimate(0.1), 100_000_000);
        assert_eq!(parameter_estimate(0.7), 700_000_000);
        assert_eq!(parameter_estimate(100.0), 100_000_000_000);
    }
}

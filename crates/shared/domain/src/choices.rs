//! Single-select option vocabularies.
//!
//! Every enum carries its display label as both the `strum` and the `serde` name, so
//! `"GPUs (A100)".parse::<Hardware>()`, `Hardware::A100.to_string()` and the JSON
//! representation all agree. `VARIANTS` lists the labels in definition order.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            Serialize, Deserialize,
            Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                #[strum(serialize = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Display label, identical to the serialized form.
            #[must_use]
            pub fn label(self) -> &'static str {
                self.into()
            }
        }
    };
}

choice_enum! {
    /// What the model is being designed to do.
    Task {
        TextGeneration => "Text Generation",
        Translation => "Translation",
        CodeCompletion => "Code Completion",
        QuestionAnswering => "Question Answering",
    }
}

choice_enum! {
    ModelArchitecture {
        Transformer => "Transformer",
        GptStyle => "GPT-style",
        LlamaLike => "LLaMA-like",
        Bert => "BERT",
        T5 => "T5",
    }
}

choice_enum! {
    /// Training accelerator.
    Hardware {
        A100 => "GPUs (A100)",
        H100 => "GPUs (H100)",
        Tpu => "TPUs",
    }
}

impl Hardware {
    #[must_use]
    pub const fn is_gpu(self) -> bool {
        matches!(self, Self::A100 | Self::H100)
    }
}

choice_enum! {
    Optimizer {
        AdamW => "AdamW",
        Lion => "Lion",
        Lamb => "LAMB",
    }
}

choice_enum! {
    /// Learning rate scheduler.
    Scheduler {
        CosineDecay => "Cosine Decay",
        LinearDecay => "Linear Decay",
    }
}

choice_enum! {
    InferenceFramework {
        TensorRt => "TensorRT",
        Vllm => "vLLM",
        FasterTransformer => "FasterTransformer",
    }
}

impl InferenceFramework {
    /// Whether the framework ships a quantized execution path (GPTQ/AWQ style weights).
    #[must_use]
    pub const fn supports_quantization(self) -> bool {
        matches!(self, Self::TensorRt | Self::Vllm)
    }
}

choice_enum! {
    ServingFramework {
        Triton => "Triton Inference Server",
        FastApi => "FastAPI",
        RayServe => "Ray Serve",
    }
}

impl ServingFramework {
    /// Ray Serve is only deployed on GPU backends.
    #[must_use]
    pub const fn requires_gpu(self) -> bool {
        matches!(self, Self::RayServe)
    }
}

choice_enum! {
    /// Display grouping of fields, in form order.
    Section {
        Objective => "Define the Objective",
        Data => "Data Collection & Preprocessing",
        Architecture => "Model Architecture Selection & Implementation",
        Training => "Training Strategy",
        Deployment => "Deployment",
    }
}

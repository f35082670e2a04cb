use nlpd_designer::validator::context_ceiling;
use nlpd_designer::{CrossFieldRule, SelectionSnapshot, deserialize, serialize, validate};
use nlpd_domain::choices::{
    Hardware, InferenceFramework, ModelArchitecture, Optimizer, Scheduler, ServingFramework, Task,
};
use nlpd_domain::constants::{HIDDEN_UNITS, NUM_HEADS};
use nlpd_domain::sets::{DataSources, LabelledSet, PreprocessingSteps};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use strum::VariantNames;

/// Snapshots that satisfy every per-field and cross-field check by construction.
fn valid_snapshot() -> impl Strategy<Value = SelectionSnapshot> {
    let shape = (1_u32..=32).prop_flat_map(|heads| (Just(heads), 128_u32.div_ceil(heads)..=8192 / heads));
    let size = (1_u32..=1000, 512_u32..=8192, 1_u32..=100);
    let choices = (
        select(Task::VARIANTS),
        select(ModelArchitecture::VARIANTS),
        select(Hardware::VARIANTS),
        select(Optimizer::VARIANTS),
        select(Scheduler::VARIANTS),
        select(InferenceFramework::VARIANTS),
        select(ServingFramework::VARIANTS),
        any::<bool>(),
    );
    let sets = (
        subsequence(DataSources::domain(), 1..=DataSources::MEMBERS.len()),
        subsequence(PreprocessingSteps::domain(), 1..=PreprocessingSteps::MEMBERS.len()),
    );

    (shape, size, choices, sets).prop_map(
        |(
            (heads, per_head),
            (tenths, context, layers),
            (task, architecture, hardware, optimizer, scheduler, inference, serving, quantization),
            (sources, steps),
        )| {
            let scale = f64::from(tenths) / 10.0;
            let context = context.min(context_ceiling(scale));
            let hardware = if serving == "Ray Serve" && hardware == "TPUs" { "GPUs (H100)" } else { hardware };
            let quantization = quantization && inference != "FasterTransformer";

            SelectionSnapshot::builder()
                .set("task", task)
                .set("model_architecture", architecture)
                .set("scale", scale)
                .set("data_sources", sources)
                .set("preprocessing_steps", steps)
                .set("num_layers", layers)
                .set("num_heads", heads)
                .set("hidden_units", heads * per_head)
                .set("context_length", context)
                .set("hardware", hardware)
                .set("optimizer", optimizer)
                .set("scheduler", scheduler)
                .set("quantization", quantization)
                .set("inference_framework", inference)
                .set("serving_framework", serving)
                .build()
                .unwrap()
        },
    )
}

proptest! {
    #[test]
    fn valid_selections_round_trip(snapshot in valid_snapshot()) {
        let config = validate(&snapshot).unwrap();
        let text = serialize(&config).unwrap();

        prop_assert_eq!(&deserialize(&text).unwrap(), &config);
        prop_assert_eq!(serialize(&deserialize(&text).unwrap()).unwrap(), text);
        prop_assert_eq!(validate(&config.to_snapshot()).unwrap(), config);
    }

    #[test]
    fn indivisible_heads_yield_exactly_one_violation(
        snapshot in valid_snapshot(),
        heads in 1_i64..=64,
        hidden in 1_i64..=16_384,
    ) {
        prop_assume!(hidden % heads != 0);
        let snapshot = snapshot.with(NUM_HEADS, heads).unwrap().with(HIDDEN_UNITS, hidden).unwrap();

        let report = validate(&snapshot).unwrap_err();
        let rules: Vec<_> = report.cross_field().collect();
        prop_assert_eq!(rules.len(), 1);
        prop_assert_eq!(rules[0].rule(), Some(CrossFieldRule::HeadDivisibility));
        prop_assert!(rules[0].references(HIDDEN_UNITS) && rules[0].references(NUM_HEADS));

        let in_range = (1..=32).contains(&heads) && (128..=8192).contains(&hidden);
        if in_range {
            prop_assert_eq!(report.len(), 1);
        }
        prop_assert!(report.iter().all(|v| v.rule().is_some()
            || v.field() == HIDDEN_UNITS
            || v.field() == NUM_HEADS));
    }
}

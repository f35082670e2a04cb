use nlpd_designer::{
    CrossFieldRule, DesignError, SelectionSnapshot, ValidationReport, ViolationKind, validate,
};
use nlpd_domain::choices::Task;
use nlpd_domain::constants::{
    CONTEXT_LENGTH, CROSS_FIELD, HARDWARE, HIDDEN_UNITS, INFERENCE_FRAMEWORK, NUM_HEADS,
    QUANTIZATION, SCALE, SERVING_FRAMEWORK, TASK,
};
use nlpd_domain::sets::LabelledSet;
use nlpd_domain::value::FieldValue;

fn example() -> SelectionSnapshot {
    SelectionSnapshot::from_entries([
        ("task", FieldValue::from("Text Generation")),
        ("model_architecture", FieldValue::from("GPT-style")),
        ("scale", FieldValue::Float(1.0)),
        ("data_sources", FieldValue::from(vec!["Books"])),
        ("preprocessing_steps", FieldValue::from(vec!["Tokenization"])),
        ("num_layers", FieldValue::Int(12)),
        ("num_heads", FieldValue::Int(8)),
        ("hidden_units", FieldValue::Int(768)),
        ("context_length", FieldValue::Int(2048)),
        ("hardware", FieldValue::from("GPUs (A100)")),
        ("optimizer", FieldValue::from("AdamW")),
        ("scheduler", FieldValue::from("Cosine Decay")),
        ("quantization", FieldValue::Bool(false)),
        ("inference_framework", FieldValue::from("vLLM")),
        ("serving_framework", FieldValue::from("FastAPI")),
    ])
    .unwrap()
}

fn rejected(snapshot: &SelectionSnapshot) -> ValidationReport {
    validate(snapshot).unwrap_err()
}

fn rules(report: &ValidationReport) -> Vec<CrossFieldRule> {
    report.cross_field().filter_map(|v| v.rule()).collect()
}

#[test]
fn end_to_end_example_is_accepted() {
    let config = validate(&example()).unwrap();
    assert_eq!(config.head_dim(), 96);
    assert_eq!(config.task(), Task::TextGeneration);
    assert_eq!(config.parameter_estimate(), 1_000_000_000);
    assert_eq!(config.data_sources().labels(), vec!["Books"]);
}

#[test]
fn indivisible_hidden_units_is_one_cross_field_violation() {
    let report = rejected(&example().with(HIDDEN_UNITS, 770_i64).unwrap());
    assert_eq!(report.len(), 1);

    let violation = report.iter().next().unwrap();
    assert_eq!(violation.field(), CROSS_FIELD);
    assert_eq!(
        violation.kind(),
        ViolationKind::CrossFieldConstraintViolation(CrossFieldRule::HeadDivisibility)
    );
    assert!(violation.references(HIDDEN_UNITS));
    assert!(violation.references(NUM_HEADS));
}

#[test]
fn small_models_have_a_short_context_window() {
    let small = example().with(SCALE, 0.5).unwrap().with(CONTEXT_LENGTH, 4096_i64).unwrap();
    assert_eq!(rules(&rejected(&small)), vec![CrossFieldRule::ContextCeiling]);

    let large = example().with(SCALE, 2.0).unwrap().with(CONTEXT_LENGTH, 4096_i64).unwrap();
    assert!(validate(&large).is_ok());

    let boundary = example().with(SCALE, 0.9).unwrap().with(CONTEXT_LENGTH, 2048_i64).unwrap();
    assert!(validate(&boundary).is_ok());
}

#[test]
fn quantization_needs_a_quantizing_framework() {
    let quantized = example().with(QUANTIZATION, true).unwrap();

    let faster = quantized.with(INFERENCE_FRAMEWORK, "FasterTransformer").unwrap();
    assert_eq!(rules(&rejected(&faster)), vec![CrossFieldRule::QuantizationSupport]);

    assert!(validate(&quantized.with(INFERENCE_FRAMEWORK, "vLLM").unwrap()).is_ok());
    assert!(validate(&quantized.with(INFERENCE_FRAMEWORK, "TensorRT").unwrap()).is_ok());
}

#[test]
fn ray_serve_is_gpu_only() {
    let ray = example().with(SERVING_FRAMEWORK, "Ray Serve").unwrap();

    let tpu = ray.with(HARDWARE, "TPUs").unwrap();
    assert_eq!(rules(&rejected(&tpu)), vec![CrossFieldRule::ServingHardware]);

    assert!(validate(&ray.with(HARDWARE, "GPUs (A100)").unwrap()).is_ok());
    assert!(validate(&example().with(HARDWARE, "TPUs").unwrap()).is_ok());
}

#[test]
fn every_violation_is_reported_at_once() {
    let snapshot = example()
        .with(TASK, "Summarization")
        .unwrap()
        .with(HIDDEN_UNITS, 770_i64)
        .unwrap()
        .with(QUANTIZATION, true)
        .unwrap()
        .with(INFERENCE_FRAMEWORK, "FasterTransformer")
        .unwrap()
        .with(SERVING_FRAMEWORK, "Ray Serve")
        .unwrap()
        .with(HARDWARE, "TPUs")
        .unwrap();

    let report = rejected(&snapshot);
    assert_eq!(report.len(), 4);
    assert_eq!(report.for_field(TASK).count(), 1);
    assert_eq!(
        rules(&report),
        vec![
            CrossFieldRule::HeadDivisibility,
            CrossFieldRule::QuantizationSupport,
            CrossFieldRule::ServingHardware
        ]
    );
}

#[test]
fn rules_still_apply_to_out_of_range_values() {
    let snapshot = example().with(HIDDEN_UNITS, 8200_i64).unwrap().with(NUM_HEADS, 3_i64).unwrap();
    let report = rejected(&snapshot);

    assert_eq!(report.len(), 2);
    assert_eq!(report.for_field(HIDDEN_UNITS).count(), 1);
    assert_eq!(rules(&report), vec![CrossFieldRule::HeadDivisibility]);

    let small = example().with(SCALE, 0.5).unwrap().with(CONTEXT_LENGTH, 9000_i64).unwrap();
    let report = rejected(&small);
    assert_eq!(report.for_field(CONTEXT_LENGTH).count(), 1);
    assert_eq!(rules(&report), vec![CrossFieldRule::ContextCeiling]);
}

#[test]
fn rule_is_skipped_when_it_cannot_be_computed() {
    let report = rejected(&example().with(NUM_HEADS, 0_i64).unwrap());
    assert_eq!(report.len(), 1);

    let violation = report.iter().next().unwrap();
    assert_eq!(violation.field(), NUM_HEADS);
    assert_eq!(violation.kind(), ViolationKind::OutOfDomain);

    let report = rejected(&example().with(HIDDEN_UNITS, "wide").unwrap());
    assert_eq!(report.len(), 1);
    assert_eq!(report.cross_field().count(), 0);
}

#[test]
fn out_of_domain_values_are_rejected_per_field() {
    let cases: [(&str, FieldValue); 8] = [
        (SCALE, FieldValue::Float(0.05)),
        (SCALE, FieldValue::Float(1.25)),
        (SCALE, FieldValue::from("big")),
        (NUM_HEADS, FieldValue::Int(48)),
        (CONTEXT_LENGTH, FieldValue::Int(256)),
        (HARDWARE, FieldValue::from("gpus (a100)")),
        (QUANTIZATION, FieldValue::from("yes")),
        ("data_sources", FieldValue::from(vec!["Books", "Forums"])),
    ];

    for (name, value) in cases {
        let report = rejected(&example().with(name, value.clone()).unwrap());
        assert_eq!(report.len(), 1, "{name} = {value}");
        let violation = report.iter().next().unwrap();
        assert_eq!(violation.field(), name);
        assert_eq!(violation.kind(), ViolationKind::OutOfDomain);
    }
}

#[test]
fn required_multi_selects_must_not_be_empty() {
    for name in ["data_sources", "preprocessing_steps"] {
        let report = rejected(&example().with(name, Vec::<String>::new()).unwrap());
        assert_eq!(report.len(), 1, "{name}");
        assert_eq!(report.for_field(name).count(), 1, "{name}");
        assert_eq!(report.iter().next().unwrap().kind(), ViolationKind::OutOfDomain);
    }
}

#[test]
fn integer_scale_and_duplicate_labels_are_normalised() {
    let snapshot = example()
        .with(SCALE, 3_i64)
        .unwrap()
        .with("data_sources", vec!["Web Crawls", "Books", "Web Crawls"])
        .unwrap();
    let config = validate(&snapshot).unwrap();

    assert!((config.scale() - 3.0).abs() < f64::EPSILON);
    assert_eq!(config.data_sources().labels(), vec!["Books", "Web Crawls"]);
}

#[test]
fn unknown_field_is_fatal_not_a_violation() {
    let err = example().with("dropout", 0.1).unwrap_err();
    assert!(matches!(err, DesignError::UnknownField { .. }));
    assert!(err.report().is_none());
}

#[test]
fn rejection_converts_into_design_error() {
    let report = rejected(&example().with(HIDDEN_UNITS, 770_i64).unwrap());
    let err = DesignError::from(report.clone());
    assert_eq!(err.report(), Some(&report));
    assert!(err.to_string().contains("1 violation"));
}

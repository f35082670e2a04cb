use nlpd_domain::choices::{Hardware, InferenceFramework};
use nlpd_domain::sets::{DataSources, LabelledSet, PreprocessingSteps};
use nlpd_domain::value::FieldValue;
use serde_json::json;

#[test]
fn field_values_parse_untagged() {
    let parsed: Vec<FieldValue> =
        serde_json::from_value(json!([true, 12, 1.5, "vLLM", ["Books", "Wikipedia"], []]))
            .expect("values deserialize");

    assert_eq!(
        parsed,
        vec![
            FieldValue::Bool(true),
            FieldValue::Int(12),
            FieldValue::Float(1.5),
            FieldValue::from("vLLM"),
            FieldValue::from(vec!["Books", "Wikipedia"]),
            FieldValue::MultiEnum(Vec::new()),
        ]
    );
}

#[test]
fn field_value_display_is_diagnostic_friendly() {
    assert_eq!(FieldValue::from("TPUs").to_string(), "\"TPUs\"");
    assert_eq!(FieldValue::from(vec!["Books", "Web Crawls"]).to_string(), "[\"Books\", \"Web Crawls\"]");
    assert_eq!(FieldValue::Int(8).shape(), "integer");
}

#[test]
fn choices_serialize_as_labels() {
    assert_eq!(serde_json::to_value(Hardware::A100).unwrap(), json!("GPUs (A100)"));
    assert_eq!(
        serde_json::from_value::<InferenceFramework>(json!("FasterTransformer")).unwrap(),
        InferenceFramework::FasterTransformer
    );
}

#[test]
fn sets_serialize_in_domain_order() {
    let steps = PreprocessingSteps::try_from_labels(["Normalization", "Remove Duplicates"]).unwrap();
    assert_eq!(serde_json::to_value(steps).unwrap(), json!(["Remove Duplicates", "Normalization"]));

    let sources: DataSources = serde_json::from_value(json!(["Code Repositories"])).unwrap();
    assert_eq!(sources, DataSources::CODE_REPOSITORIES);

    assert!(serde_json::from_value::<DataSources>(json!(["Usenet"])).is_err());
}

use nlpd_kernel::domain::value::FieldValue;
use nlpd_kernel::selection::{SelectionError, SelectionFormat, load_selection, parse_selection};
use std::io::Write;

#[test]
fn json_selection_keeps_value_shapes() {
    let entries = parse_selection(
        r#"{"scale": 2.0, "num_heads": 16, "quantization": true, "hardware": "TPUs", "data_sources": ["Books"]}"#,
        SelectionFormat::Json,
    )
    .unwrap();

    assert_eq!(entries, vec![
        ("data_sources".to_owned(), FieldValue::from(vec!["Books"])),
        ("hardware".to_owned(), FieldValue::from("TPUs")),
        ("num_heads".to_owned(), FieldValue::Int(16)),
        ("quantization".to_owned(), FieldValue::Bool(true)),
        ("scale".to_owned(), FieldValue::Float(2.0)),
    ]);
}

#[test]
fn toml_file_is_detected_by_extension() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "task = \"Translation\"\nhidden_units = 1024\npreprocessing_steps = [\"Tokenization\", \"Normalization\"]"
    )
    .unwrap();

    let entries = load_selection(file.path()).unwrap();

    assert_eq!(entries.len(), 3);
    assert!(entries.contains(&("hidden_units".to_owned(), FieldValue::Int(1024))));
    assert!(entries.contains(&("task".to_owned(), FieldValue::from("Translation"))));
}

#[test]
fn missing_file_is_an_io_error_with_context() {
    let err = load_selection("no/such/selection.json").unwrap_err();
    assert!(matches!(err, SelectionError::Io { context: Some(_), .. }));
}

#[test]
fn nested_objects_are_rejected() {
    let err = parse_selection(r#"{"scale": {"value": 1.0}}"#, SelectionFormat::Json).unwrap_err();
    assert!(matches!(err, SelectionError::Json { .. }));
}

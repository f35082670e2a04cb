use nlpd_derive::nlpd_error;
use std::borrow::Cow;

#[nlpd_error]
pub enum ParseError {
    #[error("Number parse failed{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Out of range{}: {message}", format_context(.context))]
    Range { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_heads(raw: &str) -> Result<u32, ParseError> {
    let heads = raw.trim().parse::<u32>().context("num_heads")?;
    if heads == 0 {
        return Err(ParseError::Range { message: "must be positive".into(), context: None });
    }
    Ok(heads)
}

#[test]
fn nlpd_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/nlpd_error_pass.rs");
}

#[test]
fn source_context_is_rendered_in_display() {
    let err = parse_heads("eight").unwrap_err();
    assert!(matches!(err, ParseError::Number { .. }));
    assert!(err.to_string().starts_with("Number parse failed (num_heads):"));
}

#[test]
fn context_can_be_attached_after_the_fact() {
    let err = parse_heads("0").context("hidden_units / num_heads").unwrap_err();
    assert_eq!(err.to_string(), "Out of range (hidden_units / num_heads): must be positive");
}

#[test]
fn question_mark_converts_sources_without_context() {
    fn inner() -> Result<u32, ParseError> {
        Ok("x".parse::<u32>()?)
    }
    let err = inner().unwrap_err();
    assert!(err.to_string().starts_with("Number parse failed: "));
}

#[test]
fn internal_accepts_plain_strings() {
    let from_static: ParseError = "registry not initialized".into();
    let from_owned: ParseError = String::from("unexpected state").into();

    assert_eq!(from_static.to_string(), "Internal error: registry not initialized");
    assert_eq!(from_owned.to_string(), "Internal error: unexpected state");
}

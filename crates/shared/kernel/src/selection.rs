//! Raw selections read from files and `name=value` assignments.
//!
//! Nothing here checks domains. Values that cannot be read as the field's kind are kept
//! as text, so the validator reports them alongside every other problem.

use nlpd_domain::field::FieldKind;
use nlpd_domain::value::FieldValue;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;

#[nlpd_derive::nlpd_error]
pub enum SelectionError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid JSON selection{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid TOML selection{}: {source}", format_context(.context))]
    Toml { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid assignment '{input}'{}: {reason}", format_context(.context))]
    InvalidAssignment {
        input: Cow<'static, str>,
        reason: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}

/// `(field name, raw value)` pairs, ready for a selection snapshot.
pub type Entries = Vec<(String, FieldValue)>;

/// On-disk encoding of a selection file: an object of field name to value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFormat {
    #[default]
    Json,
    Toml,
}

impl SelectionFormat {
    /// `.toml` files are TOML; anything else is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Reads a selection file, picking the format from its extension.
///
/// # Errors
/// Returns [`SelectionError::Io`] if the file cannot be read, or a parse error.
pub fn load_selection(path: impl AsRef<Path>) -> Result<Entries, SelectionError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).context(format!("reading {}", path.display()))?;
    parse_selection(&text, SelectionFormat::from_path(path))
}

/// Parses selection text.
///
/// # Errors
/// Returns [`SelectionError::Json`] or [`SelectionError::Toml`] when the text is not an
/// object of plain values.
pub fn parse_selection(text: &str, format: SelectionFormat) -> Result<Entries, SelectionError> {
    let fields: BTreeMap<String, FieldValue> = match format {
        SelectionFormat::Json => serde_json::from_str(text)?,
        SelectionFormat::Toml => toml::from_str(text)?,
    };

    debug!(fields = fields.len(), ?format, "Selection parsed");

    Ok(fields.into_iter().collect())
}

/// Parses `name=value`, reading the value according to the kind `kind_of` reports.
///
/// Names `kind_of` does not know are kept with a text value so the snapshot builder can
/// report them as unknown fields.
///
/// # Errors
/// Returns [`SelectionError::InvalidAssignment`] when there is no `=` or no name.
pub fn parse_assignment(
    input: &str,
    kind_of: impl FnOnce(&str) -> Option<FieldKind>,
) -> Result<(String, FieldValue), SelectionError> {
    let (name, raw) = input.split_once('=').ok_or_else(|| invalid(input, "expected name=value"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid(input, "missing field name"));
    }

    let value = parse_value(raw, kind_of(name).unwrap_or(FieldKind::Enum));
    Ok((name.to_owned(), value))
}

/// Reads `raw` as `kind`, falling back to text when it does not parse.
#[must_use]
pub fn parse_value(raw: &str, kind: FieldKind) -> FieldValue {
    let raw = raw.trim();
    let parsed = match kind {
        FieldKind::Bool => parse_flag(raw).map(FieldValue::Bool),
        FieldKind::Int => raw.parse().ok().map(FieldValue::Int),
        FieldKind::Float => raw.parse().ok().map(FieldValue::Float),
        FieldKind::MultiEnum => {
            Some(FieldValue::multi(raw.split(',').map(str::trim).filter(|item| !item.is_empty())))
        },
        FieldKind::Enum => None,
    };
    parsed.unwrap_or_else(|| FieldValue::from(raw))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "enabled" => Some(true),
        "false" | "no" | "off" | "0" | "disabled" => Some(false),
        _ => None,
    }
}

fn invalid(input: &str, reason: &'static str) -> SelectionError {
    SelectionError::InvalidAssignment {
        input: Cow::Owned(input.to_owned()),
        reason: Cow::Borrowed(reason),
        context: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_the_field_kind() {
        assert_eq!(parse_value(" 64 ", FieldKind::Int), FieldValue::Int(64));
        assert_eq!(parse_value("2.5", FieldKind::Float), FieldValue::Float(2.5));
        assert_eq!(parse_value("Enabled", FieldKind::Bool), FieldValue::Bool(true));
        assert_eq!(parse_value("GPUs (A100)", FieldKind::Enum), FieldValue::from("GPUs (A100)"));
        assert_eq!(
            parse_value("Books, ,Web Crawls", FieldKind::MultiEnum),
            FieldValue::from(vec!["Books", "Web Crawls"])
        );
    }

    #[test]
    fn unparseable_values_stay_text() {
        assert_eq!(parse_value("many", FieldKind::Int), FieldValue::from("many"));
        assert_eq!(parse_value("maybe", FieldKind::Bool), FieldValue::from("maybe"));
    }

    #[test]
    fn assignment_needs_a_name_and_equals() {
        assert!(matches!(
            parse_assignment("num_heads", |_| Some(FieldKind::Int)),
            Err(SelectionError::InvalidAssignment { .. })
        ));
        assert!(parse_assignment(" =8", |_| Some(FieldKind::Int)).is_err());

        let (name, value) = parse_assignment("num_heads = 12", |_| Some(FieldKind::Int)).unwrap();
        assert_eq!(name, "num_heads");
        assert_eq!(value, FieldValue::Int(12));
    }

    #[test]
    fn unknown_names_keep_raw_text() {
        let (name, value) = parse_assignment("dropout=0.1", |_| None).unwrap();
        assert_eq!(name, "dropout");
        assert_eq!(value, FieldValue::from("0.1"));
    }

    #[test]
    fn format_comes_from_the_extension() {
        assert_eq!(SelectionFormat::from_path(Path::new("design.TOML")), SelectionFormat::Toml);
        assert_eq!(SelectionFormat::from_path(Path::new("design.json")), SelectionFormat::Json);
        assert_eq!(SelectionFormat::from_path(Path::new("design")), SelectionFormat::Json);
    }
}

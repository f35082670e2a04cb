//! # Serializer
//!
//! Canonical JSON form of a [`Configuration`]: one key per registered field in
//! registry order, then the derived `head_dim` and `parameter_estimate`. Multi-select
//! values are written as label lists in domain order, so equal configurations always
//! produce byte-identical text.
//!
//! [`deserialize`] is the only other way to obtain a [`Configuration`], and it goes
//! through the validator again.

use crate::configuration::Configuration;
use crate::error::{DesignError, DesignErrorExt};
use crate::registry::registry;
use crate::snapshot::SelectionSnapshot;
use crate::validator::validate;
use nlpd_domain::constants::{ARTIFACT_FILE_NAME, ARTIFACT_MIME, HEAD_DIM, PARAMETER_ESTIMATE};
use nlpd_domain::value::FieldValue;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;

const DERIVED: [&str; 2] = [HEAD_DIM, PARAMETER_ESTIMATE];

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = registry().all();
        let mut map = serializer.serialize_map(Some(fields.len() + DERIVED.len()))?;
        for name in fields.iter().map(|spec| spec.name).chain(DERIVED) {
            let value = self
                .value(name)
                .ok_or_else(|| S::Error::custom(format!("field '{name}' has no representable value")))?;
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Text layout of a serialized configuration. Key order is the same for both.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Compact,
    Pretty,
}

/// Serializes a configuration as compact canonical JSON.
///
/// # Errors
/// Returns [`DesignError::Serialization`] if a value cannot be represented.
pub fn serialize(config: &Configuration) -> Result<String, DesignError> {
    serialize_with(config, Layout::Compact)
}

/// Serializes a configuration with the given layout.
///
/// # Errors
/// Returns [`DesignError::Serialization`] if a value cannot be represented.
pub fn serialize_with(config: &Configuration, layout: Layout) -> Result<String, DesignError> {
    let text = match layout {
        Layout::Compact => serde_json::to_string(config),
        Layout::Pretty => serde_json::to_string_pretty(config),
    };
    Ok(text?)
}

/// Parses a serialized configuration, re-validating it from scratch.
///
/// # Errors
/// - [`DesignError::Serialization`] when the text is not a JSON object of plain values.
/// - [`DesignError::UnknownField`] when the object carries an unregistered key.
/// - [`DesignError::CorruptArtifact`] when a field or derived key is missing, or the
///   derived keys disagree with the recomputed configuration.
/// - [`DesignError::Rejected`] when the values no longer pass validation.
pub fn deserialize(text: &str) -> Result<Configuration, DesignError> {
    let mut object: Map<String, Value> =
        serde_json::from_str(text).context("artifact must be a JSON object")?;

    let head_dim = take_derived(&mut object, HEAD_DIM)?;
    let parameter_estimate = take_derived(&mut object, PARAMETER_ESTIMATE)?;

    if let Some(missing) = registry().all().iter().find(|spec| !object.contains_key(spec.name)) {
        return Err(corrupt(format!("missing field '{}'", missing.name)));
    }

    let entries = object
        .into_iter()
        .map(|(name, value)| {
            let value = serde_json::from_value::<FieldValue>(value)
                .context(format!("field '{name}' is not a plain value"))?;
            Ok((name, value))
        })
        .collect::<Result<Vec<_>, DesignError>>()?;

    let config = validate(&SelectionSnapshot::from_entries(entries)?)?;

    if u64::from(config.head_dim()) != head_dim {
        return Err(corrupt(format!(
            "{HEAD_DIM} is {head_dim} but the fields imply {}",
            config.head_dim()
        )));
    }
    if config.parameter_estimate() != parameter_estimate {
        return Err(corrupt(format!(
            "{PARAMETER_ESTIMATE} is {parameter_estimate} but the fields imply {}",
            config.parameter_estimate()
        )));
    }

    Ok(config)
}

fn take_derived(object: &mut Map<String, Value>, name: &str) -> Result<u64, DesignError> {
    object
        .remove(name)
        .ok_or_else(|| corrupt(format!("missing derived key '{name}'")))?
        .as_u64()
        .ok_or_else(|| corrupt(format!("derived key '{name}' must be a non-negative integer")))
}

fn corrupt(message: impl Into<Cow<'static, str>>) -> DesignError {
    DesignError::CorruptArtifact { message: message.into(), context: None }
}

/// A serialized configuration ready to hand to a presentation sink or write to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    file_name: String,
    mime: &'static str,
    body: String,
}

impl Artifact {
    /// Serializes `config` under the default file name.
    ///
    /// # Errors
    /// Propagates [`serialize_with`] failures.
    pub fn new(config: &Configuration, layout: Layout) -> Result<Self, DesignError> {
        Ok(Self {
            file_name: ARTIFACT_FILE_NAME.to_owned(),
            mime: ARTIFACT_MIME,
            body: serialize_with(config, layout)?,
        })
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> Configuration {
        let snapshot = SelectionSnapshot::builder()
            .set("data_sources", vec!["Wikipedia", "Books"])
            .set("preprocessing_steps", vec!["Tokenization"])
            .build()
            .unwrap();
        validate(&snapshot).unwrap()
    }

    #[test]
    fn keys_follow_registry_order_then_derived() {
        let text = serialize(&default_config()).unwrap();
        let positions: Vec<usize> = registry()
            .all()
            .iter()
            .map(|spec| spec.name)
            .chain(DERIVED)
            .map(|name| text.find(&format!("\"{name}\":")).unwrap())
            .collect();
        assert!(positions.is_sorted());
        assert!(text.contains(r#""data_sources":["Books","Wikipedia"]"#));
        assert!(text.ends_with(r#""head_dim":96,"parameter_estimate":1000000000}"#));
    }

    #[test]
    fn pretty_and_compact_parse_back_equal() {
        let config = default_config();
        let compact = serialize(&config).unwrap();
        let pretty = serialize_with(&config, Layout::Pretty).unwrap();
        assert_ne!(compact, pretty);
        assert_eq!(deserialize(&compact).unwrap(), config);
        assert_eq!(deserialize(&pretty).unwrap(), config);
    }

    #[test]
    fn tampered_derived_key_is_corrupt() {
        let text = serialize(&default_config()).unwrap().replace("\"head_dim\":96", "\"head_dim\":64");
        assert!(matches!(deserialize(&text), Err(DesignError::CorruptArtifact { .. })));
    }

    #[test]
    fn missing_derived_key_is_corrupt() {
        let text = serialize(&default_config())
            .unwrap()
            .replace(",\"parameter_estimate\":1000000000", "");
        assert!(matches!(deserialize(&text), Err(DesignError::CorruptArtifact { .. })));
    }

    #[test]
    fn non_object_is_a_serialization_error() {
        let err = deserialize("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DesignError::Serialization { context: Some(_), .. }));
    }

    #[test]
    fn artifact_carries_download_metadata() {
        let artifact = Artifact::new(&default_config(), Layout::Pretty).unwrap();
        assert_eq!(artifact.file_name(), "model_config.json");
        assert_eq!(artifact.mime(), "application/json");
        assert!(artifact.body().starts_with("{\n"));

        let renamed = artifact.with_file_name("llm.json");
        assert_eq!(renamed.file_name(), "llm.json");
    }
}

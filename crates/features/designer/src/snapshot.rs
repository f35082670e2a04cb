//! # Selection Snapshot
//!
//! An immutable capture of one raw value per registered field. Values are stored in
//! registry order, so a snapshot can never be missing a field or carry an extra one.

use crate::error::DesignError;
use crate::registry::registry;
use nlpd_domain::field::FieldSpec;
use nlpd_domain::value::FieldValue;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    values: Vec<FieldValue>,
}

impl SelectionSnapshot {
    /// Starts an empty builder; unset fields fall back to their registry default.
    #[must_use]
    pub fn builder() -> SelectionBuilder {
        SelectionBuilder { values: vec![None; registry().len()], unknown: None }
    }

    /// A snapshot holding every field's default.
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_fn(|spec| spec.default.clone())
    }

    pub(crate) fn from_fn(f: impl FnMut(&'static FieldSpec) -> FieldValue) -> Self {
        Self { values: registry().all().iter().map(f).collect() }
    }

    /// Builds a snapshot from `(name, value)` pairs. Later pairs win over earlier ones.
    ///
    /// # Errors
    /// Returns [`DesignError::UnknownField`] for the first name not in the registry.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, DesignError>
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: AsRef<str>,
    {
        entries.into_iter().fold(Self::builder(), |b, (name, value)| b.set(name.as_ref(), value)).build()
    }

    /// Raw value of `name`.
    ///
    /// # Errors
    /// Returns [`DesignError::UnknownField`] when `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&FieldValue, DesignError> {
        registry()
            .position(name)
            .and_then(|i| self.values.get(i))
            .ok_or_else(|| DesignError::unknown_field(name))
    }

    /// Returns a new snapshot with `name` replaced; `self` is left untouched.
    ///
    /// # Errors
    /// Returns [`DesignError::UnknownField`] when `name` is not registered.
    pub fn with(&self, name: &str, value: impl Into<FieldValue>) -> Result<Self, DesignError> {
        let position = registry().position(name).ok_or_else(|| DesignError::unknown_field(name))?;
        let mut values = self.values.clone();
        values[position] = value.into();
        Ok(Self { values })
    }

    /// `(spec, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldValue)> {
        registry().all().iter().zip(&self.values)
    }
}

/// Collects selections before freezing them into a [`SelectionSnapshot`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug)]
pub struct SelectionBuilder {
    values: Vec<Option<FieldValue>>,
    unknown: Option<String>,
}

impl SelectionBuilder {
    /// Records a value. Unknown names are remembered and reported by [`Self::build`].
    pub fn set(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        match registry().position(name) {
            Some(i) => self.values[i] = Some(value.into()),
            None => {
                if self.unknown.is_none() {
                    self.unknown = Some(name.to_owned());
                }
            },
        }
        self
    }

    /// Freezes the selections, filling gaps from the registry defaults.
    ///
    /// # Errors
    /// Returns [`DesignError::UnknownField`] if any [`Self::set`] call used an unregistered name.
    pub fn build(self) -> Result<SelectionSnapshot, DesignError> {
        if let Some(name) = self.unknown {
            return Err(DesignError::unknown_field(&name));
        }

        let values = self
            .values
            .into_iter()
            .zip(registry().all())
            .map(|(value, spec)| value.unwrap_or_else(|| spec.default.clone()))
            .collect();

        Ok(SelectionSnapshot { values })
    }
}

//! # Model Designer
//!
//! Turns independently chosen design parameters for an NLP model into a single
//! validated, internally consistent [`Configuration`] and serializes it to canonical JSON.
//!
//! ## Pipeline
//!
//! 1.  **Registry ([`registry`]):** the fixed, ordered catalogue of fields with their
//!     kinds, domains and defaults.
//! 2.  **Snapshot ([`snapshot`]):** an immutable capture of one raw value per field.
//! 3.  **Validator ([`validator`]):** per-field domain checks plus cross-field rules; all
//!     violations are reported together.
//! 4.  **Serializer ([`serializer`]):** deterministic JSON in registry order, and the
//!     re-validating inverse.
//! 5.  **Summary ([`summary`]):** `(label, text)` pairs for display.
//!
//! [`design`] runs the whole chain for one [`SelectionSource`]; [`run`] additionally
//! hands the outcome to a [`PresentationSink`].
//!
//! The registry is initialised once and only read afterwards, so every function here is
//! safe to call from any number of threads.

mod builder;
mod configuration;
mod error;
mod pipeline;
pub mod ports;
pub mod registry;
pub mod serializer;
pub mod snapshot;
pub mod summary;
pub mod validator;
pub mod violation;

pub use crate::configuration::Configuration;
pub use crate::error::{DesignError, DesignErrorExt};
pub use crate::pipeline::{Design, design, run};
pub use crate::ports::{PresentationSink, SelectionSource};
pub use crate::registry::{FieldRegistry, registry};
pub use crate::serializer::{Artifact, Layout, deserialize, serialize, serialize_with};
pub use crate::snapshot::{SelectionBuilder, SelectionSnapshot};
pub use crate::summary::{SummaryLine, render, render_sections};
pub use crate::validator::validate;
pub use crate::violation::{CrossFieldRule, ValidationReport, ValidationViolation, ViolationKind};

//! Facade crate for the NLP model designer.
//! Re-exports the domain types, the kernel loaders and the designer pipeline.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use nlpd::designer::{SelectionSnapshot, validate};
//!
//! let snapshot = SelectionSnapshot::builder()
//!     .set("data_sources", vec!["Books"])
//!     .set("preprocessing_steps", vec!["Tokenization"])
//!     .build()
//!     .unwrap();
//! assert_eq!(validate(&snapshot).unwrap().head_dim(), 96);
//! ```

pub use nlpd_designer as designer;
pub use nlpd_domain as domain;
pub use nlpd_kernel as kernel;

/// The most used names in one import.
pub mod prelude {
    pub use nlpd_designer::{
        Artifact, Configuration, DesignError, Layout, SelectionSnapshot, ValidationReport,
        deserialize, registry, render_sections, serialize_with, validate,
    };
    pub use nlpd_domain::config::ToolConfig;
    pub use nlpd_domain::field::FieldKind;
    pub use nlpd_domain::value::FieldValue;
}

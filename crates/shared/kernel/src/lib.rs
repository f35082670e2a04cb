//! Kernel utilities shared by the designer hosts.
//! Keep this crate lightweight: it loads tool configuration and raw selections, and knows
//! nothing about validation.
//!
//! ## Config loading
//! ```rust,no_run
//! use nlpd_kernel::config::load_config;
//! use nlpd_kernel::domain::config::ToolConfig;
//!
//! let cfg: ToolConfig = load_config(None::<&str>).unwrap_or_default();
//! ```
//!
//! ## Selections
//! ```rust
//! use nlpd_kernel::domain::field::FieldKind;
//! use nlpd_kernel::selection::parse_assignment;
//!
//! let (name, value) = parse_assignment("data_sources=Books, Wikipedia", |_| Some(FieldKind::MultiEnum)).unwrap();
//! assert_eq!(name, "data_sources");
//! assert_eq!(value.to_string(), r#"["Books", "Wikipedia"]"#);
//! ```
pub mod config;
pub mod selection;

pub use nlpd_domain as domain;

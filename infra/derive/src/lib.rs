#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate in the workspace.
//!
//! Today this is a single attribute, [`macro@nlpd_error`], which turns a plain enum into
//! a `thiserror` error type with context propagation helpers.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! nlpd-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro to streamline error enums.
///
/// The annotated enum gains:
/// 1. `#[derive(Debug, thiserror::Error)]` (unless already derived).
/// 2. A `<Name>Ext` trait with a `context(...)` method for `Result<T, Name>` and for
///    `Result<T, Source>` of every variant that wraps a `source`.
/// 3. `From<Source>` conversions for those variants, so `?` works directly.
/// 4. `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///    variant exists.
/// 5. A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// Every variant must use named fields. Variants carrying a `source` must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
/// ```rust,ignore
/// use nlpd_derive::nlpd_error;
/// use std::borrow::Cow;
///
/// #[nlpd_error]
/// pub enum LoadError {
///     #[error("Parse error{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(raw: &str) -> Result<serde_json::Value, LoadError> {
///     serde_json::from_str(raw).context("Reading selection file")
/// }
/// ```
#[proc_macro_attribute]
pub fn nlpd_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}

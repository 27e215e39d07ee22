#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the shell workspace: the runtime entry point,
//! `OpenAPI` model/handler helpers and the error enum generator.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own
//! macros in doctests; the consuming crates carry the real tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap a Tokio runtime from an `async fn main`.
///
/// # Arguments
///
/// * `server` - multi-threaded profile for the HTTP host.
/// * `compact` - current-thread runtime for short-lived tools.
/// * no argument / `default` - the default profile.
///
/// # Examples
///
/// ```rust,ignore
/// #[mmrag_runtime::main(server)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data transfer object.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, derives
/// `utoipa::ToSchema` when the consuming crate enables its `server` feature and
/// applies `#[serde(rename_all = "camelCase")]` unless `rename_all = "..."` is given.
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case")]
/// pub struct PageView {
///     pub title: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with `utoipa::path`.
///
/// Arguments are forwarded verbatim to `utoipa::path` when the consuming crate
/// enables its `server` feature.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a workspace error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` when not already derived.
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant carrying a `source` field.
/// * `From<Source>` for those variants.
/// * `From<&'static str>` / `From<String>` when an `Internal` variant exists.
/// * `Name::context_note()` returning the attached context, if any.
/// * a private `format_context` helper for the `#[error(...)]` strings.
///
/// Every variant must use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[mmrag_error]
/// pub enum ShellError {
///     #[error("Configuration error{}: {message}", format_context(.context))]
///     Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn mmrag_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

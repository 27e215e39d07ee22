//! Application shell slice.
//!
//! A [`Bootstrapper`] owns the state of one session. It applies the page
//! configuration exactly once, then renders the heading and the static content
//! into a [`DisplaySurface`]:
//!
//! ```rust
//! use mmrag_shell::domain::content::StaticContent;
//! use mmrag_shell::domain::page::PageConfig;
//! use mmrag_shell::{Bootstrapper, RecordingSurface};
//!
//! let mut shell = Bootstrapper::new(RecordingSurface::default());
//! shell.configure(&PageConfig::default())?;
//! shell.render_title("Multi-Modal Retrieval-Augmented Generation (RAG)")?;
//! shell.render_static_content(&StaticContent::multi_modal_overview())?;
//! assert_eq!(shell.surface().events().len(), 3);
//! # Ok::<(), mmrag_shell::ShellError>(())
//! ```
//!
//! Sessions never share a bootstrapper; hosts create one per render pass.

mod bootstrap;
mod error;
mod event;
pub mod surface;
mod validate;

pub use bootstrap::{Bootstrapper, ShellState};
pub use error::{ShellError, ShellErrorExt};
pub use event::RenderEvent;
pub use mmrag_domain as domain;
#[cfg(feature = "html")]
pub use surface::HtmlSurface;
pub use surface::{DisplaySurface, MarkdownSurface, RecordingSurface};
pub use validate::resolve_page;

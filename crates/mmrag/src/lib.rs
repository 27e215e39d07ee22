//! Facade crate for the Multi-Modal RAG shell and its shared modules.
//! Re-exports domain/kernel primitives and composes the render pass the hosts run.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `mmrag` with the desired feature flags (`server`, `html`).
//! - Call [`render_session`] once per session with the surface of the host.

pub use mmrag_assistant as assistant;
pub use mmrag_domain as domain;
pub use mmrag_kernel as kernel;
pub use mmrag_shell as shell;

use mmrag_domain::config::AppConfig;
use mmrag_domain::content::StaticContent;
use mmrag_shell::{Bootstrapper, DisplaySurface, ShellError};
use std::borrow::Cow;

#[cfg(feature = "server")]
pub mod server {
    pub use mmrag_kernel::server::*;
}

/// Runs one session's render pass (configure, heading, content) into `surface`
/// and hands the surface back.
///
/// # Errors
/// Returns the first [`ShellError`] of the pass; nothing after it is rendered.
pub fn render_session<S: DisplaySurface>(
    config: &AppConfig,
    content: &StaticContent,
    surface: S,
    session: impl Into<Cow<'static, str>>,
) -> Result<S, ShellError> {
    let mut shell = Bootstrapper::new(surface).with_session(session);
    shell.render_pass(&config.page, &config.heading, content)?;
    tracing::debug!(session = shell.session(), "Render pass complete");
    Ok(shell.into_surface())
}

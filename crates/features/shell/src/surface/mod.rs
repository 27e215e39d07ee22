//! Display surfaces: the sinks a [`crate::Bootstrapper`] renders into.

mod emoji;
#[cfg(feature = "html")]
mod html;
mod markdown;
mod recording;

pub use emoji::shortcode_glyph;
#[cfg(feature = "html")]
pub use html::HtmlSurface;
pub use markdown::MarkdownSurface;
pub use recording::RecordingSurface;

use crate::error::ShellError;
use crate::event::RenderEvent;
use mmrag_domain::page::PageIcon;

/// A host display sink.
///
/// Surfaces receive events in render order and never see an event before the
/// page configuration.
pub trait DisplaySurface {
    /// Whether this surface can display `icon`. Called while validating the page.
    fn recognizes_icon(&self, icon: &PageIcon) -> bool {
        let _ = icon;
        true
    }

    /// Accepts one display call.
    ///
    /// # Errors
    /// Returns [`ShellError::Surface`] when the underlying sink fails.
    fn emit(&mut self, event: RenderEvent) -> Result<(), ShellError>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn recognizes_icon(&self, icon: &PageIcon) -> bool {
        (**self).recognizes_icon(icon)
    }

    fn emit(&mut self, event: RenderEvent) -> Result<(), ShellError> {
        (**self).emit(event)
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn recognizes_icon(&self, icon: &PageIcon) -> bool {
        (**self).recognizes_icon(icon)
    }

    fn emit(&mut self, event: RenderEvent) -> Result<(), ShellError> {
        (**self).emit(event)
    }
}

use crate::error::ShellError;
use crate::event::RenderEvent;
use crate::surface::DisplaySurface;
use crate::validate::resolve_page;
use mmrag_domain::content::StaticContent;
use mmrag_domain::page::{PageConfig, ResolvedPage};
use std::borrow::Cow;
use tracing::{debug, info, warn};

/// Session state of a [`Bootstrapper`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    Unconfigured,
    Configured(ResolvedPage),
}

/// Drives one session's render pass into a display surface.
///
/// The page must be configured exactly once, before any other call. A
/// bootstrapper is never shared between sessions.
#[derive(Debug)]
pub struct Bootstrapper<S> {
    session: Cow<'static, str>,
    state: ShellState,
    surface: S,
}

impl<S: DisplaySurface> Bootstrapper<S> {
    pub fn new(surface: S) -> Self {
        Self { session: Cow::Borrowed("local"), state: ShellState::Unconfigured, surface }
    }

    /// Tags log records of this session with `session`.
    #[must_use]
    pub fn with_session(mut self, session: impl Into<Cow<'static, str>>) -> Self {
        self.session = session.into();
        self
    }

    /// Validates and applies the page configuration.
    ///
    /// # Errors
    /// * [`ShellError::Configuration`] if the page is already configured or a
    ///   field is invalid.
    /// * [`ShellError::Surface`] if the surface rejects the configuration event.
    pub fn configure(&mut self, page: &PageConfig) -> Result<(), ShellError> {
        if self.is_configured() {
            warn!(session = %self.session, "Duplicate page configuration rejected");
            return Err(ShellError::Configuration {
                message: "the page can only be configured once per session".into(),
                context: Some("configure".into()),
            });
        }

        let resolved = resolve_page(page, &self.surface).inspect_err(|e| {
            warn!(session = %self.session, error = %e, "Invalid page configuration");
        })?;
        self.surface.emit(RenderEvent::PageConfigured(resolved.clone()))?;

        info!(
            session = %self.session,
            title = %resolved.title,
            layout = resolved.layout.as_str(),
            sidebar = resolved.sidebar_state.as_str(),
            "Page configured"
        );
        self.state = ShellState::Configured(resolved);
        Ok(())
    }

    /// Renders the page heading.
    ///
    /// # Errors
    /// * [`ShellError::Ordering`] before [`Self::configure`].
    /// * [`ShellError::Configuration`] for an empty heading.
    /// * [`ShellError::Surface`] if the surface rejects the event.
    pub fn render_title(&mut self, text: &str) -> Result<(), ShellError> {
        self.ensure_configured("render_title")?;
        if text.trim().is_empty() {
            return Err(ShellError::Configuration {
                message: "title text must not be empty".into(),
                context: Some("render_title".into()),
            });
        }

        debug!(session = %self.session, title = text, "Rendering title");
        self.surface.emit(RenderEvent::Title(text.to_owned()))
    }

    /// Renders the static content block. Repeated calls emit identical events
    /// and leave the session state untouched.
    ///
    /// # Errors
    /// * [`ShellError::Ordering`] before [`Self::configure`].
    /// * [`ShellError::Surface`] if the surface rejects the event.
    pub fn render_static_content(&mut self, content: &StaticContent) -> Result<(), ShellError> {
        self.ensure_configured("render_static_content")?;

        debug!(session = %self.session, bytes = content.as_str().len(), "Rendering static content");
        self.surface.emit(RenderEvent::StaticContent(content.clone()))
    }

    /// Runs a full pass: configure, heading, content.
    ///
    /// # Errors
    /// Propagates the first failing step.
    pub fn render_pass(
        &mut self,
        page: &PageConfig,
        heading: &str,
        content: &StaticContent,
    ) -> Result<(), ShellError> {
        self.configure(page)?;
        self.render_title(heading)?;
        self.render_static_content(content)
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        matches!(self.state, ShellState::Configured(_))
    }

    #[must_use]
    pub const fn state(&self) -> &ShellState {
        &self.state
    }

    #[must_use]
    pub const fn page(&self) -> Option<&ResolvedPage> {
        match &self.state {
            ShellState::Configured(page) => Some(page),
            ShellState::Unconfigured => None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &str {
        &self.session
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Ends the session and hands back the surface with everything rendered into it.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn ensure_configured(&self, operation: &'static str) -> Result<(), ShellError> {
        if self.is_configured() {
            Ok(())
        } else {
            warn!(session = %self.session, operation, "Render call before configuration");
            Err(ShellError::ordering(operation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use std::io;

    /// Surface whose sink is broken.
    #[derive(Debug, Default)]
    struct BrokenSurface;

    impl DisplaySurface for BrokenSurface {
        fn emit(&mut self, _event: RenderEvent) -> Result<(), ShellError> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away").into())
        }
    }

    #[test]
    fn configure_moves_to_configured() {
        let mut shell = Bootstrapper::new(RecordingSurface::default()).with_session("s-1");
        assert_eq!(shell.state(), &ShellState::Unconfigured);

        shell.configure(&PageConfig::default()).unwrap();
        assert_eq!(shell.page().map(|p| p.title.as_str()), Some("Multi-Modal RAG"));
        assert!(shell.is_configured());
        assert_eq!(shell.session(), "s-1");
        assert_eq!(shell.surface().events().len(), 1);
    }

    #[test]
    fn invalid_configuration_keeps_session_unconfigured() {
        let mut shell = Bootstrapper::new(RecordingSurface::default());
        let page = PageConfig { title: String::new(), ..PageConfig::default() };

        assert!(matches!(shell.configure(&page), Err(ShellError::Configuration { .. })));
        assert!(!shell.is_configured());
        assert!(shell.surface().events().is_empty());

        shell.configure(&PageConfig::default()).expect("a later valid configure still succeeds");
    }

    #[test]
    fn empty_heading_is_rejected_after_configure() {
        let mut shell = Bootstrapper::new(RecordingSurface::default());
        assert!(matches!(shell.render_title(""), Err(ShellError::Ordering { .. })));

        shell.configure(&PageConfig::default()).unwrap();
        let err = shell.render_title("   ").unwrap_err();
        assert!(matches!(err, ShellError::Configuration { .. }));
        assert_eq!(err.context_note(), Some("render_title"));
    }

    #[test]
    fn surface_failure_is_reported_and_state_unchanged() {
        let mut shell = Bootstrapper::new(BrokenSurface);
        let err = shell.configure(&PageConfig::default()).unwrap_err();
        assert!(matches!(err, ShellError::Surface { .. }));
        assert!(!shell.is_configured());
    }

    #[test]
    fn render_pass_emits_three_events_in_order() {
        let mut shell = Bootstrapper::new(RecordingSurface::default());
        shell
            .render_pass(&PageConfig::default(), "Heading", &StaticContent::new("Body"))
            .unwrap();

        let kinds: Vec<_> = shell.into_surface().events().iter().map(RenderEvent::kind).collect();
        assert_eq!(kinds, ["page_configured", "title", "static_content"]);
    }
}

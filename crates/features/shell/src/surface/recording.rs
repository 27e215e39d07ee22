use super::DisplaySurface;
use crate::error::ShellError;
use crate::event::RenderEvent;
use mmrag_domain::page::PageIcon;

/// Keeps every event in order. Used by tests and by the `events` output of the
/// renderer CLI.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    events: Vec<RenderEvent>,
    icon_filter: fn(&PageIcon) -> bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self { events: Vec::new(), icon_filter: |_| true }
    }
}

impl RecordingSurface {
    /// A recorder that only recognizes icons accepted by `filter`.
    #[must_use]
    pub fn with_icon_filter(filter: fn(&PageIcon) -> bool) -> Self {
        Self { events: Vec::new(), icon_filter: filter }
    }

    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<RenderEvent> {
        self.events
    }
}

impl DisplaySurface for RecordingSurface {
    fn recognizes_icon(&self, icon: &PageIcon) -> bool {
        (self.icon_filter)(icon)
    }

    fn emit(&mut self, event: RenderEvent) -> Result<(), ShellError> {
        self.events.push(event);
        Ok(())
    }
}

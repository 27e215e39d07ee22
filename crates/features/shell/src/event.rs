use mmrag_domain::content::StaticContent;
use mmrag_domain::page::ResolvedPage;
use serde::Serialize;

/// One display call delivered to a surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum RenderEvent {
    PageConfigured(ResolvedPage),
    Title(String),
    StaticContent(StaticContent),
}

impl RenderEvent {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PageConfigured(_) => "page_configured",
            Self::Title(_) => "title",
            Self::StaticContent(_) => "static_content",
        }
    }
}

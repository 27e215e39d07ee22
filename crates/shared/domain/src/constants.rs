//! Shared literals: defaults of the Multi-Modal RAG page and `OpenAPI` tags.

pub const SYSTEM_TAG: &str = "System";
pub const PAGE_TAG: &str = "Page";
pub const QA_TAG: &str = "Question Answering";

pub const DEFAULT_PAGE_TITLE: &str = "Multi-Modal RAG";
pub const DEFAULT_PAGE_ICON: &str = ":red_circle:";
pub const DEFAULT_HEADING: &str = "Multi-Modal Retrieval-Augmented Generation (RAG)";
pub const DEFAULT_HELP_URL: &str = "https://www.github.com/Ayushmaan06";
pub const DEFAULT_BUG_URL: &str = "https://www.github.com/Ayushmaan06";
pub const DEFAULT_ABOUT: &str = "# This is a header. This is an *extremely* cool app!";

pub const DEFAULT_CONFIG_FILE: &str = "mmrag";
pub const ENV_PREFIX: &str = "MMRAG";

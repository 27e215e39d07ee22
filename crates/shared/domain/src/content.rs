use serde::Serialize;
use std::borrow::Cow;

/// Built-in explanation of the Multi-Modal RAG features.
const MULTI_MODAL_OVERVIEW: &str = r"
    **Multi-Modal RAG** stands for **Multi-Modal Retrieval-Augmented Generation**. It's a process that allows you to ask questions about different types of media, such as  images, or documents, and get answers powered by artificial intelligence.

    In this app, you can interact with the following features:

    1. **Image Question Answering**: Upload an image, and the app will describe it. You can ask questions about the contents of the image.
    2. **Document Question Answering**: Upload a document (PDF, Word, etc.), and the app will extract the relevant information to answer your questions.

    Here's how it works:

    - **Image QA**: Upload an image, and the app will analyze the image, describing its contents. You can then ask questions about what’s in the image.

    - **Document QA**: Upload a document (like a PDF or Word file). The app extracts key information from the document to help answer your questions.

    Each feature uses a combination of AI models and sophisticated algorithms to give you the best possible answers.
";

/// Immutable markdown block shown under the page heading.
///
/// Text is normalized on construction: surrounding blank lines are dropped and
/// the indentation shared by all non-blank lines is removed, so indented
/// literals render as paragraphs instead of code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StaticContent(Cow<'static, str>);

impl StaticContent {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(normalize(text.into()))
    }

    /// The Image QA / Document QA overview shipped with the application.
    #[must_use]
    pub fn multi_modal_overview() -> Self {
        Self::new(MULTI_MODAL_OVERVIEW)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StaticContent {
    fn default() -> Self {
        Self::multi_modal_overview()
    }
}

fn normalize(text: Cow<'static, str>) -> Cow<'static, str> {
    match dedent(&text) {
        Some(rewritten) => Cow::Owned(rewritten),
        None => text,
    }
}

/// Returns `None` when `text` is already normalized.
fn dedent(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return (!text.is_empty()).then(String::new);
    };
    let body = &lines[first..=last];

    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| &l[..l.len() - l.trim_start_matches([' ', '\t']).len()])
        .reduce(common_prefix)
        .map_or(0, str::len);

    if indent == 0 && first == 0 && last + 1 == lines.len() && !text.ends_with('\n') {
        return None;
    }

    let dedented: Vec<&str> =
        body.iter().map(|l| if l.trim().is_empty() { "" } else { &l[indent..] }).collect();
    Some(dedented.join("\n"))
}

/// Longest shared prefix of two whitespace runs; tabs and spaces never match.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count();
    &a[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedents_and_trims_blank_edges() {
        let content = StaticContent::new("\n    # Title\n\n      nested\n    tail\n   \n");
        assert_eq!(content.as_str(), "# Title\n\n  nested\ntail");
    }

    #[test]
    fn only_an_identical_prefix_is_removed() {
        let mixed = StaticContent::new("\tfirst\n    second");
        assert_eq!(mixed.as_str(), "\tfirst\n    second");

        let shared = StaticContent::new("\t  one\n\t    two\n\t three");
        assert_eq!(shared.as_str(), " one\n   two\nthree");
    }

    #[test]
    fn keeps_flush_text_borrowed() {
        let content = StaticContent::new("already flush");
        assert!(matches!(content.0, Cow::Borrowed(_)));
        assert_eq!(content.as_str(), "already flush");
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(StaticContent::new("  \n\t\n").is_empty());
    }

    #[test]
    fn overview_mentions_both_features() {
        let overview = StaticContent::multi_modal_overview();
        assert!(overview.as_str().starts_with("**Multi-Modal RAG**"));
        assert!(overview.as_str().contains("**Image QA**"));
        assert!(overview.as_str().contains("**Document QA**"));
        assert!(!overview.as_str().lines().any(|l| l.starts_with("    ")));
    }
}

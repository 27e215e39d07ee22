use super::{DisplaySurface, shortcode_glyph};
use crate::error::ShellError;
use crate::event::RenderEvent;
use mmrag_domain::page::{MenuItem, PageIcon, ResolvedPage};
use pulldown_cmark::{Event, Options, Parser, html};
use std::fmt::Write as _;

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#262730}\
header.menu{display:flex;gap:1rem;justify-content:flex-end;padding:.5rem 1rem}\
aside.sidebar{position:fixed;left:0;top:0;bottom:0;width:16rem;background:#f0f2f6}\
body[data-sidebar=collapsed] aside.sidebar{display:none}\
body[data-sidebar=expanded] main{margin-left:16rem}\
main{padding:1rem 2rem}\
body.layout-centered main{max-width:46rem;margin-inline:auto}";

/// Renders a session into a standalone HTML document.
///
/// Markdown is rendered with `CommonMark` rules. Raw HTML inside markdown is
/// shown as text, never passed through.
#[derive(Debug, Default, Clone)]
pub struct HtmlSurface {
    page: Option<ResolvedPage>,
    body: String,
}

impl HtmlSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full document, or `None` while the page is unconfigured.
    #[must_use]
    pub fn document(&self) -> Option<String> {
        let page = self.page.as_ref()?;
        let mut doc = String::with_capacity(self.body.len() + 2048);

        doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        doc.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(doc, "<title>{}</title>", escape(&page.title));
        if let Some(glyph) = icon_glyph(&page.icon) {
            let _ = writeln!(doc, "<link rel=\"icon\" href=\"{}\">", favicon_uri(glyph));
        }
        let _ = writeln!(doc, "<style>{STYLE}</style>\n</head>");
        let _ = writeln!(
            doc,
            "<body class=\"layout-{}\" data-sidebar=\"{}\">",
            page.layout.as_str(),
            page.sidebar_state.as_str()
        );
        push_menu(&mut doc, page);
        doc.push_str("<aside class=\"sidebar\"></aside>\n<main>\n");
        doc.push_str(&self.body);
        doc.push_str("</main>\n</body>\n</html>\n");
        Some(doc)
    }

    /// The rendered `<main>` content only.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub const fn page(&self) -> Option<&ResolvedPage> {
        self.page.as_ref()
    }
}

impl DisplaySurface for HtmlSurface {
    fn recognizes_icon(&self, icon: &PageIcon) -> bool {
        match icon {
            PageIcon::Shortcode(name) => shortcode_glyph(name).is_some(),
            PageIcon::Material(_) | PageIcon::Glyph(_) => true,
        }
    }

    fn emit(&mut self, event: RenderEvent) -> Result<(), ShellError> {
        match event {
            RenderEvent::PageConfigured(page) => self.page = Some(page),
            RenderEvent::Title(text) => {
                let _ = writeln!(self.body, "<h1>{}</h1>", escape(&text));
            },
            RenderEvent::StaticContent(content) => {
                self.body.push_str("<section class=\"static-content\">\n");
                push_markdown(&mut self.body, content.as_str());
                self.body.push_str("</section>\n");
            },
        }
        Ok(())
    }
}

fn push_menu(doc: &mut String, page: &ResolvedPage) {
    doc.push_str("<header class=\"menu\">\n");
    for item in MenuItem::ALL {
        let Some(value) = page.menu_entry(item) else { continue };
        if item.is_link() {
            let _ = writeln!(doc, "<a href=\"{}\">{}</a>", escape(value), item.label());
        } else {
            let _ = writeln!(doc, "<details><summary>{}</summary>", item.label());
            push_markdown(doc, value);
            doc.push_str("</details>\n");
        }
    }
    doc.push_str("</header>\n");
}

fn push_markdown(out: &mut String, text: &str) {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    html::push_html(out, events);
}

fn icon_glyph(icon: &PageIcon) -> Option<&str> {
    match icon {
        PageIcon::Shortcode(name) => shortcode_glyph(name),
        PageIcon::Glyph(glyph) => Some(glyph),
        PageIcon::Material(_) => None,
    }
}

/// An SVG favicon showing `glyph`, as a `data:` URI.
fn favicon_uri(glyph: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'>\
         <text y='.9em' font-size='90'>{}</text></svg>",
        escape(glyph)
    );
    let mut uri = String::from("data:image/svg+xml,");
    for c in svg.chars() {
        match c {
            '%' => uri.push_str("%25"),
            '#' => uri.push_str("%23"),
            '<' => uri.push_str("%3C"),
            '>' => uri.push_str("%3E"),
            '&' => uri.push_str("%26"),
            '"' => uri.push_str("%22"),
            c => uri.push(c),
        }
    }
    uri
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bootstrapper;
    use mmrag_domain::content::StaticContent;
    use mmrag_domain::page::{Layout, PageConfig, SidebarState};

    fn rendered(page: &PageConfig, heading: &str, content: &str) -> String {
        let mut shell = Bootstrapper::new(HtmlSurface::new());
        shell.render_pass(page, heading, &StaticContent::new(content.to_owned())).unwrap();
        shell.into_surface().document().unwrap()
    }

    #[test]
    fn document_is_absent_until_configured() {
        assert!(HtmlSurface::new().document().is_none());
    }

    #[test]
    fn default_page_renders_title_menu_and_content() {
        let doc = rendered(&PageConfig::default(), "Multi-Modal RAG", "**bold** text");

        assert!(doc.contains("<title>Multi-Modal RAG</title>"));
        assert!(doc.contains("class=\"layout-wide\" data-sidebar=\"expanded\""));
        assert!(doc.contains("<a href=\"https://www.github.com/Ayushmaan06\">Get help</a>"));
        assert!(doc.contains("<a href=\"https://www.github.com/Ayushmaan06\">Report a bug</a>"));
        assert!(doc.contains("<summary>About</summary>"));
        assert!(doc.contains("<h1>Multi-Modal RAG</h1>"));
        assert!(doc.contains("<strong>bold</strong>"));
        assert!(doc.contains("rel=\"icon\""));
    }

    #[test]
    fn layout_and_sidebar_are_reflected() {
        let page = PageConfig {
            layout: Layout::Centered,
            sidebar_state: SidebarState::Collapsed,
            ..PageConfig::default()
        };
        let doc = rendered(&page, "T", "x");
        assert!(doc.contains("class=\"layout-centered\" data-sidebar=\"collapsed\""));
    }

    #[test]
    fn raw_html_is_escaped_everywhere() {
        let page = PageConfig { title: "<script>".into(), ..PageConfig::default() };
        let doc = rendered(&page, "<b>heading</b>", "<img src=x onerror=alert(1)>");

        assert!(!doc.contains("<script>"));
        assert!(!doc.contains("<b>heading"));
        assert!(!doc.contains("<img"));
        assert!(doc.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn unknown_shortcode_is_not_recognized() {
        let surface = HtmlSurface::new();
        assert!(surface.recognizes_icon(&PageIcon::Shortcode("red_circle".into())));
        assert!(!surface.recognizes_icon(&PageIcon::Shortcode("no_such_icon".into())));
        assert!(surface.recognizes_icon(&PageIcon::Material("home".into())));
    }

    #[test]
    fn common_shortcodes_configure_the_page() {
        for icon in [":smile:", ":tada:", ":bar_chart:", ":thumbsup:"] {
            let page = PageConfig { icon: icon.into(), ..PageConfig::default() };
            let doc = rendered(&page, "T", "x");
            assert!(doc.contains("rel=\"icon\""), "{icon}");
        }
    }

    #[test]
    fn non_emoji_text_is_not_an_icon() {
        for icon in ["é", "中文"] {
            let page = PageConfig { icon: icon.into(), ..PageConfig::default() };
            let mut shell = Bootstrapper::new(HtmlSurface::new());
            let err = shell.configure(&page).unwrap_err();
            assert_eq!(err.context_note(), Some("icon"));
            assert!(!shell.is_configured());
        }
    }

    #[test]
    fn favicon_uri_has_no_raw_markup() {
        let uri = favicon_uri("🔴");
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(uri.contains("🔴"));
        assert!(!uri.contains('<'));
    }
}

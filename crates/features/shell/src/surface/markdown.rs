use super::DisplaySurface;
use crate::error::{ShellError, ShellErrorExt};
use crate::event::RenderEvent;
use mmrag_domain::page::{MenuItem, ResolvedPage};
use std::io::Write;

/// Writes a session as a markdown document with a YAML front matter block
/// describing the page.
#[derive(Debug)]
pub struct MarkdownSurface<W> {
    out: W,
}

impl<W: Write> MarkdownSurface<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_front_matter(&mut self, page: &ResolvedPage) -> std::io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "---")?;
        writeln!(out, "title: {}", quote(&page.title))?;
        writeln!(out, "icon: {}", quote(&page.icon.to_string()))?;
        writeln!(out, "layout: {}", page.layout.as_str())?;
        writeln!(out, "initial_sidebar_state: {}", page.sidebar_state.as_str())?;
        if !page.menu.is_empty() {
            writeln!(out, "menu_items:")?;
            for item in MenuItem::ALL {
                if let Some(value) = page.menu_entry(item) {
                    writeln!(out, "  {}: {}", item.key(), quote(value))?;
                }
            }
        }
        writeln!(out, "---")?;
        writeln!(out)
    }
}

impl<W: Write> DisplaySurface for MarkdownSurface<W> {
    fn emit(&mut self, event: RenderEvent) -> Result<(), ShellError> {
        match &event {
            RenderEvent::PageConfigured(page) => self.write_front_matter(page),
            RenderEvent::Title(text) => writeln!(self.out, "# {text}\n"),
            RenderEvent::StaticContent(content) => writeln!(self.out, "{}\n", content.as_str()),
        }
        .and_then(|()| self.out.flush())
        .context(event.kind())
    }
}

/// Double-quoted YAML scalar.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bootstrapper;
    use mmrag_domain::content::StaticContent;
    use mmrag_domain::page::PageConfig;
    use std::io;

    #[test]
    fn writes_front_matter_heading_and_content() {
        let mut shell = Bootstrapper::new(MarkdownSurface::new(Vec::new()));
        shell.render_pass(&PageConfig::default(), "Heading", &StaticContent::new("Body")).unwrap();

        let text = String::from_utf8(shell.into_surface().into_inner()).unwrap();
        assert!(text.starts_with("---\ntitle: \"Multi-Modal RAG\"\nicon: \":red_circle:\"\n"));
        assert!(text.contains("layout: wide\ninitial_sidebar_state: expanded\n"));
        assert!(text.contains("  help: \"https://www.github.com/Ayushmaan06\"\n"));
        assert!(text.ends_with("---\n\n# Heading\n\nBody\n\n"));
    }

    #[test]
    fn quotes_escape_yaml_specials() {
        assert_eq!(quote("a \"b\"\nc\\"), r#""a \"b\"\nc\\""#);
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_failure_becomes_surface_error() {
        let mut surface = MarkdownSurface::new(FullDisk);
        let err = surface.emit(RenderEvent::Title("x".into())).unwrap_err();
        assert!(matches!(err, ShellError::Surface { .. }));
        assert_eq!(err.context_note(), Some("title"));
    }
}

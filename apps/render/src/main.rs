mod args;

use crate::args::{Cli, Format};
use anyhow::{Context, Result};
use clap::Parser;
use mmrag::domain::config::AppConfig;
use mmrag::kernel::config::{load_app_config, load_content};
use mmrag::render_session;
use mmrag::shell::{HtmlSurface, MarkdownSurface, RecordingSurface};
use mmrag_logger::Logger;
use std::fs;
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = load_app_config(cli.config.as_deref()).context("Configuration is malformed")?;
    let _log = init_logger(&cfg)?;

    let content = load_content(&cfg).context("Failed to load static content")?;
    let session = cli.session.clone();

    let output = match cli.format {
        Format::Html => render_session(&cfg, &content, HtmlSurface::new(), session)?
            .document()
            .context("render pass finished without a page")?,
        Format::Markdown => {
            let bytes = render_session(&cfg, &content, MarkdownSurface::new(Vec::new()), session)?
                .into_inner();
            String::from_utf8(bytes).context("markdown output is not UTF-8")?
        },
        Format::Events => {
            let events =
                render_session(&cfg, &content, RecordingSurface::default(), session)?.into_events();
            serde_json::to_string_pretty(&events)? + "\n"
        },
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = output.len(), "Render pass written");
        },
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        },
    }

    Ok(())
}

/// Console logging goes to stderr so rendered output on stdout stays clean.
fn init_logger(cfg: &AppConfig) -> Result<Logger> {
    Ok(Logger::builder().name(env!("CARGO_PKG_NAME")).from_config(&cfg.log)?.init()?)
}

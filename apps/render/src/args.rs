//! Command-line arguments of the renderer.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mmrag-render")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Runs one render pass of the Multi-Modal RAG shell and writes the result")]
pub(crate) struct Cli {
    /// Configuration file; `mmrag.toml` in the working directory is used when present
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Session id used in log records
    #[arg(long, default_value = "cli")]
    pub session: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Standalone HTML document
    Html,
    /// Markdown with YAML front matter
    Markdown,
    /// The display calls of the pass, as JSON
    Events,
}

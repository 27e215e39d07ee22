use crate::constants::DEFAULT_HEADING;
use crate::page::PageConfig;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration shared by the hosts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub page: PageConfig,
    /// Heading rendered above the static content.
    pub heading: String,
    /// Markdown file replacing the built-in overview text.
    pub content_path: Option<PathBuf>,
    pub log: LogConfig,
}

impl Default for AppConfigInner {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            page: PageConfig::default(),
            heading: DEFAULT_HEADING.to_owned(),
            content_path: None,
            log: LogConfig::default(),
        }
    }
}

/// Thin Arc-wrapped config for inexpensive cloning into request handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 8501, ssl: None }
    }
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Logging settings consumed by the hosts when building their logger.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Explicit filter directive; overrides `RUST_LOG` when set.
    pub directive: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub dir: Option<PathBuf>,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directive: None, dir: None, json: false }
    }
}

//! # Multi-Modal RAG Server
//!
//! Serves the application shell over HTTP with `Axum`: every request to `/` is a
//! new session whose render pass is returned as an HTML document.
//!
//! ## Example
//! ```no_run
//! use mmrag_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8501)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod error;
mod pages;
mod qa;
mod router;

pub use error::{ApiError, ApiErrorExt, ErrorBody};

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use mmrag::assistant::MultiModalEngine;
use mmrag::domain::config::{AppConfig, LogConfig};
use mmrag::domain::content::StaticContent;
use mmrag::kernel::config::load_content;
use mmrag::kernel::server::ApiState;
use mmrag::shell::{HtmlSurface, resolve_page};
use mmrag_logger::Logger;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Builds the HTTP application for `state`. Exposed for in-process tests.
pub fn app(state: ApiState) -> Router {
    router::init(state)
}

/// Installs the global logger described by `cfg`.
///
/// # Errors
/// Fails on an unknown level name, an invalid directive, or when a logger is
/// already installed.
pub fn init_logger(name: &str, cfg: &LogConfig) -> Result<Logger> {
    Ok(Logger::builder().name(name).from_config(cfg)?.init()?)
}

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
    content: Option<StaticContent>,
    engine: Option<Arc<dyn MultiModalEngine>>,
}

impl std::fmt::Debug for ServerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerBuilder")
            .field("cfg", &self.cfg)
            .field("content", &self.content)
            .field("engine", &self.engine.is_some())
            .finish()
    }
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Static content to render instead of the configured one.
    pub fn content(mut self, content: StaticContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Multi-modal engine answering the QA endpoints.
    pub fn engine(mut self, engine: Arc<dyn MultiModalEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    fn validate_ssl_config(&self) -> Result<()> {
        if let Some(ssl) = &self.cfg.server.ssl {
            if !ssl.cert.exists() {
                anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
            }
            if !ssl.key.exists() {
                anyhow::bail!("SSL key not found at: {}", ssl.key.display());
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let metadata = ssl.key.metadata()?;
                if metadata.permissions().mode() & 0o077 != 0 {
                    tracing::warn!(
                        "SECURITY: SSL Private Key {} has insecure permissions (should be 600)",
                        ssl.key.display()
                    );
                }
            }
        }
        Ok(())
    }

    /// Consumes the builder and prepares the shared state.
    ///
    /// The page configuration is validated up front so a bad config file fails at
    /// startup instead of on every request.
    ///
    /// # Errors
    /// Returns an error if:
    /// * SSL certificate/key files are missing
    /// * the static content file cannot be read
    /// * the page configuration is invalid
    pub fn build(self) -> Result<Server> {
        self.validate_ssl_config()?;

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, "Initializing server");

        Context::context(
            resolve_page(&self.cfg.page, &HtmlSurface::new()),
            "Invalid page configuration",
        )?;

        let content = match self.content {
            Some(content) => content,
            None => load_content(&self.cfg).context("Failed to load static content")?,
        };

        let mut state = ApiState::builder().config(self.cfg).content(content);
        if let Some(engine) = self.engine {
            state = state.engine(engine);
        }
        let state = state.build().context("Failed to finalize API state")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address
    /// or if SSL/TLS setup fails.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        info!(address = %address, ssl = cfg.server.ssl.is_some(), "Starting server");

        let app = router::init(self.state);

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(30)));
        });

        if let Some(ssl_config) = &cfg.server.ssl {
            info!("Starting HTTPS server on https://{address}");

            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                &ssl_config.cert,
                &ssl_config.key,
            )
            .await
            .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        } else {
            info!("Starting HTTP server on http://{address}");

            axum_server::bind(address)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }

    /// The router this server would run, for in-process use.
    pub fn into_app(self) -> Router {
        router::init(self.state)
    }
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}

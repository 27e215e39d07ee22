//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the shell hosts.
//!
//! Console output always goes to **stderr** so that hosts writing a rendered
//! page to stdout (the renderer CLI) keep their output clean. An optional
//! rolling file layer writes plain text or JSON through a non-blocking worker.
//! `RUST_LOG` overrides the configured level unless an explicit directive is set
//! with [`LoggerBuilder::directive`].
//!
//! ```rust
//! use mmrag_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("mmrag-doc")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use mmrag_domain::config::LogConfig;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerSettings {
    console: bool,
    dir: Option<PathBuf>,
    level: LevelFilter,
    directive: Option<String>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            console: true,
            dir: None,
            level: LevelFilter::INFO,
            directive: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

/// Builder state before a name has been set.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once the service name is known.
#[derive(Debug)]
pub struct Named(String);

/// Configures and installs the global subscriber. A name is required before
/// [`LoggerBuilder::init`] becomes available; it prefixes rolling log files.
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed> {
    settings: LoggerSettings,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Sets the service name.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()) }
    }
}

impl LoggerBuilder<Named> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Parses a level name such as `"debug"` or `"warn"`.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn level_name(self, level: &str) -> Result<Self, LoggerError> {
        let parsed = LevelFilter::from_str(level.trim()).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Unknown log level '{level}': {e}").into(),
                context: None,
            }
        })?;
        Ok(self.level(parsed))
    }

    /// Applies the `[log]` section of the application config: level, optional
    /// directive and file directory, and the JSON switch.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn from_config(self, cfg: &LogConfig) -> Result<Self, LoggerError> {
        let mut builder = self.level_name(&cfg.level)?.json(cfg.json);
        builder.settings.directive.clone_from(&cfg.directive);
        builder.settings.dir.clone_from(&cfg.dir);
        Ok(builder)
    }

    /// Explicit filter directive (e.g. `mmrag_shell=debug,tower_http=info`).
    /// When set, `RUST_LOG` is ignored.
    #[must_use]
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.settings.directive = Some(directive.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Enables the rolling file layer in `dir`.
    #[must_use]
    pub fn file(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings.dir = Some(dir.into());
        self
    }

    /// Writes file records as JSON lines. Has no effect without [`Self::file`].
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the process; dropping
    /// it stops the file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a zero
    ///   `max_files`, a bad directive, or when no layer is enabled.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name) } = self;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers = Vec::new();

        if settings.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = match &settings.dir {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .context(format!("Failed to create log directory {}", dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(settings.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(settings.max_files)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if settings.json {
                    file_layer.json().boxed()
                } else {
                    file_layer.boxed()
                });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled; enable console or file output".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, file = settings.dir.is_some(), "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new builder with console output at `INFO`.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: Unnamed }
    }

    /// `true` when a file layer is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

fn validate(settings: &LoggerSettings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.directive {
        Some(directive) => builder.parse(directive).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid filter directive '{directive}': {e}").into(),
                context: None,
            }
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("mmrag-test");
        assert!(builder.settings.console);
        assert!(!builder.settings.json);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.max_files, DEFAULT_MAX_FILES);
        assert!(builder.settings.dir.is_none());
    }

    #[test]
    fn level_name_parses_known_levels() {
        let builder = Logger::builder().name("mmrag-test").level_name("Debug").unwrap();
        assert_eq!(builder.settings.level, LevelFilter::DEBUG);

        let err = Logger::builder().name("mmrag-test").level_name("chatty").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn from_config_applies_the_log_section() {
        let cfg = LogConfig {
            level: "warn".to_owned(),
            directive: Some("mmrag_shell=debug".to_owned()),
            dir: Some(PathBuf::from("logs")),
            json: true,
        };
        let builder = Logger::builder().name("mmrag-test").from_config(&cfg).unwrap();
        assert_eq!(builder.settings.level, LevelFilter::WARN);
        assert_eq!(builder.settings.directive.as_deref(), Some("mmrag_shell=debug"));
        assert_eq!(builder.settings.dir, Some(PathBuf::from("logs")));
        assert!(builder.settings.json);

        let builder = Logger::builder().name("mmrag-test").from_config(&LogConfig::default()).unwrap();
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert!(builder.settings.directive.is_none());
        assert!(builder.settings.dir.is_none());

        let bad = LogConfig { level: "chatty".to_owned(), ..LogConfig::default() };
        assert!(Logger::builder().name("mmrag-test").from_config(&bad).is_err());
    }

    #[test]
    #[serial]
    fn rejects_empty_name_and_zero_files() {
        let err = Logger::builder().name("   ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("mmrag-test").max_files(0).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn rejects_configuration_without_layers() {
        let err = Logger::builder().name("mmrag-test").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn rejects_bad_directive() {
        let err = Logger::builder().name("mmrag-test").directive("mmrag=loudest").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}

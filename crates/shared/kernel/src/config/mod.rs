use config::{Config, Environment, File};
use mmrag_domain::config::AppConfig;
use mmrag_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use mmrag_domain::content::StaticContent;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[mmrag_derive::mmrag_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Content error{}: {source}", format_context(.context))]
    Content { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// Loads a configuration structure from a file layered with environment overrides.
///
/// 1. **Base file**: `path` when given (it must exist), otherwise `mmrag.{toml,yaml,json,...}`
///    in the working directory when present.
/// 2. **Environment**: variables prefixed with `MMRAG__`; nested keys use a double
///    underscore (`MMRAG__SERVER__PORT=8080` maps to `server.port`).
///
/// Fields missing from both layers take the defaults of `T`.
///
/// # Errors
/// Fails when an explicitly given file is missing, a source cannot be parsed, or the
/// merged values do not match `T`.
///
/// # Example
/// ```rust
/// use mmrag_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading configuration");

    let config = builder
        .build()
        .context("failed to build config")?
        .try_deserialize::<T>()
        .context("failed to deserialize config")?;

    Ok(config)
}

/// [`load_config`] for the application settings.
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}

/// Static content for the render pass: the file named by `content_path`, or the
/// built-in overview when none is configured.
///
/// # Errors
/// Returns [`ConfigError::Content`] when the file cannot be read.
pub fn load_content(config: &AppConfig) -> Result<StaticContent, ConfigError> {
    let Some(path) = &config.content_path else {
        return Ok(StaticContent::multi_modal_overview());
    };

    let text = std::fs::read_to_string(path).context(path.display().to_string())?;
    debug!(path = %path.display(), bytes = text.len(), "Static content loaded");
    Ok(StaticContent::new(text))
}

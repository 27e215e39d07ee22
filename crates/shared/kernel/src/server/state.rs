use axum::extract::FromRef;
use mmrag_assistant::{MultiModalEngine, UnavailableEngine};
use mmrag_domain::config::AppConfig;
use mmrag_domain::content::StaticContent;
use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

#[mmrag_derive::mmrag_error]
pub enum ApiStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Immutable data shared by all requests. Sessions never live here: every
/// request builds its own bootstrapper.
pub struct ApiStateInner {
    pub config: AppConfig,
    pub content: StaticContent,
    pub engine: Arc<dyn MultiModalEngine>,
}

impl fmt::Debug for ApiStateInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiStateInner")
            .field("config", &self.config)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for Arc<dyn MultiModalEngine> {
    fn from_ref(state: &ApiState) -> Self {
        Arc::clone(&state.inner.engine)
    }
}

#[derive(Default)]
pub struct ApiStateBuilder {
    config: Option<AppConfig>,
    content: Option<StaticContent>,
    engine: Option<Arc<dyn MultiModalEngine>>,
}

impl fmt::Debug for ApiStateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiStateBuilder")
            .field("config", &self.config)
            .field("content", &self.content)
            .field("engine", &self.engine.is_some())
            .finish()
    }
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn content(mut self, content: StaticContent) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn engine(mut self, engine: Arc<dyn MultiModalEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Content defaults to the built-in overview, the engine to [`UnavailableEngine`].
    ///
    /// # Errors
    /// Returns [`ApiStateError::Validation`] when no configuration was provided.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "AppConfig not provided".into(),
            context: None,
        })?;
        let content = self.content.unwrap_or_else(StaticContent::multi_modal_overview);
        let engine = self.engine.unwrap_or_else(|| Arc::new(UnavailableEngine));

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, content, engine }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_config_and_fills_defaults() {
        assert!(matches!(ApiState::builder().build(), Err(ApiStateError::Validation { .. })));

        let state = ApiState::builder().config(AppConfig::default()).build().unwrap();
        assert!(state.content.as_str().contains("Multi-Modal RAG"));
        assert_eq!(state.config.page.title, "Multi-Modal RAG");
    }
}

use std::borrow::Cow;

/// Failures of a render pass. None of them are retried; the host aborts the
/// current pass and reports the error.
#[mmrag_derive::mmrag_error]
pub enum ShellError {
    /// Invalid page configuration, or a second `configure` in the same session.
    #[error("Configuration error{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A render call arrived before the page was configured.
    #[error("Ordering error{}: {message}", format_context(.context))]
    Ordering { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The display surface could not accept the output.
    #[error("Display surface error{}: {source}", format_context(.context))]
    Surface { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl ShellError {
    pub(crate) fn ordering(operation: &'static str) -> Self {
        Self::Ordering {
            message: "the page must be configured before anything is rendered".into(),
            context: Some(operation.into()),
        }
    }
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mmrag::assistant::AssistantError;
use mmrag::shell::ShellError;
use mmrag_derive::api_model;
use std::borrow::Cow;
use tracing::{error, warn};

/// Error body returned by every JSON endpoint.
#[api_model]
pub struct ErrorBody {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable description
    pub message: String,
}

#[mmrag_derive::mmrag_error]
pub enum ApiError {
    #[error("Render error{}: {source}", format_context(.context))]
    Shell { source: ShellError, context: Option<Cow<'static, str>> },

    #[error("Assistant error{}: {source}", format_context(.context))]
    Assistant { source: AssistantError, context: Option<Cow<'static, str>> },

    #[error("Bad request{}: {message}", format_context(.context))]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Assistant { source: AssistantError::Unavailable { .. }, .. } => {
                StatusCode::NOT_IMPLEMENTED
            },
            Self::Assistant { source: AssistantError::InvalidInput { .. }, .. }
            | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Shell { .. }
            | Self::Assistant { source: AssistantError::Internal { .. }, .. }
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Shell { source: ShellError::Configuration { .. }, .. } => "configuration",
            Self::Shell { source: ShellError::Ordering { .. }, .. } => "ordering",
            Self::Shell { source: ShellError::Surface { .. }, .. } => "surface",
            Self::Assistant { source: AssistantError::Unavailable { .. }, .. } => "unavailable",
            Self::Assistant { source: AssistantError::InvalidInput { .. }, .. }
            | Self::BadRequest { .. } => "invalid_input",
            Self::Assistant { source: AssistantError::Internal { .. }, .. }
            | Self::Internal { .. } => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorBody { error: self.kind().to_owned(), message: self.to_string() };
        (status, Json(body)).into_response()
    }
}

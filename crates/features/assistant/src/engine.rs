use crate::error::AssistantError;
use async_trait::async_trait;
use tracing::debug;

/// Upper bound for one uploaded payload.
pub const MAX_PAYLOAD_BYTES: usize = 32 * 1024 * 1024;

/// The kind of media a question is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Document,
}

impl MediaKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
        }
    }
}

/// Answers questions about uploaded media.
///
/// Implementations are shared between requests, so they must be `Send + Sync`.
#[async_trait]
pub trait MultiModalEngine: Send + Sync {
    /// Describes or answers a question about an image.
    async fn answer_image_query(&self, image: &[u8], question: &str) -> Result<String, AssistantError>;

    /// Answers a question from the contents of a document (PDF, Word, ...).
    async fn answer_document_query(
        &self,
        document: &[u8],
        question: &str,
    ) -> Result<String, AssistantError>;
}

/// Rejects empty questions, empty payloads and payloads above
/// [`MAX_PAYLOAD_BYTES`].
///
/// # Errors
/// Returns [`AssistantError::InvalidInput`] with the media kind as context.
pub fn validate_query(kind: MediaKind, payload: &[u8], question: &str) -> Result<(), AssistantError> {
    let message = if question.trim().is_empty() {
        "question must not be empty"
    } else if payload.is_empty() {
        "uploaded file is empty"
    } else if payload.len() > MAX_PAYLOAD_BYTES {
        "uploaded file is too large"
    } else {
        return Ok(());
    };
    Err(AssistantError::InvalidInput { message: message.into(), context: Some(kind.as_str().into()) })
}

/// Engine used while no retrieval backend is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableEngine;

impl UnavailableEngine {
    fn unavailable(kind: MediaKind, payload: &[u8], question: &str) -> Result<String, AssistantError> {
        validate_query(kind, payload, question)?;
        debug!(kind = kind.as_str(), bytes = payload.len(), "Multi-modal query without an engine");
        Err(AssistantError::Unavailable {
            message: "no multi-modal engine is configured".into(),
            context: Some(kind.as_str().into()),
        })
    }
}

#[async_trait]
impl MultiModalEngine for UnavailableEngine {
    async fn answer_image_query(&self, image: &[u8], question: &str) -> Result<String, AssistantError> {
        Self::unavailable(MediaKind::Image, image, question)
    }

    async fn answer_document_query(
        &self,
        document: &[u8],
        question: &str,
    ) -> Result<String, AssistantError> {
        Self::unavailable(MediaKind::Document, document, question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_order() {
        let err = validate_query(MediaKind::Image, b"", " ").unwrap_err();
        assert!(err.to_string().contains("question must not be empty"));

        let err = validate_query(MediaKind::Document, b"", "what?").unwrap_err();
        assert!(matches!(err, AssistantError::InvalidInput { .. }));
        assert_eq!(err.context_note(), Some("document"));

        assert!(validate_query(MediaKind::Image, b"\x89PNG", "what?").is_ok());
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let payload = vec![0_u8; MAX_PAYLOAD_BYTES + 1];
        let err = validate_query(MediaKind::Document, &payload, "q").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}

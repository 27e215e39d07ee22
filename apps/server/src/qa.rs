use crate::error::{ApiError, ErrorBody};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use mmrag::assistant::{MediaKind, MultiModalEngine};
use mmrag::domain::constants::QA_TAG;
use mmrag_derive::{api_handler, api_model};
use std::sync::Arc;
use tracing::debug;

/// A question about an uploaded file.
#[api_model]
pub(crate) struct QaRequest {
    /// The question to answer
    question: String,
    /// File contents, base64 encoded
    data: String,
}

#[api_model]
pub(crate) struct QaResponse {
    /// Answer produced by the engine
    answer: String,
}

#[api_handler(
    post,
    path = "/api/qa/image",
    request_body = QaRequest,
    responses(
        (status = OK, description = "Answer about the image", body = QaResponse),
        (status = BAD_REQUEST, description = "Empty question or invalid upload", body = ErrorBody),
        (status = NOT_IMPLEMENTED, description = "No multi-modal engine configured", body = ErrorBody),
    ),
    tag = QA_TAG,
)]
pub(crate) async fn image_query_handler(
    State(engine): State<Arc<dyn MultiModalEngine>>,
    request: Result<Json<QaRequest>, JsonRejection>,
) -> Result<Json<QaResponse>, ApiError> {
    let (question, data) = decode(MediaKind::Image, request)?;
    let answer = engine.answer_image_query(&data, &question).await?;
    Ok(Json(QaResponse { answer }))
}

#[api_handler(
    post,
    path = "/api/qa/document",
    request_body = QaRequest,
    responses(
        (status = OK, description = "Answer from the document", body = QaResponse),
        (status = BAD_REQUEST, description = "Empty question or invalid upload", body = ErrorBody),
        (status = NOT_IMPLEMENTED, description = "No multi-modal engine configured", body = ErrorBody),
    ),
    tag = QA_TAG,
)]
pub(crate) async fn document_query_handler(
    State(engine): State<Arc<dyn MultiModalEngine>>,
    request: Result<Json<QaRequest>, JsonRejection>,
) -> Result<Json<QaResponse>, ApiError> {
    let (question, data) = decode(MediaKind::Document, request)?;
    let answer = engine.answer_document_query(&data, &question).await?;
    Ok(Json(QaResponse { answer }))
}

fn decode(
    kind: MediaKind,
    request: Result<Json<QaRequest>, JsonRejection>,
) -> Result<(String, Vec<u8>), ApiError> {
    let Json(QaRequest { question, data }) = request.map_err(|rejection| {
        ApiError::BadRequest { message: rejection.body_text().into(), context: Some("body".into()) }
    })?;
    let data = STANDARD.decode(data.trim()).map_err(|e| ApiError::BadRequest {
        message: format!("data is not valid base64: {e}").into(),
        context: Some("data".into()),
    })?;

    debug!(kind = kind.as_str(), bytes = data.len(), "Query received");
    Ok((question, data))
}

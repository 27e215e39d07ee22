use crate::{pages, qa};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use mmrag::assistant::MAX_PAYLOAD_BYTES;
use mmrag::kernel::server::{ApiState, system_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

/// Base64 inflates uploads by a third; leave room for the JSON envelope.
const MAX_BODY_BYTES: usize = MAX_PAYLOAD_BYTES / 3 * 4 + 64 * 1024;

#[derive(OpenApi)]
#[openapi(info(title = "Multi-Modal RAG", description = "Application shell and multi-modal QA endpoints"))]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .routes(routes!(pages::page_handler))
        .routes(routes!(pages::page_config_handler))
        .routes(routes!(qa::image_query_handler))
        .routes(routes!(qa::document_query_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes)
}

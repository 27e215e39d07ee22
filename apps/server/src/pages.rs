use crate::error::{ApiError, ErrorBody};
use axum::Json;
use axum::extract::State;
use axum::response::Html;
use mmrag::domain::constants::PAGE_TAG;
use mmrag::kernel::server::ApiState;
use mmrag::kernel::session_id;
use mmrag::render_session;
use mmrag::shell::{HtmlSurface, resolve_page};
use mmrag_derive::{api_handler, api_model};
use std::collections::BTreeMap;
use tracing::info;

/// The configured page as the web surface resolves it.
#[api_model]
pub(crate) struct PageView {
    /// Browser tab title
    title: String,
    /// Icon in symbolic form, e.g. `:red_circle:`
    icon: String,
    /// `expanded` or `collapsed`
    sidebar_state: String,
    /// `wide` or `centered`
    layout: String,
    /// Menu entries keyed by `help`, `bug`, `about`
    menu: BTreeMap<String, String>,
    /// Heading rendered above the static content
    heading: String,
}

#[api_handler(
    get,
    path = "/",
    responses(
        (status = OK, description = "One session's render pass as HTML", content_type = "text/html", body = String),
        (status = INTERNAL_SERVER_ERROR, description = "Invalid page configuration", body = ErrorBody),
    ),
    tag = PAGE_TAG,
)]
pub(crate) async fn page_handler(State(state): State<ApiState>) -> Result<Html<String>, ApiError> {
    let session = session_id!();
    let surface =
        render_session(&state.config, &state.content, HtmlSurface::new(), session.clone())?;
    let document = surface.document().ok_or("render pass finished without a page")?;

    info!(session = %session, bytes = document.len(), "Page served");
    Ok(Html(document))
}

#[api_handler(
    get,
    path = "/api/page",
    responses(
        (status = OK, description = "Resolved page configuration", body = PageView),
        (status = INTERNAL_SERVER_ERROR, description = "Invalid page configuration", body = ErrorBody),
    ),
    tag = PAGE_TAG,
)]
pub(crate) async fn page_config_handler(
    State(state): State<ApiState>,
) -> Result<Json<PageView>, ApiError> {
    let page = resolve_page(&state.config.page, &HtmlSurface::new())?;

    Ok(Json(PageView {
        title: page.title,
        icon: page.icon.to_string(),
        sidebar_state: page.sidebar_state.as_str().to_owned(),
        layout: page.layout.as_str().to_owned(),
        menu: page.menu.into_iter().map(|(item, value)| (item.key().to_owned(), value)).collect(),
        heading: state.config.heading.clone(),
    }))
}

// HTTP request handlers
use crate::domain::page::{PageLayout, Route, HOME_PATH};
use crate::presentation::app_state::AppState;
use crate::presentation::markup::render_shell_page;
use crate::presentation::session::run_session;
use axum::{
    extract::{ws::WebSocketUpgrade, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct LayoutQuery {
    pub path: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Layout for a path as JSON, without mounting anything
pub async fn page_layout(
    Query(query): Query<LayoutQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<PageLayout> {
    let path = query.path.as_deref().unwrap_or(HOME_PATH);
    Json(state.dashboard.render(path))
}

/// Upgrade to the live session socket
pub async fn live_session(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let dashboard = state.dashboard.clone();
    ws.on_upgrade(move |socket| run_session(socket, dashboard))
}

/// Shell page for any other path, with its content pre-rendered
pub async fn shell_page(uri: Uri, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let layout = state.dashboard.render(uri.path());
    let status = match layout.route {
        Route::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Html(render_shell_page(&layout)))
}

use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::router::AppState;
use crate::ports::outbound::DashboardRenderer;

/// Browser dashboard, rendered on the server from one live status read.
/// If the client goes away mid-request the read is dropped with the request.
pub async fn dashboard(State(state): State<AppState>) -> Response {
    let view = state.dashboard.execute().await;

    match state.renderer.render(&view) {
        Ok(page) => ([(CACHE_CONTROL, "no-store")], Html(page)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render dashboard");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render dashboard").into_response()
        }
    }
}

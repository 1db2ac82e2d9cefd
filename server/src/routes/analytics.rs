//! Analytics routes.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;

use super::{forward_auth, reflect};
use crate::state::AppState;

/// `GET /api/analytics/overview`: the aggregate metrics document.
pub async fn overview(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.get("/analytics/overview", &auth).await)
}

//! Moderation queue routes: content listing, detail, review decisions,
//! flagged items, and the admin user list.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use serde_json::Value;

use super::{forward_auth, reflect};
use crate::state::AppState;

/// `GET /api/admin/content`: the review queue.
pub async fn list_content(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.get("/admin/content", &auth).await)
}

/// `GET /api/admin/content/{id}`: one queued item.
pub async fn get_content(State(state): State<AppState>, Path(id): Path<String>, headers: HeaderMap) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.get(&format!("/admin/content/{id}"), &auth).await)
}

/// `POST /api/admin/review/{id}`: submit an approve/reject decision.
pub async fn submit_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.post(&format!("/admin/review/{id}"), Some(&body), &auth).await)
}

/// `GET /api/admin/flagged`: flagged items envelope.
pub async fn list_flagged(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.get("/admin/flagged", &auth).await)
}

/// `GET /api/admin/users`: users envelope.
pub async fn list_users(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.get("/admin/users", &auth).await)
}

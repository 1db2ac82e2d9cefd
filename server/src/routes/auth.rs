//! Auth routes: pass-through session endpoints.
//!
//! The backend owns credentials and sessions; these handlers forward the
//! request and reflect whatever it answers, cookies included.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use serde_json::Value;

use super::{forward_auth, reflect};
use crate::state::AppState;

/// `POST /api/auth/login`: forward credentials, reflect the session payload.
pub async fn login(State(state): State<AppState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.post("/auth/login", Some(&body), &auth).await)
}

/// `POST /api/auth/logout`.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.post("/auth/logout", None, &auth).await)
}

/// `GET /api/auth/me`: current session identity.
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = forward_auth(&headers);
    reflect(state.backend.get("/auth/me", &auth).await)
}

//! REST API helpers for the moderation console.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api` surface. Server-side (SSR): stubs returning
//! `None`/error since these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade to inline error text without crashing hydration. Every non-2xx
//! response surfaces as the same "request failed: {status}" message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContentItem, Decision, User};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn content_endpoint(id: &str) -> String {
    format!("/api/admin/content/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn review_endpoint(id: &str) -> String {
    format!("/api/admin/review/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn decision_payload(decision: Decision) -> serde_json::Value {
    serde_json::json!({ "action": decision.as_str() })
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login` and return the session payload.
///
/// Redirecting after a successful login is the caller's responsibility.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn login(email: &str, password: &str) -> Result<serde_json::Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = login_payload(email, password);
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the review queue from `/api/admin/content`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_queue() -> Result<Vec<ContentItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/content")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<ContentItem>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a single content item from `/api/admin/content/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_content(id: &str) -> Result<ContentItem, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = content_endpoint(id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<ContentItem>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Submit an approve/reject decision via `POST /api/admin/review/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn submit_decision(id: &str, decision: Decision) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = review_endpoint(id);
        let payload = decision_payload(decision);
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, decision);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct FlaggedResponse {
    #[serde(default)]
    items: Vec<ContentItem>,
}

/// Fetch flagged items from `/api/admin/flagged`, unwrapping the
/// `{"items": [...]}` envelope.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_flagged() -> Result<Vec<ContentItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/flagged")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        let body: FlaggedResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the analytics overview payload from `/api/analytics/overview`.
///
/// The payload stays untyped: the overview page pretty-prints it verbatim
/// and the chart page extracts what it understands.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_overview() -> Result<serde_json::Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/analytics/overview")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<User>,
}

/// Fetch the user list from `/api/admin/users`, unwrapping the
/// `{"users": [...]}` envelope.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/users")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        let body: UsersResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

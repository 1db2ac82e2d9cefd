//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the `/api` pass-through surface and Leptos SSR rendering under a
//! single Axum router. Every `/api` handler forwards its request to the
//! moderation backend and reflects the upstream response; pages are
//! server-rendered and hydrate in the browser.

pub mod analytics;
pub mod auth;
pub mod moderation;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::backend::{BackendError, ForwardAuth, Upstream};
use crate::state::AppState;

/// API routes shared by the SSR app and external tools.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/admin/content", get(moderation::list_content))
        .route("/api/admin/content/{id}", get(moderation::get_content))
        .route("/api/admin/review/{id}", post(moderation::submit_review))
        .route("/api/admin/flagged", get(moderation::list_flagged))
        .route("/api/admin/users", get(moderation::list_users))
        .route("/api/analytics/overview", get(analytics::overview))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Extract forwarded credential headers from an incoming request.
pub(crate) fn forward_auth(headers: &HeaderMap) -> ForwardAuth {
    ForwardAuth {
        cookie: header_string(headers, header::COOKIE),
        authorization: header_string(headers, header::AUTHORIZATION),
    }
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Reflect a backend pass-through result to the browser: upstream status and
/// JSON body verbatim (including `Set-Cookie`), 502 on transport failure.
pub(crate) fn reflect(result: Result<Upstream, BackendError>) -> Response {
    match result {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);
            let mut response = if upstream.body.is_null() {
                status.into_response()
            } else {
                (status, Json(upstream.body)).into_response()
            };
            for cookie in upstream.set_cookies {
                if let Ok(value) = HeaderValue::from_str(&cookie) {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
            }
            response
        }
        Err(BackendError::Status { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            if body.is_null() {
                status.into_response()
            } else {
                (status, Json(body)).into_response()
            }
        }
        Err(error) => {
            tracing::error!(error = %error, "moderation backend request failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Full application router: API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

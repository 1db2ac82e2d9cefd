use super::*;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// join_url
// =============================================================================

#[test]
fn join_url_appends_path_to_base() {
    assert_eq!(join_url("http://api.local", "/admin/content"), "http://api.local/admin/content");
}

#[test]
fn join_url_trims_trailing_slash() {
    assert_eq!(
        join_url("http://api.local/api/v1/", "/admin/content"),
        "http://api.local/api/v1/admin/content"
    );
}

// =============================================================================
// BackendConfig
// =============================================================================

#[test]
fn backend_config_reads_env_var() {
    let key = "MODERATION_API_URL";
    unsafe { std::env::set_var(key, "http://api.local") };
    let config = BackendConfig::from_env().unwrap();
    assert_eq!(config.base_url, "http://api.local");
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// Backend: behavior against a mock upstream
// =============================================================================

#[tokio::test]
async fn get_returns_parsed_json_unchanged_on_success() {
    let upstream = MockServer::start().await;
    let payload = json!([{"id": 1, "text": "first", "reason": "Spam"}]);
    Mock::given(method("GET"))
        .and(path("/admin/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&upstream)
        .await;

    let backend = Backend::new(upstream.uri());
    let response = backend.get("/admin/content", &ForwardAuth::default()).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, payload);
}

#[tokio::test]
async fn non_2xx_fails_with_status_and_body() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/content/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(&upstream)
        .await;

    let backend = Backend::new(upstream.uri());
    let error = backend.get("/admin/content/99", &ForwardAuth::default()).await.unwrap_err();

    match error {
        BackendError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, json!({"detail": "Not found"}));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn requests_always_carry_json_content_type() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "a@b.com"})))
        .expect(1)
        .mount(&upstream)
        .await;

    let backend = Backend::new(upstream.uri());
    let response = backend.get("/auth/me", &ForwardAuth::default()).await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn post_sends_json_body() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/review/42"))
        .and(body_json(json!({"action": "approve"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&upstream)
        .await;

    let backend = Backend::new(upstream.uri());
    let body = json!({"action": "approve"});
    let response = backend.post("/admin/review/42", Some(&body), &ForwardAuth::default()).await.unwrap();
    assert_eq!(response.body, json!({"status": "ok"}));
}

#[tokio::test]
async fn forwards_cookie_and_authorization_headers() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("cookie", "session=tok"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "a@b.com"})))
        .expect(1)
        .mount(&upstream)
        .await;

    let backend = Backend::new(upstream.uri());
    let auth = ForwardAuth {
        cookie: Some("session=tok".to_owned()),
        authorization: Some("Bearer abc".to_owned()),
    };
    let response = backend.get("/auth/me", &auth).await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn empty_success_body_becomes_null() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&upstream)
        .await;

    let backend = Backend::new(upstream.uri());
    let response = backend.post("/auth/logout", None, &ForwardAuth::default()).await.unwrap();
    assert_eq!(response.status, 204);
    assert_eq!(response.body, Value::Null);
}

#[tokio::test]
async fn upstream_set_cookie_headers_are_captured() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc; Path=/; HttpOnly")
                .set_body_json(json!({"ok": true})),
        )
        .mount(&upstream)
        .await;

    let backend = Backend::new(upstream.uri());
    let body = json!({"email": "a@b.com", "password": "pw"});
    let response = backend.post("/auth/login", Some(&body), &ForwardAuth::default()).await.unwrap();
    assert_eq!(response.set_cookies, vec!["session=abc; Path=/; HttpOnly".to_owned()]);
}

#[tokio::test]
async fn unreachable_upstream_is_a_transport_error() {
    // RFC 2606 reserves .invalid, so resolution always fails.
    let backend = Backend::new("http://moderation.invalid".to_owned());
    let error = backend.get("/admin/content", &ForwardAuth::default()).await.unwrap_err();
    assert!(matches!(error, BackendError::Http(_)));
}

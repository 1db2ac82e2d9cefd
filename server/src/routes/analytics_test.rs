use super::*;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::routes::api_routes;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn overview_passes_aggregate_document_through() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_reviewed": 980,
            "pending": 17,
            "by_category": [
                {"category": "Spam", "count": 210},
                {"category": "NSFW", "count": 450},
            ],
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = api_routes(test_app_state(&upstream.uri()));
    let request = Request::builder()
        .method("GET")
        .uri("/api/analytics/overview")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["by_category"][1]["count"], json!(450));
}

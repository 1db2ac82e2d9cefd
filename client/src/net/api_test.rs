use super::*;

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
    assert_eq!(request_failed_message(401), "request failed: 401");
}

#[test]
fn content_endpoint_formats_expected_path() {
    assert_eq!(content_endpoint("42"), "/api/admin/content/42");
}

#[test]
fn review_endpoint_formats_expected_path() {
    assert_eq!(review_endpoint("42"), "/api/admin/review/42");
}

#[test]
fn login_payload_carries_credentials_verbatim() {
    assert_eq!(
        login_payload("a@b.com", "pw"),
        serde_json::json!({"email": "a@b.com", "password": "pw"})
    );
}

#[test]
fn decision_payload_approve() {
    assert_eq!(
        decision_payload(Decision::Approve),
        serde_json::json!({"action": "approve"})
    );
}

#[test]
fn decision_payload_reject() {
    assert_eq!(
        decision_payload(Decision::Reject),
        serde_json::json!({"action": "reject"})
    );
}

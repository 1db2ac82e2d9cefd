use super::*;

#[test]
fn auth_state_starts_unresolved() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn auth_state_holds_resolved_user() {
    let state = AuthState {
        user: Some(User {
            id: "1".to_owned(),
            email: "admin@example.com".to_owned(),
            role: "admin".to_owned(),
        }),
        loading: false,
    };
    assert_eq!(state.user.map(|user| user.email).as_deref(), Some("admin@example.com"));
    assert!(!state.loading);
}

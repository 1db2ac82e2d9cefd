use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@b.com  ", "pw"),
        Ok(("a@b.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_preserves_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " p w "),
        Ok(("a@b.com".to_owned(), " p w ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

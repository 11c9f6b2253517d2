use super::*;

#[test]
fn validate_login_input_builds_user_from_trimmed_email() {
    assert_eq!(
        validate_login_input("  a@b.com ", "secret"),
        Ok(User { email: "a@b.com".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter your email address."));
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email address."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("frontdesk", "secret"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your password."));
}

#[test]
fn validate_login_input_checks_email_before_password() {
    assert_eq!(validate_login_input("", ""), Err("Enter your email address."));
}

#[test]
fn validate_login_input_accepts_any_password() {
    // Credentials are never verified; any non-empty password signs in.
    assert!(validate_login_input("x@y.com", " ").is_ok());
}

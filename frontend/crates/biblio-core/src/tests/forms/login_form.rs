use crate::{CoreError, LoginForm};

#[test]
fn test_valid_login_form_trims_email() {
    let request = LoginForm::new("  ada@example.com ", "secret").validate().unwrap();
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "secret");
}

#[test]
fn test_empty_login_form_reports_both_fields() {
    let errors = LoginForm::default().errors();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["email", "password"]);
}

#[test]
fn test_malformed_email_blocks_submission() {
    for email in ["ada", "ada@", "@example.com", "ada@example..com", "a da@example.com"] {
        let result = LoginForm::new(email, "secret").validate();
        assert!(
            matches!(result, Err(CoreError::Validation { field: "email", .. })),
            "{email} should be rejected"
        );
    }
}

#[test]
fn test_login_request_debug_redacts_password() {
    let request = LoginForm::new("ada@example.com", "hunter2").validate().unwrap();
    let debug = format!("{request:?}");
    assert!(!debug.contains("hunter2"));
}

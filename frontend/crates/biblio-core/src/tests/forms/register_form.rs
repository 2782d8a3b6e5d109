use crate::{CoreError, RegisterForm, Role};

fn filled() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "analytical".to_string(),
        role: Some(Role::Admin),
    }
}

#[test]
fn test_default_role_is_student() {
    assert_eq!(RegisterForm::default().role, Some(Role::Student));
}

#[test]
fn test_valid_register_form() {
    let request = filled().validate().unwrap();
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.role, Role::Admin);
}

#[test]
fn test_short_password_rejected() {
    let form = RegisterForm {
        password: "12345".to_string(),
        ..filled()
    };

    let result = form.validate();
    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "password",
            ..
        })
    ));
}

#[test]
fn test_six_character_password_accepted() {
    let form = RegisterForm {
        password: "123456".to_string(),
        ..filled()
    };
    assert!(form.validate().is_ok());
}

#[test]
fn test_missing_role_rejected() {
    let form = RegisterForm {
        role: None,
        ..filled()
    };
    let errors = form.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "role");
}

#[test]
fn test_blank_names_rejected() {
    let form = RegisterForm {
        first_name: "  ".to_string(),
        last_name: String::new(),
        ..filled()
    };
    let fields: Vec<_> = form.errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["firstName", "lastName"]);
}

use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Student.as_str(), "student");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    assert!(Role::from_str("librarian").is_err());
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_role_default_is_student() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn test_role_deserializes_lowercase() {
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
    assert!(serde_json::from_str::<Role>("\"librarian\"").is_err());
}

#[test]
fn test_role_label() {
    assert_eq!(Role::Admin.label(), "Administrator");
    assert_eq!(Role::Student.label(), "Student");
}

use crate::{AuthUser, Identity, ProfileResponse, Role, User};

use serde_json::json;

#[test]
fn test_identity_accepts_underscore_id() {
    let identity: Identity = serde_json::from_value(json!({
        "_id": "u1",
        "email": "ada@example.com",
        "role": "admin",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(identity.id, "u1");
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.first_name, "Ada");
    assert!(identity.is_admin());
}

#[test]
fn test_identity_names_default_to_empty() {
    let identity: Identity = serde_json::from_value(json!({
        "id": "u2",
        "email": "sam@example.com",
        "role": "student"
    }))
    .unwrap();

    assert_eq!(identity.first_name, "");
    assert_eq!(identity.display_name(), "sam@example.com");
}

#[test]
fn test_display_name_joins_names() {
    let identity = Identity {
        id: "u1".to_string(),
        email: "ada@example.com".to_string(),
        role: Role::Student,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    };
    assert_eq!(identity.display_name(), "Ada Lovelace");
}

#[test]
fn test_auth_user_converts_without_names() {
    let identity = Identity::from(AuthUser {
        id: "u1".to_string(),
        email: "ada@example.com".to_string(),
        role: Role::Admin,
    });

    assert_eq!(identity.id, "u1");
    assert_eq!(identity.role, Role::Admin);
    assert!(identity.first_name.is_empty());
    assert!(identity.last_name.is_empty());
}

#[test]
fn test_user_converts_into_identity() {
    let user = User {
        id: "u3".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        role: Role::Student,
        created_at: None,
    };

    let identity = Identity::from(user);
    assert_eq!(identity.display_name(), "Grace Hopper");
    assert_eq!(identity.role, Role::Student);
}

#[test]
fn test_profile_response_without_user() {
    let response: ProfileResponse =
        serde_json::from_value(json!({ "success": false, "message": "Not authenticated" }))
            .unwrap();

    assert!(!response.success);
    assert!(response.user.is_none());
    assert_eq!(response.message.as_deref(), Some("Not authenticated"));
}

#[test]
fn test_identity_accepts_both_id_keys() {
    let identity: Identity = serde_json::from_str(
        r#"{"_id":"u1","id":"u1","firstName":"A","lastName":"B","email":"a@b.c","role":"admin"}"#,
    )
    .unwrap();

    assert_eq!(identity.id, "u1");
    assert_eq!(identity.display_name(), "A B");
}

#[test]
fn test_identity_prefers_underscore_id_over_empty_virtual() {
    let identity: Identity = serde_json::from_value(json!({
        "_id": "u1",
        "id": "",
        "email": "ada@example.com",
        "role": "student"
    }))
    .unwrap();

    assert_eq!(identity.id, "u1");
}

#[test]
fn test_identity_without_any_id_is_rejected() {
    let result = serde_json::from_value::<Identity>(json!({
        "email": "ada@example.com",
        "role": "student"
    }));

    let message = result.unwrap_err().to_string();
    assert!(message.contains("neither `_id` nor `id`"), "{message}");
}

#[test]
fn test_auth_user_accepts_both_id_keys() {
    let user: AuthUser = serde_json::from_value(json!({
        "_id": "u1",
        "id": "u1",
        "email": "ada@example.com",
        "role": "admin"
    }))
    .unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn test_identity_serializes_single_id_key() {
    let identity: Identity = serde_json::from_value(json!({
        "_id": "u1",
        "id": "u1",
        "email": "ada@example.com",
        "role": "admin"
    }))
    .unwrap();

    let value = serde_json::to_value(&identity).unwrap();
    assert_eq!(value["id"], "u1");
    assert!(value.get("_id").is_none());
}

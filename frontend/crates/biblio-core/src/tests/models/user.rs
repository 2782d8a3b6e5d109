use crate::{EntityRef, Loan, Role, User, UserListResponse};

use serde_json::json;

#[test]
fn test_user_accepts_both_id_keys() {
    let user: User = serde_json::from_str(
        r#"{"_id":"u1","id":"u1","firstName":"A","lastName":"B","email":"a@b.c","role":"admin"}"#,
    )
    .unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.full_name(), "A B");
}

#[test]
fn test_user_accepts_virtual_id_only() {
    let user: User = serde_json::from_value(json!({
        "id": "u2",
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@example.com",
        "role": "student",
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(user.id, "u2");
    assert!(user.created_at.is_some());
    assert_eq!(user.option_label(), "Grace Hopper (grace@example.com)");
}

#[test]
fn test_user_list_decodes_documents_with_both_id_keys() {
    let response: UserListResponse = serde_json::from_value(json!({
        "success": true,
        "users": [
            { "_id": "u1", "id": "u1", "firstName": "A", "lastName": "B",
              "email": "a@b.c", "role": "admin" },
            { "_id": "u2", "firstName": "C", "lastName": "D",
              "email": "c@d.e", "role": "student" }
        ]
    }))
    .unwrap();

    let ids: Vec<_> = response.users.iter().map(|user| user.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2"]);
}

#[test]
fn test_loan_decodes_populated_user_with_both_id_keys() {
    let loan: Loan = serde_json::from_value(json!({
        "_id": "l1",
        "book": "b1",
        "user": { "_id": "u1", "id": "u1", "firstName": "Ada", "lastName": "Lovelace",
                  "email": "ada@example.com", "role": "student" },
        "dueDate": "2024-02-01T00:00:00Z"
    }))
    .unwrap();

    assert!(matches!(&loan.user, EntityRef::Expanded(user) if user.id == "u1"));
    assert_eq!(loan.user_name(), "Ada Lovelace");
}

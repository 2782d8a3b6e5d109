use crate::{EntityRef, Loan, LoanStatus};

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

fn loan(returned: bool) -> Loan {
    Loan {
        id: Some("l1".to_string()),
        book: EntityRef::Id("b1".to_string()),
        user: EntityRef::Id("u1".to_string()),
        due_date: Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap(),
        returned,
        returned_at: None,
        created_at: None,
    }
}

#[test]
fn test_loan_overdue_after_due_date() {
    let loan = loan(false);
    let now = loan.due_date + Duration::days(1);
    assert!(loan.is_overdue(now));
    assert_eq!(loan.status(now), LoanStatus::Overdue);
}

#[test]
fn test_loan_active_before_due_date() {
    let loan = loan(false);
    let now = loan.due_date - Duration::hours(1);
    assert!(!loan.is_overdue(now));
    assert_eq!(loan.status(now), LoanStatus::Active);
}

#[test]
fn test_returned_loan_never_overdue() {
    let loan = loan(true);
    let now = loan.due_date + Duration::days(30);
    assert!(!loan.is_overdue(now));
    assert_eq!(loan.status(now), LoanStatus::Returned);
}

#[test]
fn test_loan_with_populated_references() {
    let loan: Loan = serde_json::from_value(json!({
        "_id": "l9",
        "book": { "_id": "b1", "title": "Dune", "author": "Frank Herbert", "category": "SF", "stock": 2 },
        "user": { "_id": "u1", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "role": "student" },
        "dueDate": "2024-06-01T00:00:00.000Z",
        "returned": false
    }))
    .unwrap();

    assert_eq!(loan.book_title(), "Dune");
    assert_eq!(loan.user_name(), "Ada Lovelace");
    assert!(loan.book.expanded().is_some());
}

#[test]
fn test_loan_with_bare_references() {
    let loan: Loan = serde_json::from_value(json!({
        "book": "b1",
        "user": "u1",
        "dueDate": "2024-06-01T00:00:00Z",
        "returned": true,
        "returnedAt": "2024-05-20T12:00:00Z"
    }))
    .unwrap();

    assert_eq!(loan.book_title(), "b1");
    assert_eq!(loan.user_name(), "u1");
    assert!(loan.returned_at.is_some());
}

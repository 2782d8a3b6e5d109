use crate::{Book, CoreError, LoanForm};

use chrono::NaiveDate;

fn book(id: &str, stock: u32, available: Option<u32>) -> Book {
    Book {
        id: Some(id.to_string()),
        title: format!("Book {id}"),
        author: "Author".to_string(),
        category: "Category".to_string(),
        stock,
        available,
        created_at: None,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test]
fn test_selector_excludes_books_without_available_copies() {
    let books = vec![
        book("b1", 3, Some(0)),
        book("b2", 3, Some(1)),
        book("b3", 2, None),
        book("b4", 0, None),
    ];

    let offered: Vec<_> = LoanForm::selectable_books(&books)
        .into_iter()
        .map(|b| b.id.unwrap())
        .collect();

    assert_eq!(offered, vec!["b2", "b3"]);
}

#[test]
fn test_unavailable_book_rejected_on_submit() {
    let books = vec![book("b1", 3, Some(0)), book("b2", 1, Some(1))];
    let offered = LoanForm::selectable_books(&books);
    let form = LoanForm {
        book: "b1".to_string(),
        user: "u1".to_string(),
        due_date: Some(today()),
    };

    assert!(matches!(
        form.validate(today(), &offered),
        Err(CoreError::Validation { field: "book", .. })
    ));
}

#[test]
fn test_valid_loan_form_builds_request() {
    let offered = LoanForm::selectable_books(&[book("b2", 1, Some(1))]);
    let due = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let form = LoanForm {
        book: "b2".to_string(),
        user: "u1".to_string(),
        due_date: Some(due),
    };

    let request = form.validate(today(), &offered).unwrap();
    assert_eq!(request.book, "b2");
    assert_eq!(request.user, "u1");
    assert_eq!(request.due_date.date_naive(), due);
}

#[test]
fn test_past_due_date_rejected() {
    let offered = LoanForm::selectable_books(&[book("b2", 1, Some(1))]);
    let form = LoanForm {
        book: "b2".to_string(),
        user: "u1".to_string(),
        due_date: NaiveDate::from_ymd_opt(2024, 4, 30),
    };

    let errors = form.errors(today(), &offered);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "dueDate");
}

#[test]
fn test_empty_form_reports_every_field() {
    let fields: Vec<_> = LoanForm::default()
        .errors(today(), &[])
        .iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec!["book", "user", "dueDate"]);
}

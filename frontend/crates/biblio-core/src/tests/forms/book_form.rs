use crate::{Book, BookForm, CoreError};

fn filled() -> BookForm {
    BookForm {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        category: "Science Fiction".to_string(),
        stock: 3,
    }
}

#[test]
fn test_valid_book_form() {
    let draft = filled().validate().unwrap();
    assert_eq!(draft.title, "Dune");
    assert_eq!(draft.stock, 3);
}

#[test]
fn test_zero_stock_is_allowed() {
    let form = BookForm {
        stock: 0,
        ..filled()
    };
    assert_eq!(form.validate().unwrap().stock, 0);
}

#[test]
fn test_negative_stock_rejected() {
    let form = BookForm {
        stock: -1,
        ..filled()
    };
    assert!(matches!(
        form.validate(),
        Err(CoreError::Validation { field: "stock", .. })
    ));
}

#[test]
fn test_required_fields() {
    let fields: Vec<_> = BookForm::default().errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["title", "author", "category"]);
}

#[test]
fn test_from_book_prefills_form() {
    let book = Book {
        id: Some("b1".to_string()),
        title: "Emma".to_string(),
        author: "Jane Austen".to_string(),
        category: "Classic".to_string(),
        stock: 7,
        available: Some(2),
        created_at: None,
    };

    let form = BookForm::from_book(&book);
    assert_eq!(form.title, "Emma");
    assert_eq!(form.stock, 7);
}

use crate::{Book, BookResponse};

use serde_json::json;

fn book(stock: u32, available: Option<u32>) -> Book {
    Book {
        id: Some("b1".to_string()),
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        category: "Science Fiction".to_string(),
        stock,
        available,
        created_at: None,
    }
}

#[test]
fn test_available_copies_prefers_available_field() {
    assert_eq!(book(5, Some(2)).available_copies(), 2);
}

#[test]
fn test_available_zero_is_not_replaced_by_stock() {
    let book = book(5, Some(0));
    assert_eq!(book.available_copies(), 0);
    assert!(!book.is_available());
}

#[test]
fn test_missing_available_falls_back_to_stock() {
    let book = book(3, None);
    assert_eq!(book.available_copies(), 3);
    assert!(book.is_available());
}

#[test]
fn test_option_label() {
    assert_eq!(
        book(4, Some(1)).option_label(),
        "Dune - Frank Herbert (Available: 1)"
    );
}

#[test]
fn test_book_deserializes_mongo_id() {
    let book: Book = serde_json::from_value(json!({
        "_id": "64f0",
        "title": "Dune",
        "author": "Frank Herbert",
        "category": "Science Fiction",
        "stock": 3,
        "available": 1,
        "createdAt": "2024-03-01T10:00:00.000Z"
    }))
    .unwrap();

    assert_eq!(book.id.as_deref(), Some("64f0"));
    assert_eq!(book.available, Some(1));
    assert!(book.created_at.is_some());
}

#[test]
fn test_book_response_list() {
    let response: BookResponse = serde_json::from_value(json!({
        "success": true,
        "books": [
            { "_id": "1", "title": "A", "author": "X", "category": "C", "stock": 1 }
        ]
    }))
    .unwrap();

    assert!(response.success);
    assert!(response.message.is_none());
    assert_eq!(response.books.unwrap().len(), 1);
}

#![allow(dead_code)]

use serde_json::{Value, json};

pub fn admin_json() -> Value {
    json!({
        "_id": "u1",
        "email": "admin@library.test",
        "role": "admin",
        "firstName": "Ada",
        "lastName": "Lovelace"
    })
}

pub fn student_json() -> Value {
    json!({
        "_id": "s1",
        "email": "student@library.test",
        "role": "student",
        "firstName": "Alan",
        "lastName": "Turing"
    })
}

pub fn book_json(id: &str, title: &str, stock: u32, available: Option<u32>) -> Value {
    let mut book = json!({
        "_id": id,
        "title": title,
        "author": "Frank Herbert",
        "category": "Science Fiction",
        "stock": stock
    });
    if let Some(available) = available {
        book["available"] = json!(available);
    }
    book
}

pub fn loan_json(id: &str, due_date: &str, returned: bool) -> Value {
    json!({
        "_id": id,
        "book": book_json("b1", "Dune", 3, Some(2)),
        "user": student_json(),
        "dueDate": due_date,
        "returned": returned
    })
}

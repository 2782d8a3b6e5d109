use crate::tests::identity;
use crate::{NavState, Route};

use biblio_core::Role;

#[test]
fn given_no_identity_then_no_links_and_no_badge() {
    let state = NavState::for_identity(None);

    assert!(state.user.is_none());
    assert!(state.links.is_empty());
}

#[test]
fn given_student_then_books_and_loans_only() {
    let student = identity("s1", Role::Student);
    let state = NavState::for_identity(Some(&student));

    assert!(state.has_link(&Route::Books));
    assert!(state.has_link(&Route::Loans));
    assert!(!state.has_link(&Route::Users));
}

#[test]
fn given_admin_then_users_link_shown() {
    let admin = identity("u1", Role::Admin);
    let state = NavState::for_identity(Some(&admin));

    assert!(state.has_link(&Route::Users));
    assert_eq!(state.links.len(), 3);
}

#[test]
fn given_identity_then_badge_has_name_email_and_role_label() {
    let admin = identity("u1", Role::Admin);
    let badge = NavState::for_identity(Some(&admin)).user.unwrap();

    assert_eq!(badge.name, "Ada Lovelace");
    assert_eq!(badge.email, "u1@library.test");
    assert_eq!(badge.role_label, "Administrator");
}

use crate::auth_commands::AuthCommands;
use crate::book_commands::BookCommands;
use crate::commands::{Commands, ShellLine};
use crate::loan_commands::LoanCommands;

use biblio_client::Route;
use biblio_core::Role;

use chrono::NaiveDate;
use clap::Parser;

fn parse(words: &[&str]) -> Commands {
    ShellLine::try_parse_from(words).unwrap().command
}

#[test]
fn test_login_parsed_as_auth_command() {
    let command = parse(&["login", "admin@library.test", "secret"]);

    assert!(matches!(
        command,
        Commands::Auth(AuthCommands::Login { ref email, .. }) if email == "admin@library.test"
    ));
    assert_eq!(command.route(), Some(Route::Login));
}

#[test]
fn test_register_role_defaults_to_student() {
    let command = parse(&[
        "register",
        "--first-name",
        "Alan",
        "--last-name",
        "Turing",
        "--email",
        "alan@library.test",
        "--password",
        "secret1",
    ]);

    match command {
        Commands::Auth(AuthCommands::Register { role, .. }) => assert_eq!(role, Role::Student),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_register_rejects_unknown_role() {
    let result = ShellLine::try_parse_from([
        "register",
        "--first-name",
        "A",
        "--last-name",
        "B",
        "--email",
        "a@b.test",
        "--password",
        "secret1",
        "--role",
        "librarian",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_book_commands_routes() {
    assert_eq!(parse(&["book", "list"]).route(), Some(Route::Books));
    assert_eq!(
        parse(&[
            "book", "create", "--title", "Dune", "--author", "Herbert", "--category", "SF",
            "--stock", "3"
        ])
        .route(),
        Some(Route::BookNew)
    );
    assert_eq!(
        parse(&["book", "edit", "b1", "--stock", "4"]).route(),
        Some(Route::BookEdit(String::from("b1")))
    );
    assert_eq!(parse(&["book", "delete", "b1"]).route(), Some(Route::Books));
}

#[test]
fn test_book_create_accepts_negative_stock_for_validation() {
    let command = parse(&[
        "book", "create", "--title", "Dune", "--author", "Herbert", "--category", "SF",
        "--stock", "-1",
    ]);

    assert!(matches!(
        command,
        Commands::Book {
            action: BookCommands::Create { stock: -1, .. }
        }
    ));
}

#[test]
fn test_loan_create_parses_due_date() {
    let command = parse(&[
        "loan", "create", "--book", "b1", "--user", "s1", "--due", "2030-01-15",
    ]);

    match command {
        Commands::Loan {
            action: LoanCommands::Create { due, .. },
        } => assert_eq!(due, NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_loan_create_rejects_bad_date() {
    let result = ShellLine::try_parse_from([
        "loan", "create", "--book", "b1", "--user", "s1", "--due", "15/01/2030",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_user_and_loan_routes() {
    assert_eq!(parse(&["user", "list"]).route(), Some(Route::Users));
    assert_eq!(parse(&["loan", "list"]).route(), Some(Route::Loans));
    assert_eq!(parse(&["loan", "return", "l1"]).route(), Some(Route::Loans));
}

#[test]
fn test_commands_without_route() {
    assert_eq!(parse(&["nav"]).route(), None);
    assert_eq!(parse(&["whoami"]).route(), None);
    assert_eq!(parse(&["logout"]).route(), None);
    assert_eq!(parse(&["go", "/users"]).route(), None);
    assert!(matches!(parse(&["exit"]), Commands::Quit));
}

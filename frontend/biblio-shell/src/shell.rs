use crate::{
    auth_commands::AuthCommands,
    book_commands::BookCommands,
    commands::{Commands, ShellLine},
    error::{Result as ShellErrorResult, ShellError},
    loan_commands::LoanCommands,
    terminal,
    user_commands::UserCommands,
};

use biblio_client::{
    AppContext, BookFormMode, BookFormView, BooksListView, LoanFormView, LoansListView, LoginView,
    Navigator, NotificationLog, RegisterView, Route, Router, UsersListView,
};
use biblio_core::{BookForm, LoanForm, LoginForm, RegisterForm};

use std::sync::Arc;

use chrono::{Local, Utc};
use clap::Parser;
use futures::StreamExt;
use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Read-eval-print loop over one client session.
pub(crate) struct Shell {
    ctx: AppContext,
    router: Arc<Router>,
    notifications: Arc<NotificationLog>,
    pretty: bool,
}

impl Shell {
    pub(crate) fn new(
        ctx: AppContext,
        router: Arc<Router>,
        notifications: Arc<NotificationLog>,
        pretty: bool,
    ) -> Self {
        Self {
            ctx,
            router,
            notifications,
            pretty,
        }
    }

    pub(crate) async fn run(&self) -> ShellErrorResult<()> {
        let nav = self.ctx.navigation();
        tokio::spawn(async move {
            let mut states = Box::pin(nav.watch());
            while let Some(state) = states.next().await {
                debug!(
                    "Navigation: {}",
                    state
                        .links
                        .iter()
                        .map(|link| link.label)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        });

        let start = self.router.navigate(Route::Books);
        info!("Shell started on {}", start);
        eprintln!("Type 'help' for commands, 'quit' to leave.");

        loop {
            terminal::prompt(&format!("biblio {}> ", self.router.current()));

            let Some(line) = terminal::read_line()
                .await
                .map_err(|e| ShellError::io("Failed to read input", e))?
            else {
                break;
            };

            let words = match terminal::split_line(&line) {
                Ok(words) => words,
                Err(message) => {
                    eprintln!("error: {message}");
                    continue;
                }
            };
            if words.is_empty() {
                continue;
            }

            let command = match ShellLine::try_parse_from(&words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    let _ = e.print();
                    continue;
                }
            };

            let flow = self.execute(command).await;
            terminal::print_notifications(&self.notifications);

            if flow == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Enter the command's screen through the guards, then run it.
    pub(crate) async fn execute(&self, command: Commands) -> Flow {
        if let Some(route) = command.route() {
            let landed = self.router.navigate(route.clone());
            if landed != route {
                self.ctx
                    .notify_error(format!("Access denied, redirected to {landed}"));
                return Flow::Continue;
            }
        }

        let output = match command {
            Commands::Quit => return Flow::Quit,
            Commands::Auth(action) => self.auth(action).await,
            Commands::Nav => to_json(&self.ctx.navigation().state()),
            Commands::Go { path } => Some(json!({ "route": self.router.navigate_path(&path) })),
            Commands::Book { action } => self.book(action).await,
            Commands::Loan { action } => self.loan(action).await,
            Commands::User { action } => self.user(action).await,
        };

        if let Some(value) = output {
            self.print(&value);
        }

        Flow::Continue
    }

    async fn auth(&self, action: AuthCommands) -> Option<Value> {
        match action {
            AuthCommands::Login { email, password } => {
                let view = LoginView::new(self.ctx.clone());
                let authenticated = view.submit(&LoginForm::new(&email, &password)).await.ok()?;
                to_json(&authenticated.identity)
            }
            AuthCommands::Register {
                first_name,
                last_name,
                email,
                password,
                role,
            } => {
                let form = RegisterForm {
                    first_name,
                    last_name,
                    email,
                    password,
                    role: Some(role),
                };
                let view = RegisterView::new(self.ctx.clone());
                let authenticated = view.submit(&form).await.ok()?;
                to_json(&authenticated.identity)
            }
            AuthCommands::Logout => {
                let outcome = self.ctx.navigation().logout().await;
                Some(json!({ "logout": outcome }))
            }
            AuthCommands::Whoami => to_json(&self.ctx.session().current()),
            AuthCommands::Profile => match self.ctx.gateway().fetch_profile().await {
                Ok(identity) => to_json(&identity),
                Err(e) => {
                    self.ctx
                        .notify_error(e.user_message("Failed to load profile"));
                    None
                }
            },
        }
    }

    async fn book(&self, action: BookCommands) -> Option<Value> {
        match action {
            BookCommands::List { query } => {
                let view = BooksListView::new(self.ctx.clone());
                view.search(query.as_deref().unwrap_or_default()).await;
                to_json(&view.state().books)
            }
            BookCommands::Get { id } => match self.ctx.books().get(&id).await {
                Ok(book) => to_json(&book),
                Err(e) => {
                    self.ctx.notify_error(e.user_message("Failed to load book"));
                    None
                }
            },
            BookCommands::Create {
                title,
                author,
                category,
                stock,
            } => {
                let mut view = BookFormView::new(self.ctx.clone(), BookFormMode::Create);
                view.set_form(BookForm {
                    title,
                    author,
                    category,
                    stock,
                });
                let landed = view.submit().await.ok()?;
                Some(json!({ "route": landed }))
            }
            BookCommands::Edit {
                id,
                title,
                author,
                category,
                stock,
            } => {
                let mut view = BookFormView::new(self.ctx.clone(), BookFormMode::Edit(id));
                view.load().await.ok()?;

                let mut form = view.form().clone();
                if let Some(title) = title {
                    form.title = title;
                }
                if let Some(author) = author {
                    form.author = author;
                }
                if let Some(category) = category {
                    form.category = category;
                }
                if let Some(stock) = stock {
                    form.stock = stock;
                }
                view.set_form(form);

                let landed = view.submit().await.ok()?;
                Some(json!({ "route": landed }))
            }
            BookCommands::Delete { id } => {
                let view = BooksListView::new(self.ctx.clone());
                if !view.can_manage() {
                    self.ctx
                        .notify_error("Only administrators can delete books");
                    return None;
                }

                let book = match self.ctx.books().get(&id).await {
                    Ok(book) => book,
                    Err(e) => {
                        self.ctx.notify_error(e.user_message("Failed to load book"));
                        return None;
                    }
                };
                let outcome = view.delete(&book).await;
                Some(json!({ "delete": outcome }))
            }
        }
    }

    async fn loan(&self, action: LoanCommands) -> Option<Value> {
        match action {
            LoanCommands::List => {
                let mut view = LoansListView::new(self.ctx.clone());
                view.load().await.ok()?;
                Some(json!({
                    "columns": view.columns(),
                    "rows": view.rows(Utc::now()),
                }))
            }
            LoanCommands::Create { book, user, due } => {
                let mut view = LoanFormView::new(self.ctx.clone());
                view.load().await;

                let form = LoanForm {
                    book,
                    user,
                    due_date: Some(due),
                };
                let landed = view.submit(&form, Local::now().date_naive()).await.ok()?;
                Some(json!({ "route": landed }))
            }
            LoanCommands::Return { id } => {
                let mut view = LoansListView::new(self.ctx.clone());
                if !view.is_admin() {
                    self.ctx
                        .notify_error("Only administrators can return loans");
                    return None;
                }

                let outcome = view.return_loan(&id).await;
                Some(json!({ "return": outcome }))
            }
        }
    }

    async fn user(&self, action: UserCommands) -> Option<Value> {
        match action {
            UserCommands::List => {
                let mut view = UsersListView::new(self.ctx.clone());
                let users = view.load().await.ok()?;
                to_json(&users)
            }
            UserCommands::Get { id } => match self.ctx.users().get(&id).await {
                Ok(user) => to_json(&user),
                Err(e) => {
                    self.ctx.notify_error(e.user_message("Failed to load user"));
                    None
                }
            },
        }
    }

    fn print(&self, value: &Value) {
        let output = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };

        match output {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing response: {}", e),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Failed to serialize output: {}", e);
            None
        }
    }
}

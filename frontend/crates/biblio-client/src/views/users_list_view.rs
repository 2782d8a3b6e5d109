use crate::{AppContext, ClientResult};

use biblio_core::User;

const COLUMNS: &[&str] = &["name", "email", "role", "createdAt"];

pub struct UsersListView {
    ctx: AppContext,
    users: Vec<User>,
}

impl UsersListView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            users: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> ClientResult<&[User]> {
        match self.ctx.users().list().await {
            Ok(users) => {
                self.users = users;
                Ok(&self.users)
            }
            Err(e) => {
                self.ctx.notify_error("Failed to load users");
                Err(e)
            }
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }
}

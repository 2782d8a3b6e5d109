use crate::{AppContext, Authenticated, ClientError, ClientResult, Route};

use biblio_core::LoginForm;

pub struct LoginView {
    ctx: AppContext,
}

impl LoginView {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Validate, log in, and go to the catalog.
    pub async fn submit(&self, form: &LoginForm) -> ClientResult<Authenticated> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.ctx.notify_error(e.message());
                return Err(ClientError::from(e));
            }
        };

        match self.ctx.gateway().login(&request).await {
            Ok(authenticated) => {
                self.ctx.notify_info(
                    authenticated
                        .message
                        .clone()
                        .unwrap_or_else(|| String::from("Login successful")),
                );
                self.ctx.navigator().navigate(Route::Books);
                Ok(authenticated)
            }
            Err(e) => {
                self.ctx.notify_error(e.user_message("Login failed"));
                Err(e)
            }
        }
    }

    pub fn register(&self) -> Route {
        self.ctx.navigator().navigate(Route::Register)
    }
}

use crate::{AppContext, Authenticated, ClientError, ClientResult, Route};

use biblio_core::RegisterForm;

pub struct RegisterView {
    ctx: AppContext,
}

impl RegisterView {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub async fn submit(&self, form: &RegisterForm) -> ClientResult<Authenticated> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.ctx.notify_error(e.message());
                return Err(ClientError::from(e));
            }
        };

        match self.ctx.gateway().register(&request).await {
            Ok(authenticated) => {
                self.ctx.notify_info(
                    authenticated
                        .message
                        .clone()
                        .unwrap_or_else(|| String::from("Registration successful")),
                );
                self.ctx.navigator().navigate(Route::Books);
                Ok(authenticated)
            }
            Err(e) => {
                self.ctx.notify_error(e.user_message("Registration failed"));
                Err(e)
            }
        }
    }

    pub fn login(&self) -> Route {
        self.ctx.navigator().navigate(Route::Login)
    }
}

use crate::{ApiClient, ClientError, ClientResult};

use biblio_core::{User, UserListResponse, UserResponse};

use reqwest::Method;

#[derive(Clone, Debug)]
pub struct UsersClient {
    api: ApiClient,
}

impl UsersClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ClientResult<Vec<User>> {
        let req = self.api.request(Method::GET, "/users");
        let response: UserListResponse = self.api.execute(req).await?;
        Ok(response.users)
    }

    pub async fn get(&self, id: &str) -> ClientResult<User> {
        let req = self.api.request_resource(Method::GET, &["users", id])?;
        let response: UserResponse = self.api.execute(req).await?;
        response.user.ok_or_else(|| ClientError::missing("user"))
    }
}

use crate::{ApiClient, ClientError, ClientResult};

use biblio_core::{Book, BookDraft, BookResponse};

use reqwest::Method;

#[derive(Clone, Debug)]
pub struct BooksClient {
    api: ApiClient,
}

impl BooksClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /books`, optionally filtered by `q`
    pub async fn list(&self, query: Option<&str>) -> ClientResult<Vec<Book>> {
        let req = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => self
                .api
                .request_with_query(Method::GET, "/books", &[("q", q)])?,
            None => self.api.request(Method::GET, "/books"),
        };

        let response: BookResponse = self.api.execute(req).await?;
        Ok(response.books.unwrap_or_default())
    }

    pub async fn get(&self, id: &str) -> ClientResult<Book> {
        let req = self.api.request_resource(Method::GET, &["books", id])?;
        let response: BookResponse = self.api.execute(req).await?;
        response.book.ok_or_else(|| ClientError::missing("book"))
    }

    pub async fn create(&self, draft: &BookDraft) -> ClientResult<BookResponse> {
        let req = self.api.request(Method::POST, "/books").json(draft);
        self.api.execute(req).await
    }

    pub async fn update(&self, id: &str, draft: &BookDraft) -> ClientResult<BookResponse> {
        let req = self
            .api
            .request_resource(Method::PUT, &["books", id])?
            .json(draft);
        self.api.execute(req).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<BookResponse> {
        let req = self.api.request_resource(Method::DELETE, &["books", id])?;
        self.api.execute(req).await
    }
}

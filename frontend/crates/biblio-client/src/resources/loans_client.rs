use crate::{ApiClient, ClientResult};

use biblio_core::{CreateLoanRequest, Loan, LoanResponse};

use reqwest::Method;
use serde_json::json;

#[derive(Clone, Debug)]
pub struct LoansClient {
    api: ApiClient,
}

impl LoansClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every loan (administrators)
    pub async fn list_all(&self) -> ClientResult<Vec<Loan>> {
        let req = self.api.request(Method::GET, "/loans");
        let response: LoanResponse = self.api.execute(req).await?;
        Ok(response.loans.unwrap_or_default())
    }

    /// Loans of the logged-in user
    pub async fn list_mine(&self) -> ClientResult<Vec<Loan>> {
        let req = self.api.request(Method::GET, "/loans/my");
        let response: LoanResponse = self.api.execute(req).await?;
        Ok(response.loans.unwrap_or_default())
    }

    pub async fn create(&self, request: &CreateLoanRequest) -> ClientResult<LoanResponse> {
        let req = self.api.request(Method::POST, "/loans").json(request);
        self.api.execute(req).await
    }

    pub async fn return_loan(&self, id: &str) -> ClientResult<LoanResponse> {
        let req = self
            .api
            .request_resource(Method::PUT, &["loans", id, "return"])?
            .json(&json!({}));
        self.api.execute(req).await
    }
}

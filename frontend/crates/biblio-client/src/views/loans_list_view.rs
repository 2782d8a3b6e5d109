use crate::{
    ActionOutcome, AppContext, ClientResult, ConfirmationRequest, ConfirmationResponse, Route,
};

use biblio_core::{Loan, LoanStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;

const ADMIN_COLUMNS: &[&str] = &["book", "user", "dueDate", "status", "returnedAt", "actions"];
const STUDENT_COLUMNS: &[&str] = &["book", "dueDate", "status", "returnedAt"];

/// One table row with the derived status resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRow {
    pub id: Option<String>,
    pub book: String,
    pub user: String,
    pub due_date: DateTime<Utc>,
    pub status: LoanStatus,
    pub returned_at: Option<DateTime<Utc>>,
}

/// Loans screen: everything for administrators, one's own loans otherwise.
pub struct LoansListView {
    ctx: AppContext,
    loans: Vec<Loan>,
}

impl LoansListView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            loans: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.ctx.session().is_admin()
    }

    pub async fn load(&mut self) -> ClientResult<&[Loan]> {
        let loans = self.ctx.loans();
        let result = if self.is_admin() {
            loans.list_all().await
        } else {
            loans.list_mine().await
        };

        match result {
            Ok(loans) => {
                self.loans = loans;
                Ok(&self.loans)
            }
            Err(e) => {
                self.ctx.notify_error("Failed to load loans");
                Err(e)
            }
        }
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn columns(&self) -> &'static [&'static str] {
        if self.is_admin() {
            ADMIN_COLUMNS
        } else {
            STUDENT_COLUMNS
        }
    }

    pub fn rows(&self, now: DateTime<Utc>) -> Vec<LoanRow> {
        self.loans
            .iter()
            .map(|loan| LoanRow {
                id: loan.id.clone(),
                book: loan.book_title().to_string(),
                user: loan.user_name(),
                due_date: loan.due_date,
                status: loan.status(now),
                returned_at: loan.returned_at,
            })
            .collect()
    }

    pub fn create(&self) -> Route {
        self.ctx.navigator().navigate(Route::LoanNew)
    }

    /// Ask, mark returned, notify, reload
    pub async fn return_loan(&mut self, id: &str) -> ActionOutcome {
        let request = ConfirmationRequest::new("Mark this loan as returned?", "Return");
        if self.ctx.confirmer().confirm(request).await == ConfirmationResponse::Cancelled {
            return ActionOutcome::Cancelled;
        }

        match self.ctx.loans().return_loan(id).await {
            Ok(response) => {
                self.ctx
                    .notify_info(response.message.unwrap_or_else(|| String::from("Loan returned")));
                // A failed reload has already been notified
                let _ = self.load().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                self.ctx.notify_error(e.user_message("Failed to return loan"));
                ActionOutcome::Failed
            }
        }
    }
}

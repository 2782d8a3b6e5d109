use crate::{Loan, impl_envelope};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub loan: Option<Loan>,
    #[serde(default)]
    pub loans: Option<Vec<Loan>>,
}

impl_envelope!(LoanResponse);

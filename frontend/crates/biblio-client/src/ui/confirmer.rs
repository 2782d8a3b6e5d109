use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub message: String,
    pub confirm_label: String,
}

impl ConfirmationRequest {
    pub fn new(message: impl Into<String>, confirm_label: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            confirm_label: confirm_label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResponse {
    Confirmed,
    Cancelled,
}

/// Asks the user before a destructive action proceeds.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, request: ConfirmationRequest) -> ConfirmationResponse;
}

/// Always answers the same way. Counts how often it was asked.
#[derive(Debug)]
pub struct StaticConfirmer {
    answer: ConfirmationResponse,
    asked: AtomicUsize,
}

impl StaticConfirmer {
    pub fn new(answer: ConfirmationResponse) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn always_confirm() -> Self {
        Self::new(ConfirmationResponse::Confirmed)
    }

    pub fn always_cancel() -> Self {
        Self::new(ConfirmationResponse::Cancelled)
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Confirmer for StaticConfirmer {
    async fn confirm(&self, _request: ConfirmationRequest) -> ConfirmationResponse {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

use crate::forms::{first_error, is_blank, is_valid_email};
use crate::{CoreResult, FieldError, LoginRequest};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if is_blank(&self.email) {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !is_valid_email(self.email.trim()) {
            errors.push(FieldError::new("email", "Enter a valid email"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }

        errors
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<LoginRequest> {
        first_error(self.errors())?;

        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

use crate::forms::{first_error, is_blank, is_valid_email};
use crate::{CoreResult, FieldError, MIN_PASSWORD_LENGTH, RegisterRequest, Role};

/// Sign-up form. The role selector starts on `student`.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Some(Role::Student),
        }
    }
}

impl RegisterForm {
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if is_blank(&self.first_name) {
            errors.push(FieldError::new("firstName", "First name is required"));
        }
        if is_blank(&self.last_name) {
            errors.push(FieldError::new("lastName", "Last name is required"));
        }

        if is_blank(&self.email) {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !is_valid_email(self.email.trim()) {
            errors.push(FieldError::new("email", "Enter a valid email"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }

        if self.role.is_none() {
            errors.push(FieldError::new("role", "Role is required"));
        }

        errors
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<RegisterRequest> {
        first_error(self.errors())?;

        Ok(RegisterRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role.unwrap_or_default(),
        })
    }
}

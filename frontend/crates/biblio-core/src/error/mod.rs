use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("{entity} has neither `_id` nor `id` {location}")]
    MissingId {
        entity: &'static str,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a single form field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_id(entity: &'static str) -> Self {
        CoreError::MissingId {
            entity,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable message without the source location.
    pub fn message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidRole { value, .. } => format!("Invalid role: {value}"),
            CoreError::MissingId { entity, .. } => format!("{entity} has no id"),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;

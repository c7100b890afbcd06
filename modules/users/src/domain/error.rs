use std::collections::BTreeMap;
use thiserror::Error;

/// Domain-specific errors using thiserror.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User with id = {id} not found")]
    UserNotFound { id: i64 },

    #[error("This email is already in use")]
    EmailAlreadyExists { email: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Validation failed")]
    InvalidFields { details: BTreeMap<String, String> },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn user_not_found(id: i64) -> Self {
        Self::UserNotFound { id }
    }

    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_fields(details: BTreeMap<String, String>) -> Self {
        Self::InvalidFields { details }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

use std::collections::BTreeMap;
use thiserror::Error;

use users::contract::error::UsersError;

/// Domain-specific errors using thiserror.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Film with id = {id} not found")]
    FilmNotFound { id: i64 },

    #[error("User with id = {id} not found")]
    UserNotFound { id: i64 },

    #[error("A film with this name already exists")]
    NameAlreadyExists { name: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Validation failed")]
    InvalidFields { details: BTreeMap<String, String> },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn film_not_found(id: i64) -> Self {
        Self::FilmNotFound { id }
    }

    pub fn user_not_found(id: i64) -> Self {
        Self::UserNotFound { id }
    }

    pub fn name_already_exists(name: impl Into<String>) -> Self {
        Self::NameAlreadyExists { name: name.into() }
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

/// Errors crossing the users contract keep their not-found identity so the
/// REST layer can answer 404 for a missing like operand.
impl From<UsersError> for DomainError {
    fn from(e: UsersError) -> Self {
        match e {
            UsersError::NotFound { id } => Self::user_not_found(id),
            UsersError::Conflict { .. } | UsersError::Validation { .. } => {
                Self::validation(e.to_string())
            }
            UsersError::Internal => Self::storage("users module internal error"),
        }
    }
}

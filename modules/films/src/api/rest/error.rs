use httpapi::ApiError;

use crate::domain::error::DomainError;

/// Map a domain error to the REST error envelope and status.
pub fn map_domain_error(e: &DomainError) -> ApiError {
    match e {
        DomainError::FilmNotFound { .. } | DomainError::UserNotFound { .. } => {
            httpapi::not_found(e.to_string())
        }
        DomainError::NameAlreadyExists { .. } => httpapi::conflict(e.to_string()),
        DomainError::Validation { message } => httpapi::bad_request(message.clone()),
        DomainError::InvalidFields { details } => httpapi::validation_failed(details.clone()),
        DomainError::Storage { .. } => {
            // Log the internals but don't expose them to the client.
            tracing::error!(error = ?e, "Storage error");
            httpapi::internal_error("An internal error occurred")
        }
    }
}

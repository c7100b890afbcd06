use httpapi::ApiError;

use crate::domain::error::DomainError;

/// Map a domain error to the REST error envelope and status.
pub fn map_domain_error(e: &DomainError) -> ApiError {
    match e {
        DomainError::UserNotFound { .. } => httpapi::not_found(e.to_string()),
        DomainError::EmailAlreadyExists { .. } => httpapi::conflict(e.to_string()),
        DomainError::Validation { message } => httpapi::bad_request(message.clone()),
        DomainError::InvalidFields { details } => httpapi::validation_failed(details.clone()),
        DomainError::Storage { .. } => {
            // Log the internals but don't expose them to the client.
            tracing::error!(error = ?e, "Storage error");
            httpapi::internal_error("An internal error occurred")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::collections::BTreeMap;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        assert_eq!(
            map_domain_error(&DomainError::user_not_found(3)).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            map_domain_error(&DomainError::email_already_exists("a@b.c")).status,
            StatusCode::CONFLICT
        );
        assert_eq!(
            map_domain_error(&DomainError::validation("Birthday cannot be in the future")).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            map_domain_error(&DomainError::invalid_fields(BTreeMap::new())).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            map_domain_error(&DomainError::storage("boom")).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_details_are_not_leaked() {
        let err = map_domain_error(&DomainError::storage("lock poisoned at 0x1234"));
        assert_eq!(err.body.error, "An internal error occurred");
    }
}

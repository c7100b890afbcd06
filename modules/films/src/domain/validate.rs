use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// The first public film screening; no film can predate it.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).expect("valid calendar date")
}

/// Field-shape checks on inbound payloads, collected into a field →
/// message map. Runs before duplicate checks.
pub fn check_fields(name: &str) -> BTreeMap<String, String> {
    let mut details = BTreeMap::new();
    if name.trim().is_empty() {
        details.insert("name".to_string(), "must not be blank".to_string());
    }
    details
}

/// Domain rule checks in a fixed sequence; only the first violated rule is
/// reported.
pub fn validate(
    description: &str,
    release_date: NaiveDate,
    duration: i32,
) -> Result<(), DomainError> {
    if description.chars().count() > 200 {
        return Err(DomainError::validation(
            "Film description must not exceed 200 characters",
        ));
    }
    if release_date < earliest_release_date() {
        return Err(DomainError::validation(
            "Release date must not be earlier than 1895-12-28",
        ));
    }
    if duration < 0 {
        return Err(DomainError::validation(
            "Film duration must be a non-negative number",
        ));
    }
    Ok(())
}

use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

use crate::contract::model::NewUser;
use crate::domain::error::DomainError;

/// Field-shape checks on inbound payloads. All violated fields are
/// collected into a field → message map (an empty map means the payload is
/// well-formed). These run before duplicate checks, like the framework
/// validation layer they stand in for.
pub fn check_fields(email: &str, login: &str) -> BTreeMap<String, String> {
    let mut details = BTreeMap::new();

    if email.trim().is_empty() {
        details.insert("email".to_string(), "must not be blank".to_string());
    } else if !is_email_shaped(email) {
        details.insert("email".to_string(), "must be a valid email".to_string());
    }

    if login.trim().is_empty() {
        details.insert("login".to_string(), "must not be blank".to_string());
    } else if login.chars().any(char::is_whitespace) {
        details.insert(
            "login".to_string(),
            "must not contain whitespace".to_string(),
        );
    }

    details
}

/// Domain rule check: the birthday must not be in the future, relative to
/// the moment of validation.
pub fn validate(user: &NewUser) -> Result<(), DomainError> {
    validate_birthday(user.birthday)
}

pub fn validate_birthday(birthday: NaiveDate) -> Result<(), DomainError> {
    if birthday > Local::now().date_naive() {
        return Err(DomainError::validation("Birthday cannot be in the future"));
    }
    Ok(())
}

fn is_email_shaped(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_user(email: &str, login: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            login: login.to_string(),
            name: None,
            birthday: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        }
    }

    #[test]
    fn well_formed_payload_has_no_field_errors() {
        assert!(check_fields("ada@lovelace.org", "ada").is_empty());
    }

    #[test]
    fn blank_and_malformed_fields_are_all_collected() {
        let details = check_fields("", " ");
        assert_eq!(details.get("email").unwrap(), "must not be blank");
        assert_eq!(details.get("login").unwrap(), "must not be blank");

        let details = check_fields("not-an-email", "log in");
        assert_eq!(details.get("email").unwrap(), "must be a valid email");
        assert_eq!(details.get("login").unwrap(), "must not contain whitespace");
    }

    #[test]
    fn birthday_today_is_allowed() {
        let mut user = new_user("a@b.c", "a");
        user.birthday = Local::now().date_naive();
        assert!(validate(&user).is_ok());
    }

    #[test]
    fn future_birthday_is_rejected() {
        let mut user = new_user("a@b.c", "a");
        user.birthday = Local::now().date_naive() + Duration::days(1);
        let err = validate(&user).unwrap_err();
        assert_eq!(err.to_string(), "Birthday cannot be in the future");
    }
}

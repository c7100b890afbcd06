use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Pure user model for inter-module communication (no serde).
///
/// `friends` holds the ids of users this user is friends with; the
/// relationship is symmetric, so the id appears in both users' sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: BTreeSet<i64>,
}

/// Data for creating a new user. The id is assigned by the store and the
/// friend set starts empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

/// Full replacement payload for an existing user (id addressed separately).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
    pub friends: BTreeSet<i64>,
}

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Pure film model for inter-module communication (no serde).
///
/// `likes` holds the ids of users who liked the film; it takes no part in
/// duplicate detection, which keys on `name` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub likes: BTreeSet<i64>,
}

/// Data for creating a new film. The id is assigned by the store and the
/// like set starts empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFilm {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
}

/// Full replacement payload for an existing film (id addressed separately).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmUpdate {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub likes: BTreeSet<i64>,
}

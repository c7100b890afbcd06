use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{Film, FilmUpdate, NewFilm};

/// REST DTO for film representation with serde/utoipa.
/// Dates travel as `YYYY-MM-DD`; the like set as a sorted user-id array.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilmDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub likes: Vec<i64>,
}

/// REST DTO for creating a new film.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFilmReq {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
}

/// REST DTO for updating a film (full replacement, id in the body).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateFilmReq {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    #[serde(default)]
    pub likes: Vec<i64>,
}

/// Query parameters for the popularity ranking.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PopularQuery {
    pub count: Option<i64>,
}

// Conversions between REST DTOs and contract models.

impl From<Film> for FilmDto {
    fn from(film: Film) -> Self {
        Self {
            id: film.id,
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
            likes: film.likes.into_iter().collect(),
        }
    }
}

impl From<CreateFilmReq> for NewFilm {
    fn from(req: CreateFilmReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            release_date: req.release_date,
            duration: req.duration,
        }
    }
}

impl From<UpdateFilmReq> for FilmUpdate {
    fn from(req: UpdateFilmReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            release_date: req.release_date,
            duration: req.duration,
            likes: req.likes.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_date_travels_as_iso_date() {
        let req: CreateFilmReq = serde_json::from_value(serde_json::json!({
            "name": "Matrix",
            "description": "Welcome to the desert of the real",
            "release_date": "1999-03-31",
            "duration": 136
        }))
        .unwrap();
        assert_eq!(
            req.release_date,
            NaiveDate::from_ymd_opt(1999, 3, 31).unwrap()
        );
    }

    #[test]
    fn update_likes_default_to_empty() {
        let req: UpdateFilmReq = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Matrix",
            "release_date": "1999-03-31",
            "duration": 136
        }))
        .unwrap();
        let update = FilmUpdate::from(req);
        assert!(update.likes.is_empty());
        assert_eq!(update.description, "");
    }
}

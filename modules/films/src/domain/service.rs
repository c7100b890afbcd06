use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use users::contract::client::UsersApi;

use crate::contract::model::{Film, FilmUpdate, NewFilm};
use crate::domain::error::DomainError;
use crate::domain::repo::FilmsRepository;
use crate::domain::validate;

/// Domain service with business rules for film management. Depends on the
/// repository port and on the users module's contract client (to resolve
/// like operands), never on other modules' internals.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn FilmsRepository>,
    users: Arc<dyn UsersApi>,
}

/// Popularity order: descending like count, ties broken by ascending id.
fn by_likes_desc(a: &Film, b: &Film) -> Ordering {
    b.likes
        .len()
        .cmp(&a.likes.len())
        .then_with(|| a.id.cmp(&b.id))
}

impl Service {
    pub fn new(repo: Arc<dyn FilmsRepository>, users: Arc<dyn UsersApi>) -> Self {
        Self { repo, users }
    }

    #[instrument(name = "films.service.find_all", skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Film>, DomainError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    #[instrument(name = "films.service.get_film", skip(self))]
    pub async fn get_film(&self, id: i64) -> Result<Film, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::film_not_found(id))
    }

    #[instrument(
        name = "films.service.create_film",
        skip(self, new_film),
        fields(name = %new_film.name)
    )]
    pub async fn create_film(&self, new_film: NewFilm) -> Result<Film, DomainError> {
        info!("Creating new film");

        let details = validate::check_fields(&new_film.name);
        if !details.is_empty() {
            return Err(DomainError::invalid_fields(details));
        }

        // The duplicate check runs before the field validator.
        self.check_duplicate_name(&new_film.name, None).await?;
        validate::validate(&new_film.description, new_film.release_date, new_film.duration)?;

        let film = Film {
            id: 0,
            name: new_film.name,
            description: new_film.description,
            release_date: new_film.release_date,
            duration: new_film.duration,
            likes: BTreeSet::new(),
        };

        let film = self
            .repo
            .save(film)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully created film with id={}", film.id);
        Ok(film)
    }

    #[instrument(name = "films.service.update_film", skip(self, update))]
    pub async fn update_film(&self, id: i64, update: FilmUpdate) -> Result<Film, DomainError> {
        info!("Updating film");

        let details = validate::check_fields(&update.name);
        if !details.is_empty() {
            return Err(DomainError::invalid_fields(details));
        }

        if !self
            .repo
            .exists_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            return Err(DomainError::film_not_found(id));
        }

        self.check_duplicate_name(&update.name, Some(id)).await?;
        validate::validate(&update.description, update.release_date, update.duration)?;

        // Wholesale replacement, like set included.
        let film = Film {
            id,
            name: update.name,
            description: update.description,
            release_date: update.release_date,
            duration: update.duration,
            likes: update.likes,
        };

        let film = self
            .repo
            .update(film)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully updated film");
        Ok(film)
    }

    /// Record a like. The user is resolved first, then the film; adding the
    /// same like twice is a no-op.
    #[instrument(name = "films.service.add_like", skip(self))]
    pub async fn add_like(&self, film_id: i64, user_id: i64) -> Result<(), DomainError> {
        self.users.get_user(user_id).await?;

        let liked = self
            .repo
            .add_like(film_id, user_id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        if !liked {
            return Err(DomainError::film_not_found(film_id));
        }

        debug!("User {} liked film {}", user_id, film_id);
        Ok(())
    }

    /// Remove a like; removing an absent like is a successful no-op.
    #[instrument(name = "films.service.remove_like", skip(self))]
    pub async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<(), DomainError> {
        self.users.get_user(user_id).await?;

        let removed = self
            .repo
            .remove_like(film_id, user_id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        if !removed {
            return Err(DomainError::film_not_found(film_id));
        }

        debug!("User {} removed the like from film {}", user_id, film_id);
        Ok(())
    }

    /// Up to `count` films by descending like count, ties by ascending id.
    /// A non-positive count yields an empty list.
    #[instrument(name = "films.service.popular", skip(self))]
    pub async fn popular(&self, count: i64) -> Result<Vec<Film>, DomainError> {
        if count <= 0 {
            return Ok(Vec::new());
        }

        let mut films = self
            .repo
            .find_all()
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        films.sort_by(by_likes_desc);
        films.truncate(count as usize);
        Ok(films)
    }

    async fn check_duplicate_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), DomainError> {
        let films = self
            .repo
            .find_all()
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let duplicate = films
            .iter()
            .any(|f| Some(f.id) != exclude_id && f.name == name);
        if duplicate {
            debug!("Film name '{}' is already taken", name);
            return Err(DomainError::name_already_exists(name));
        }
        Ok(())
    }
}

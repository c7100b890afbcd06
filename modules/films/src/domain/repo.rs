use crate::contract::model::Film;
use async_trait::async_trait;

/// Port for the domain layer: persistence operations the domain needs.
#[async_trait]
pub trait FilmsRepository: Send + Sync {
    /// Snapshot of all stored films, order unspecified.
    async fn find_all(&self) -> anyhow::Result<Vec<Film>>;
    /// Load a film by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Film>>;
    /// Store a new film; the repository assigns the id and returns the
    /// film with it populated.
    async fn save(&self, film: Film) -> anyhow::Result<Film>;
    /// Replace an existing film wholesale (by primary key in `film.id`).
    async fn update(&self, film: Film) -> anyhow::Result<Film>;
    /// Membership check by id.
    async fn exists_by_id(&self, id: i64) -> anyhow::Result<bool>;
    /// Add the user id to the film's like set in place. Idempotent.
    /// Returns false when the film id is absent.
    async fn add_like(&self, film_id: i64, user_id: i64) -> anyhow::Result<bool>;
    /// Remove the user id from the film's like set; removing an absent
    /// like is a no-op. Returns false when the film id is absent.
    async fn remove_like(&self, film_id: i64, user_id: i64) -> anyhow::Result<bool>;
}

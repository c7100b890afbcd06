use async_trait::async_trait;
use memstore::{Entity, MemStore};

use crate::contract::model::Film;
use crate::domain::repo::FilmsRepository;

impl Entity for Film {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// In-memory adapter for the films repository port, backed by the generic
/// store. Like-set mutations happen in place under the store lock.
pub struct InMemoryFilmsRepository {
    store: MemStore<Film>,
}

impl InMemoryFilmsRepository {
    pub fn new() -> Self {
        Self {
            store: MemStore::new(),
        }
    }
}

impl Default for InMemoryFilmsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilmsRepository for InMemoryFilmsRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<Film>> {
        Ok(self.store.find_all())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Film>> {
        Ok(self.store.find_by_id(id))
    }

    async fn save(&self, film: Film) -> anyhow::Result<Film> {
        Ok(self.store.save(film))
    }

    async fn update(&self, film: Film) -> anyhow::Result<Film> {
        Ok(self.store.update(film)?)
    }

    async fn exists_by_id(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.store.exists_by_id(id))
    }

    async fn add_like(&self, film_id: i64, user_id: i64) -> anyhow::Result<bool> {
        Ok(self
            .store
            .modify(film_id, |film| {
                film.likes.insert(user_id);
            })
            .is_some())
    }

    async fn remove_like(&self, film_id: i64, user_id: i64) -> anyhow::Result<bool> {
        Ok(self
            .store
            .modify(film_id, |film| {
                film.likes.remove(&user_id);
            })
            .is_some())
    }
}

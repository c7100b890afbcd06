use async_trait::async_trait;
use memstore::{Entity, MemStore};

use crate::contract::model::User;
use crate::domain::repo::UsersRepository;

impl Entity for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// In-memory adapter for the users repository port, backed by the generic
/// store. Friendship edges are written on both endpoints under a single
/// lock acquisition.
pub struct InMemoryUsersRepository {
    store: MemStore<User>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self {
            store: MemStore::new(),
        }
    }
}

impl Default for InMemoryUsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.store.find_all())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        Ok(self.store.find_by_id(id))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .store
            .find_first(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn save(&self, user: User) -> anyhow::Result<User> {
        Ok(self.store.save(user))
    }

    async fn update(&self, user: User) -> anyhow::Result<User> {
        Ok(self.store.update(user)?)
    }

    async fn exists_by_id(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.store.exists_by_id(id))
    }

    async fn add_friend(&self, user_id: i64, friend_id: i64) -> anyhow::Result<bool> {
        Ok(self.store.modify_pair(user_id, friend_id, |user, other| {
            user.friends.insert(other);
        }))
    }

    async fn remove_friend(&self, user_id: i64, friend_id: i64) -> anyhow::Result<bool> {
        Ok(self.store.modify_pair(user_id, friend_id, |user, other| {
            user.friends.remove(&other);
        }))
    }
}

use crate::contract::model::User;
use async_trait::async_trait;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Snapshot of all stored users, order unspecified.
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
    /// Load a user by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
    /// Linear scan for the first user with this email, case-insensitive.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    /// Store a new user; the repository assigns the id and returns the
    /// user with it populated.
    async fn save(&self, user: User) -> anyhow::Result<User>;
    /// Replace an existing user wholesale (by primary key in `user.id`).
    async fn update(&self, user: User) -> anyhow::Result<User>;
    /// Membership check by id.
    async fn exists_by_id(&self, id: i64) -> anyhow::Result<bool>;
    /// Write the symmetric friendship edge on both users in one atomic
    /// step. Returns false when either id is absent.
    async fn add_friend(&self, user_id: i64, friend_id: i64) -> anyhow::Result<bool>;
    /// Remove the symmetric friendship edge from both users. Returns false
    /// when either id is absent; removing a non-existent edge is a no-op.
    async fn remove_friend(&self, user_id: i64, friend_id: i64) -> anyhow::Result<bool>;
}

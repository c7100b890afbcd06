use async_trait::async_trait;

use crate::contract::error::UsersError;
use crate::contract::model::User;

/// Read-side API of the users module, the surface other modules consume
/// (the films module resolves like operands through it).
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Get a user by id.
    async fn get_user(&self, id: i64) -> Result<User, UsersError>;

    /// List all users.
    async fn list_users(&self) -> Result<Vec<User>, UsersError>;
}

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{NewUser, User, UserUpdate};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;
use crate::domain::validate;

/// Domain service with business rules for user management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "users.service.find_all", skip(self))]
    pub async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    #[instrument(name = "users.service.get_user", skip(self))]
    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    #[instrument(
        name = "users.service.create_user",
        skip(self, new_user),
        fields(email = %new_user.email, login = %new_user.login)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        let details = validate::check_fields(&new_user.email, &new_user.login);
        if !details.is_empty() {
            return Err(DomainError::invalid_fields(details));
        }

        self.check_duplicate_email(&new_user.email, None).await?;
        validate::validate(&new_user)?;

        // A blank name defaults to the login at creation time.
        let name = match new_user.name {
            Some(ref n) if !n.trim().is_empty() => n.clone(),
            _ => new_user.login.clone(),
        };

        let user = User {
            id: 0,
            email: new_user.email,
            login: new_user.login,
            name,
            birthday: new_user.birthday,
            friends: BTreeSet::new(),
        };

        let user = self
            .repo
            .save(user)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(name = "users.service.update_user", skip(self, update))]
    pub async fn update_user(&self, id: i64, update: UserUpdate) -> Result<User, DomainError> {
        info!("Updating user");

        let details = validate::check_fields(&update.email, &update.login);
        if !details.is_empty() {
            return Err(DomainError::invalid_fields(details));
        }

        if !self
            .repo
            .exists_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            return Err(DomainError::user_not_found(id));
        }

        self.check_duplicate_email(&update.email, Some(id)).await?;

        // A blank name defaults to the login, same as on create.
        let name = match update.name {
            Some(ref n) if !n.trim().is_empty() => n.clone(),
            _ => update.login.clone(),
        };

        // The stored value is replaced wholesale; the domain validator is
        // not re-run on update.
        let user = User {
            id,
            email: update.email,
            login: update.login,
            name,
            birthday: update.birthday,
            friends: update.friends,
        };

        let user = self
            .repo
            .update(user)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully updated user");
        Ok(user)
    }

    /// Write the symmetric friendship edge: one call makes each user appear
    /// in the other's friend set. Idempotent.
    #[instrument(name = "users.service.add_friend", skip(self))]
    pub async fn add_friend(&self, user_id: i64, friend_id: i64) -> Result<(), DomainError> {
        self.ensure_exists(user_id).await?;
        self.ensure_exists(friend_id).await?;

        let linked = self
            .repo
            .add_friend(user_id, friend_id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        if !linked {
            return Err(DomainError::user_not_found(user_id));
        }

        debug!("User {} and {} are now friends", user_id, friend_id);
        Ok(())
    }

    /// Symmetric removal, mirrors `add_friend`. Removing an absent edge is
    /// a successful no-op.
    #[instrument(name = "users.service.remove_friend", skip(self))]
    pub async fn remove_friend(&self, user_id: i64, friend_id: i64) -> Result<(), DomainError> {
        self.ensure_exists(user_id).await?;
        self.ensure_exists(friend_id).await?;

        let unlinked = self
            .repo
            .remove_friend(user_id, friend_id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        if !unlinked {
            return Err(DomainError::user_not_found(user_id));
        }

        debug!("User {} removed the friendship with {}", user_id, friend_id);
        Ok(())
    }

    #[instrument(name = "users.service.friends", skip(self))]
    pub async fn friends(&self, user_id: i64) -> Result<Vec<User>, DomainError> {
        let user = self.get_user(user_id).await?;
        self.resolve_ids(user.friends.iter().copied()).await
    }

    #[instrument(name = "users.service.common_friends", skip(self))]
    pub async fn common_friends(
        &self,
        user_id: i64,
        other_id: i64,
    ) -> Result<Vec<User>, DomainError> {
        let user = self.get_user(user_id).await?;
        let other = self.get_user(other_id).await?;

        let common = user.friends.intersection(&other.friends).copied();
        self.resolve_ids(common).await
    }

    // --- helpers ---

    async fn ensure_exists(&self, id: i64) -> Result<(), DomainError> {
        if !self
            .repo
            .exists_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            return Err(DomainError::user_not_found(id));
        }
        Ok(())
    }

    async fn resolve_ids(
        &self,
        ids: impl Iterator<Item = i64>,
    ) -> Result<Vec<User>, DomainError> {
        let mut users = Vec::new();
        for id in ids {
            // Update replaces the friend set wholesale without resolving
            // the ids, so a friend id may point at no stored user.
            let user = self
                .repo
                .find_by_id(id)
                .await
                .map_err(|e| DomainError::storage(e.to_string()))?
                .ok_or_else(|| DomainError::user_not_found(id))?;
            users.push(user);
        }
        Ok(users)
    }

    async fn check_duplicate_email(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), DomainError> {
        let existing = self
            .repo
            .find_by_email(email)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        if let Some(user) = existing {
            if Some(user.id) != exclude_id {
                debug!("Email {} is already taken by user {}", email, user.id);
                return Err(DomainError::email_already_exists(email));
            }
        }
        Ok(())
    }
}

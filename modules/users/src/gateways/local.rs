use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{client::UsersApi, error::UsersError, model::User};
use crate::domain::service::Service;

/// Local implementation of the UsersApi trait that delegates to the domain
/// service in-process.
pub struct UsersLocalClient {
    service: Arc<Service>,
}

impl UsersLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersApi for UsersLocalClient {
    async fn get_user(&self, id: i64) -> Result<User, UsersError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn list_users(&self) -> Result<Vec<User>, UsersError> {
        self.service.find_all().await.map_err(Into::into)
    }
}

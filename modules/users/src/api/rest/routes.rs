use axum::{
    routing::{get, put},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the users router. The service rides along as an extension, the
/// way every module hands its domain service to its handlers.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .put(handlers::update_user),
        )
        .route("/users/{id}", get(handlers::get_user))
        .route("/users/{id}/friends", get(handlers::friends))
        .route(
            "/users/{id}/friends/common/{other_id}",
            get(handlers::common_friends),
        )
        .route(
            "/users/{id}/friends/{friend_id}",
            put(handlers::add_friend).delete(handlers::remove_friend),
        )
        .layer(Extension(service))
}

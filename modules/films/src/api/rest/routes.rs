use axum::{
    routing::{get, put},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the films router. The static `/films/popular` segment is matched
/// ahead of the `/films/{id}` parameter route.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/films",
            get(handlers::list_films)
                .post(handlers::create_film)
                .put(handlers::update_film),
        )
        .route("/films/popular", get(handlers::popular_films))
        .route("/films/{id}", get(handlers::get_film))
        .route(
            "/films/{id}/like/{user_id}",
            put(handlers::add_like).delete(handlers::remove_like),
        )
        .layer(Extension(service))
}

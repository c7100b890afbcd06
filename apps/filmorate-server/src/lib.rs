//! Server wiring: builds the in-memory stores, the module services and the
//! merged axum router that the binary serves.

use axum::{response::Json, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use films::infra::storage::memory::InMemoryFilmsRepository;
use users::gateways::local::UsersLocalClient;
use users::infra::storage::memory::InMemoryUsersRepository;

pub mod openapi;

/// Build the full application router with fresh in-memory state.
///
/// Module wiring goes through contract clients: the films service talks to
/// the users module via `UsersApi`, never through its internals.
pub fn build_router() -> Router {
    let users_service = Arc::new(users::domain::service::Service::new(Arc::new(
        InMemoryUsersRepository::new(),
    )));
    let users_client = Arc::new(UsersLocalClient::new(users_service.clone()));
    let films_service = Arc::new(films::domain::service::Service::new(
        Arc::new(InMemoryFilmsRepository::new()),
        users_client,
    ));

    Router::new()
        .merge(users::api::rest::routes::router(users_service))
        .merge(films::api::rest::routes::router(films_service))
        .route("/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
}

async fn openapi_json() -> Json<serde_json::Value> {
    // The document is static; serialization cannot fail for derived specs.
    Json(serde_json::to_value(openapi::ApiDoc::openapi()).unwrap_or_default())
}

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use httpapi::{ApiError, ErrorResponse};

use crate::api::rest::dto::{CreateFilmReq, FilmDto, PopularQuery, UpdateFilmReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

const DEFAULT_POPULAR_COUNT: i64 = 10;

/// List all films.
#[utoipa::path(
    get,
    path = "/films",
    tag = "films",
    operation_id = "films.list",
    responses((status = 200, description = "List of films", body = [FilmDto]))
)]
pub async fn list_films(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<FilmDto>>, ApiError> {
    let films = svc.find_all().await.map_err(|e| map_domain_error(&e))?;
    Ok(Json(films.into_iter().map(FilmDto::from).collect()))
}

/// Get a specific film by id.
#[utoipa::path(
    get,
    path = "/films/{id}",
    tag = "films",
    operation_id = "films.get",
    params(("id" = i64, Path, description = "Film id")),
    responses(
        (status = 200, description = "Film found", body = FilmDto),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn get_film(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<FilmDto>, ApiError> {
    let film = svc.get_film(id).await.map_err(|e| map_domain_error(&e))?;
    Ok(Json(FilmDto::from(film)))
}

/// Create a new film.
#[utoipa::path(
    post,
    path = "/films",
    tag = "films",
    operation_id = "films.create",
    request_body = CreateFilmReq,
    responses(
        (status = 200, description = "Created film", body = FilmDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 409, description = "Conflict", body = ErrorResponse)
    )
)]
pub async fn create_film(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateFilmReq>,
) -> Result<Json<FilmDto>, ApiError> {
    info!("Creating film: {:?}", req);

    let film = svc
        .create_film(req.into())
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(Json(FilmDto::from(film)))
}

/// Update an existing film. The id travels in the body and must refer to a
/// stored film; a payload without an id is rejected, never treated as a
/// create.
#[utoipa::path(
    put,
    path = "/films",
    tag = "films",
    operation_id = "films.update",
    request_body = UpdateFilmReq,
    responses(
        (status = 200, description = "Updated film", body = FilmDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 409, description = "Conflict", body = ErrorResponse)
    )
)]
pub async fn update_film(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<UpdateFilmReq>,
) -> Result<Json<FilmDto>, ApiError> {
    info!("Updating film: {:?}", req);

    let id = req.id.ok_or_else(required_id)?;
    let film = svc
        .update_film(id, req.into())
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(Json(FilmDto::from(film)))
}

/// Record a user's like on a film.
#[utoipa::path(
    put,
    path = "/films/{id}/like/{user_id}",
    tag = "films",
    operation_id = "films.add_like",
    params(
        ("id" = i64, Path, description = "Film id"),
        ("user_id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Like recorded"),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn add_like(
    Extension(svc): Extension<Arc<Service>>,
    Path((id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    svc.add_like(id, user_id)
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(StatusCode::OK)
}

/// Remove a user's like from a film.
#[utoipa::path(
    delete,
    path = "/films/{id}/like/{user_id}",
    tag = "films",
    operation_id = "films.remove_like",
    params(
        ("id" = i64, Path, description = "Film id"),
        ("user_id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Like removed"),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn remove_like(
    Extension(svc): Extension<Arc<Service>>,
    Path((id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    svc.remove_like(id, user_id)
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(StatusCode::OK)
}

/// Most-popular films ranked by like count.
#[utoipa::path(
    get,
    path = "/films/popular",
    tag = "films",
    operation_id = "films.popular",
    params(("count" = Option<i64>, Query, description = "Maximum number of films to return (default 10)")),
    responses((status = 200, description = "Top films by likes", body = [FilmDto]))
)]
pub async fn popular_films(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<PopularQuery>,
) -> Result<Json<Vec<FilmDto>>, ApiError> {
    let count = query.count.unwrap_or(DEFAULT_POPULAR_COUNT);
    let films = svc.popular(count).await.map_err(|e| map_domain_error(&e))?;
    Ok(Json(films.into_iter().map(FilmDto::from).collect()))
}

fn required_id() -> ApiError {
    let mut details = BTreeMap::new();
    details.insert("id".to_string(), "is required for update".to_string());
    httpapi::validation_failed(details)
}

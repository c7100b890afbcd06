use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use httpapi::{ApiError, ErrorResponse};

use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserDto};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    operation_id = "users.list",
    responses((status = 200, description = "List of users", body = [UserDto]))
)]
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = svc.find_all().await.map_err(|e| map_domain_error(&e))?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Get a specific user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    operation_id = "users.get",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, ApiError> {
    let user = svc.get_user(id).await.map_err(|e| map_domain_error(&e))?;
    Ok(Json(UserDto::from(user)))
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    operation_id = "users.create",
    request_body = CreateUserReq,
    responses(
        (status = 200, description = "Created user", body = UserDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 409, description = "Conflict", body = ErrorResponse)
    )
)]
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateUserReq>,
) -> Result<Json<UserDto>, ApiError> {
    info!("Creating user: {:?}", req);

    let user = svc
        .create_user(req.into())
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(Json(UserDto::from(user)))
}

/// Update an existing user. The id travels in the body and must refer to a
/// stored user; a payload without an id is rejected, never treated as a
/// create.
#[utoipa::path(
    put,
    path = "/users",
    tag = "users",
    operation_id = "users.update",
    request_body = UpdateUserReq,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 409, description = "Conflict", body = ErrorResponse)
    )
)]
pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<UpdateUserReq>,
) -> Result<Json<UserDto>, ApiError> {
    info!("Updating user: {:?}", req);

    let id = req.id.ok_or_else(required_id)?;
    let user = svc
        .update_user(id, req.into())
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(Json(UserDto::from(user)))
}

/// Record a symmetric friendship between two users.
#[utoipa::path(
    put,
    path = "/users/{id}/friends/{friend_id}",
    tag = "users",
    operation_id = "users.add_friend",
    params(
        ("id" = i64, Path, description = "User id"),
        ("friend_id" = i64, Path, description = "Friend user id")
    ),
    responses(
        (status = 200, description = "Friendship recorded"),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn add_friend(
    Extension(svc): Extension<Arc<Service>>,
    Path((id, friend_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    svc.add_friend(id, friend_id)
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(StatusCode::OK)
}

/// Remove a friendship from both users.
#[utoipa::path(
    delete,
    path = "/users/{id}/friends/{friend_id}",
    tag = "users",
    operation_id = "users.remove_friend",
    params(
        ("id" = i64, Path, description = "User id"),
        ("friend_id" = i64, Path, description = "Friend user id")
    ),
    responses(
        (status = 200, description = "Friendship removed"),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn remove_friend(
    Extension(svc): Extension<Arc<Service>>,
    Path((id, friend_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    svc.remove_friend(id, friend_id)
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(StatusCode::OK)
}

/// List a user's friends as full user records.
#[utoipa::path(
    get,
    path = "/users/{id}/friends",
    tag = "users",
    operation_id = "users.friends",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "List of friends", body = [UserDto]),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn friends(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = svc.friends(id).await.map_err(|e| map_domain_error(&e))?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Friends both users have in common.
#[utoipa::path(
    get,
    path = "/users/{id}/friends/common/{other_id}",
    tag = "users",
    operation_id = "users.common_friends",
    params(
        ("id" = i64, Path, description = "User id"),
        ("other_id" = i64, Path, description = "Other user id")
    ),
    responses(
        (status = 200, description = "Common friends", body = [UserDto]),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn common_friends(
    Extension(svc): Extension<Arc<Service>>,
    Path((id, other_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = svc
        .common_friends(id, other_id)
        .await
        .map_err(|e| map_domain_error(&e))?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

fn required_id() -> ApiError {
    let mut details = BTreeMap::new();
    details.insert("id".to_string(), "is required for update".to_string());
    httpapi::validation_failed(details)
}

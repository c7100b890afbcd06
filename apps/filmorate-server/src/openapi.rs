//! Aggregated OpenAPI document for all REST modules.

use utoipa::OpenApi;

use films::api::rest::dto::{CreateFilmReq, FilmDto, UpdateFilmReq};
use httpapi::ErrorResponse;
use users::api::rest::dto::{CreateUserReq, UpdateUserReq, UserDto};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filmorate API",
        description = "Films, users, likes and friendships",
        version = "0.1.0"
    ),
    paths(
        users::api::rest::handlers::list_users,
        users::api::rest::handlers::get_user,
        users::api::rest::handlers::create_user,
        users::api::rest::handlers::update_user,
        users::api::rest::handlers::add_friend,
        users::api::rest::handlers::remove_friend,
        users::api::rest::handlers::friends,
        users::api::rest::handlers::common_friends,
        films::api::rest::handlers::list_films,
        films::api::rest::handlers::get_film,
        films::api::rest::handlers::create_film,
        films::api::rest::handlers::update_film,
        films::api::rest::handlers::add_like,
        films::api::rest::handlers::remove_like,
        films::api::rest::handlers::popular_films,
    ),
    components(schemas(
        UserDto,
        CreateUserReq,
        UpdateUserReq,
        FilmDto,
        CreateFilmReq,
        UpdateFilmReq,
        ErrorResponse,
    )),
    tags(
        (name = "users", description = "User accounts and friendships"),
        (name = "films", description = "Film catalog and likes")
    )
)]
pub struct ApiDoc;

//! REST-level tests for the films module.
//!
//! Each test wires the real films service to an in-memory repository and a
//! real users service behind the local contract client, then drives the
//! axum router via `tower::ServiceExt`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use films::{
    api::rest::routes, domain::service::Service,
    infra::storage::memory::InMemoryFilmsRepository,
};
use users::{
    contract::model::NewUser, domain::service::Service as UsersService,
    gateways::local::UsersLocalClient,
    infra::storage::memory::InMemoryUsersRepository,
};

struct TestApp {
    router: Router,
    users: Arc<UsersService>,
}

fn test_app() -> TestApp {
    let users = Arc::new(UsersService::new(Arc::new(InMemoryUsersRepository::new())));
    let client = Arc::new(UsersLocalClient::new(users.clone()));
    let service = Arc::new(Service::new(
        Arc::new(InMemoryFilmsRepository::new()),
        client,
    ));
    TestApp {
        router: routes::router(service),
        users,
    }
}

impl TestApp {
    async fn register_user(&self, email: &str, login: &str) -> i64 {
        self.users
            .create_user(NewUser {
                email: email.to_string(),
                login: login.to_string(),
                name: None,
                birthday: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            })
            .await
            .unwrap()
            .id
    }
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn film_payload(name: &str) -> Value {
    json!({
        "name": name,
        "description": "a film",
        "release_date": "1999-03-31",
        "duration": 136
    })
}

async fn create_film(router: &Router, name: &str) -> i64 {
    let (status, body) = send(router, "POST", "/films", Some(film_payload(name))).await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn create_assigns_id_and_echoes_fields() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        "POST",
        "/films",
        Some(json!({
            "name": "Matrix",
            "description": "Welcome to the desert of the real",
            "release_date": "1999-03-31",
            "duration": 136
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["name"], "Matrix");
    assert_eq!(body["description"], "Welcome to the desert of the real");
    assert_eq!(body["release_date"], "1999-03-31");
    assert_eq!(body["likes"], json!([]));
}

#[tokio::test]
async fn overlong_description_is_rejected() {
    let app = test_app();
    let mut payload = film_payload("Long");
    payload["description"] = json!("A".repeat(201));

    let (status, body) = send(&app.router, "POST", "/films", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Film description must not exceed 200 characters"
    );
}

#[tokio::test]
async fn release_before_first_screening_is_rejected() {
    let app = test_app();
    let mut payload = film_payload("Early");
    payload["release_date"] = json!("1895-12-27");

    let (status, body) = send(&app.router, "POST", "/films", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Release date must not be earlier than 1895-12-28");
}

#[tokio::test]
async fn boundary_release_date_and_zero_duration_pass() {
    let app = test_app();
    let mut payload = film_payload("Workers Leaving the Factory");
    payload["release_date"] = json!("1895-12-28");
    payload["duration"] = json!(0);

    let (status, _) = send(&app.router, "POST", "/films", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn negative_duration_is_rejected() {
    let app = test_app();
    let mut payload = film_payload("Backwards");
    payload["duration"] = json!(-1);

    let (status, body) = send(&app.router, "POST", "/films", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Film duration must be a non-negative number");
}

#[tokio::test]
async fn blank_name_is_a_field_error() {
    let app = test_app();
    let (status, body) = send(&app.router, "POST", "/films", Some(film_payload("  "))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"]["name"], "must not be blank");
}

#[tokio::test]
async fn duplicate_name_is_conflict() {
    let app = test_app();
    create_film(&app.router, "Matrix").await;

    let (status, body) = send(&app.router, "POST", "/films", Some(film_payload("Matrix"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "A film with this name already exists");
}

#[tokio::test]
async fn film_names_compare_case_sensitively() {
    let app = test_app();
    create_film(&app.router, "Matrix").await;

    let (status, _) = send(&app.router, "POST", "/films", Some(film_payload("matrix"))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = test_app();
    let mut payload = film_payload("Ghost");
    payload["id"] = json!(999);

    let (status, body) = send(&app.router, "PUT", "/films", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Film with id = 999 not found");
}

#[tokio::test]
async fn update_without_id_is_validation_failure() {
    let app = test_app();
    let (status, body) = send(&app.router, "PUT", "/films", Some(film_payload("Matrix"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["id"], "is required for update");
}

#[tokio::test]
async fn update_keeping_own_name_is_not_a_duplicate() {
    let app = test_app();
    let id = create_film(&app.router, "Matrix").await;

    let mut payload = film_payload("Matrix");
    payload["id"] = json!(id);
    payload["duration"] = json!(150);
    let (status, body) = send(&app.router, "PUT", "/films", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"], 150);
}

#[tokio::test]
async fn renaming_to_another_films_name_is_conflict() {
    let app = test_app();
    create_film(&app.router, "Matrix").await;
    let id = create_film(&app.router, "Reloaded").await;

    let mut payload = film_payload("Matrix");
    payload["id"] = json!(id);
    let (status, body) = send(&app.router, "PUT", "/films", Some(payload)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "A film with this name already exists");
}

#[tokio::test]
async fn like_twice_then_remove_once_clears_it() {
    let app = test_app();
    let film = create_film(&app.router, "Matrix").await;
    let user = app.register_user("neo@matrix.io", "neo").await;

    let uri = format!("/films/{film}/like/{user}");
    let (status, _) = send(&app.router, "PUT", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    send(&app.router, "PUT", &uri, None).await; // idempotent

    let (_, body) = send(&app.router, "GET", &format!("/films/{film}"), None).await;
    assert_eq!(body["likes"], json!([user]));

    let (status, _) = send(&app.router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app.router, "GET", &format!("/films/{film}"), None).await;
    assert_eq!(body["likes"], json!([]));
}

#[tokio::test]
async fn like_with_unknown_user_is_not_found() {
    let app = test_app();
    let film = create_film(&app.router, "Matrix").await;

    let (status, body) = send(&app.router, "PUT", &format!("/films/{film}/like/999"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User with id = 999 not found");
}

#[tokio::test]
async fn like_on_unknown_film_is_not_found() {
    let app = test_app();
    let user = app.register_user("neo@matrix.io", "neo").await;

    let (status, body) = send(&app.router, "PUT", &format!("/films/999/like/{user}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Film with id = 999 not found");
}

#[tokio::test]
async fn popular_ranks_by_likes_then_id_and_truncates() {
    let app = test_app();
    let quiet = create_film(&app.router, "Quiet").await;
    let hit = create_film(&app.router, "Hit").await;
    let tied = create_film(&app.router, "Tied").await;

    let u1 = app.register_user("u1@mail.io", "u1").await;
    let u2 = app.register_user("u2@mail.io", "u2").await;

    // hit: 2 likes, tied: 0 likes, quiet: 0 likes (quiet has the lower id)
    send(&app.router, "PUT", &format!("/films/{hit}/like/{u1}"), None).await;
    send(&app.router, "PUT", &format!("/films/{hit}/like/{u2}"), None).await;

    let (status, body) = send(&app.router, "GET", "/films/popular", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![hit, quiet, tied]);

    let (_, body) = send(&app.router, "GET", "/films/popular?count=1", None).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![hit]);
}

#[tokio::test]
async fn popular_with_non_positive_count_is_empty() {
    let app = test_app();
    create_film(&app.router, "Matrix").await;

    let (status, body) = send(&app.router, "GET", "/films/popular?count=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = send(&app.router, "GET", "/films/popular?count=-3", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_missing_film_is_not_found() {
    let app = test_app();
    let (status, body) = send(&app.router, "GET", "/films/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Film with id = 42 not found");
}

//! Router-level integration tests for the user endpoints.
//!
//! Drives the full Axum router with an in-memory store, asserting the
//! endpoint contract: status codes, response envelope, and machine-readable
//! error codes.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use roster_config::ServerConfig;
use roster_rest::{create_router, AppState};
use roster_service::{UserService, UserServiceImpl};
use roster_store::InMemoryUserRepository;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_router() -> Router {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(repository));
    let state = AppState::new(user_service);
    create_router(state, &ServerConfig::default())
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn create_body(user_name: &str, email: &str) -> Value {
    json!({
        "user_name": user_name,
        "email": email,
        "display_name": "Test User",
    })
}

#[tokio::test]
async fn test_create_user_returns_created() {
    let router = test_router();

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "alice@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["user_name"], json!("alice"));
    assert_eq!(body["data"]["email"], json!("alice@example.com"));
    assert_eq!(body["data"]["display_name"], json!("Test User"));
}

#[tokio::test]
async fn test_create_user_empty_username() {
    let router = test_router();

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("", "alice@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("ERR_EMPTY_USERNAME"));
}

#[tokio::test]
async fn test_create_user_empty_email() {
    let router = test_router();

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", ""),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], json!("ERR_EMPTY_EMAIL"));
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let router = test_router();

    let first = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "alice@example.com"),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "other@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = response_json(second).await;
    assert_eq!(body["error"]["code"], json!("ERR_USERNAME_EXISTS:alice"));
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let router = test_router();

    router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "alice@example.com"),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("bob", "alice@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response_json(response).await;
    assert_eq!(
        body["error"]["code"],
        json!("ERR_EMAIL_EXISTS:alice@example.com")
    );
}

#[tokio::test]
async fn test_create_then_get_returns_identical_fields() {
    let router = test_router();

    router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "alice@example.com"),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(empty_request(Method::GET, "/api/v1/users/alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["user_name"], json!("alice"));
    assert_eq!(body["data"]["email"], json!("alice@example.com"));
    assert_eq!(body["data"]["display_name"], json!("Test User"));
}

#[tokio::test]
async fn test_get_user_not_found() {
    let router = test_router();

    let response = router
        .oneshot(empty_request(Method::GET, "/api/v1/users/ghost"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], json!("ERR_USER_NOT_FOUND"));
}

#[tokio::test]
async fn test_update_user_not_found() {
    let router = test_router();

    let response = router
        .oneshot(json_request(
            Method::PATCH,
            "/api/v1/users/ghost",
            json!({"display_name": "Ghost"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], json!("ERR_USER_NOT_FOUND"));
}

#[tokio::test]
async fn test_update_display_name_leaves_other_fields() {
    let router = test_router();

    router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "alice@example.com"),
        ))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/api/v1/users/alice",
            json!({"display_name": "Alice B."}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["user_name"], json!("alice"));
    assert_eq!(body["data"]["email"], json!("alice@example.com"));
    assert_eq!(body["data"]["display_name"], json!("Alice B."));
}

#[tokio::test]
async fn test_update_rename_rekeys_record() {
    let router = test_router();

    router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "alice@example.com"),
        ))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/api/v1/users/alice",
            json!({"user_name": "alicia"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let old = router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1/users/alice"))
        .await
        .unwrap();
    assert_eq!(old.status(), StatusCode::NOT_FOUND);

    let new = router
        .oneshot(empty_request(Method::GET, "/api/v1/users/alicia"))
        .await
        .unwrap();
    assert_eq!(new.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_empty_email_rejected() {
    let router = test_router();

    router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "alice@example.com"),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(json_request(
            Method::PATCH,
            "/api/v1/users/alice",
            json!({"email": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], json!("ERR_EMPTY_EMAIL"));
}

#[tokio::test]
async fn test_delete_user_then_delete_again() {
    let router = test_router();

    router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            create_body("alice", "alice@example.com"),
        ))
        .await
        .unwrap();

    let first = router
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/v1/users/alice"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = router
        .oneshot(empty_request(Method::DELETE, "/api/v1/users/alice"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let body = response_json(second).await;
    assert_eq!(body["error"]["code"], json!("ERR_USER_NOT_FOUND"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router();

    let response = router
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
}

//! Authentication API integration tests
//!
//! Drives the full router over HTTP for both store backends: the
//! signup/login/verify flow, the protected identity route, and the
//! error paths the API contract promises.

use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use jsonwebtoken::Algorithm;
use tempfile::TempDir;

use credauth::server::config::{ServerConfig, StoreBackend};
use credauth::server::create_app;

const TEST_SECRET: &str = "integration-test-secret";

fn test_config(store: StoreBackend) -> ServerConfig {
    ServerConfig {
        port: 0,
        jwt_secret: TEST_SECRET.to_string(),
        jwt_algorithm: Algorithm::HS256,
        token_ttl: Duration::from_secs(30 * 60),
        store,
    }
}

async fn file_backed_server(dir: &TempDir) -> TestServer {
    let config = test_config(StoreBackend::File {
        path: dir.path().join("credentials.json"),
    });
    TestServer::new(create_app(&config).await.unwrap()).unwrap()
}

async fn database_backed_server(dir: &TempDir) -> TestServer {
    let config = test_config(StoreBackend::Database {
        url: format!("sqlite://{}", dir.path().join("creds.db").display()),
    });
    TestServer::new(create_app(&config).await.unwrap()).unwrap()
}

#[tokio::test]
async fn test_signup_login_verify_flow() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    // Signup
    let response = server
        .post("/api/signup")
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "pw1"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    // Login with the same credentials
    let response = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "pw1"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap();
    assert!(!token.is_empty());

    // Verify the freshly minted token
    let response = server
        .post("/api/verify-token")
        .json(&serde_json::json!({ "token": token }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["valid"], true);
    assert_eq!(body["email"], "a@x.com");
}

#[tokio::test]
async fn test_duplicate_signup_rejected() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    let body = serde_json::json!({"email": "a@x.com", "password": "pw1"});
    let response = server.post("/api/signup").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // Second identical signup fails, and a different password does not help.
    let response = server.post("/api/signup").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "EMAIL_EXISTS");

    let response = server
        .post("/api/signup")
        .json(&serde_json::json!({"email": "a@x.com", "password": "other"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    let response = server
        .post("/api/signup")
        .json(&serde_json::json!({"email": "", "password": "pw1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "MISSING_FIELDS");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    server
        .post("/api/signup")
        .json(&serde_json::json!({"email": "a@x.com", "password": "pw1"}))
        .await;

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({"email": "a@x.com", "password": "wrongpw"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "INVALID_PASSWORD");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({"email": "nobody@x.com", "password": "pw1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "EMAIL_NOT_FOUND");
}

#[tokio::test]
async fn test_verify_token_error_paths() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    // No token supplied
    let response = server
        .post("/api/verify-token")
        .json(&serde_json::json!({}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // Malformed token
    let response = server
        .post("/api/verify-token")
        .json(&serde_json::json!({"token": "not.a.jwt"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // Token signed with a different secret
    let foreign = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(Algorithm::HS256),
        &serde_json::json!({"sub": "a@x.com", "iat": 0, "exp": u64::MAX / 2}),
        &jsonwebtoken::EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();
    let response = server
        .post("/api/verify-token")
        .json(&serde_json::json!({"token": foreign}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    // Hand-sign a token with the server's secret whose expiry is in the
    // past; the signature checks out but the lifetime is over.
    let expired = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(Algorithm::HS256),
        &serde_json::json!({"sub": "a@x.com", "iat": 1_000, "exp": 2_000}),
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = server
        .post("/api/verify-token")
        .json(&serde_json::json!({"token": expired}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn test_me_requires_bearer_token() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    // Without a token
    let response = server.get("/api/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // With one
    server
        .post("/api/signup")
        .json(&serde_json::json!({"email": "a@x.com", "password": "pw1"}))
        .await;
    let login: serde_json::Value = server
        .post("/api/login")
        .json(&serde_json::json!({"email": "a@x.com", "password": "pw1"}))
        .await
        .json();
    let token = login["access_token"].as_str().unwrap();

    let response = server
        .get("/api/me")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "a@x.com");
}

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let server = file_backed_server(&dir).await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_database_backend_full_flow() {
    let dir = TempDir::new().unwrap();
    let server = database_backed_server(&dir).await;

    let response = server
        .post("/api/signup")
        .json(&serde_json::json!({"email": "a@x.com", "password": "pw1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/api/signup")
        .json(&serde_json::json!({"email": "a@x.com", "password": "pw1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({"email": "a@x.com", "password": "pw1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let token = body["access_token"].as_str().unwrap();

    let response = server
        .post("/api/verify-token")
        .json(&serde_json::json!({"token": token}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "a@x.com");
}

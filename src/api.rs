//! Account operations against the conduit public API.
//!
//! Wire types follow the RealWorld envelope convention: every request and
//! response nests its payload under a `user` key. The helpers here are the
//! setup steps the UI suite leans on (signup) plus the calls the API suite
//! exercises directly (login, current user, profile update).

use crate::error::RequestError;
use crate::http::{ApiClient, RequestOptions};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// RealWorld `{"user": ...}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

/// An authenticated user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub token: String,
}

/// Partial profile update; absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A disposable account identity for a single test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Generate a unique disposable account.
///
/// The uuid suffix keeps parallel runs from colliding on the shared demo
/// backend. The password satisfies both the environment (≥ 6) and fixture
/// (≥ 8) bounds.
pub fn unique_test_user() -> TestUser {
    let suffix = Uuid::new_v4().simple().to_string();
    let short = &suffix[..12];
    TestUser {
        username: format!("testuser_{short}"),
        email: format!("testuser_{short}@example.com"),
        password: "testpassword123".to_string(),
    }
}

fn accept_created_or_ok(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

/// Register a new account: single POST `/users`.
///
/// # Errors
///
/// Fails with [`RequestError::UnexpectedStatus`] unless the server answers
/// 200 or 201. No retry; callers needing a fresh account per run should pass
/// a [`unique_test_user`] identity.
pub async fn signup(
    client: &ApiClient,
    email: &str,
    password: &str,
    username: &str,
) -> Result<User, RequestError> {
    let payload = json!({
        "user": {
            "email": email,
            "password": password,
            "username": username,
        }
    });

    let response = client
        .request(
            Method::POST,
            "/users",
            RequestOptions::default()
                .body(payload)
                .accept(accept_created_or_ok),
        )
        .await?;

    let envelope: UserEnvelope<User> = response.json().await?;
    Ok(envelope.user)
}

/// Authenticate with email and password: POST `/users/login`.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<User, RequestError> {
    let payload = json!({
        "user": {
            "email": email,
            "password": password,
        }
    });

    let response = client
        .request(
            Method::POST,
            "/users/login",
            RequestOptions::default().body(payload),
        )
        .await?;

    let envelope: UserEnvelope<User> = response.json().await?;
    Ok(envelope.user)
}

/// Fetch the authenticated user: GET `/user` with a token.
pub async fn current_user(client: &ApiClient, token: &str) -> Result<User, RequestError> {
    let response = client
        .request(Method::GET, "/user", RequestOptions::default().token(token))
        .await?;

    let envelope: UserEnvelope<User> = response.json().await?;
    Ok(envelope.user)
}

/// Apply a partial profile update: PUT `/user` with a token.
pub async fn update_user(
    client: &ApiClient,
    token: &str,
    update: &UserUpdate,
) -> Result<User, RequestError> {
    let payload = json!({ "user": update });

    let response = client
        .request(
            Method::PUT,
            "/user",
            RequestOptions::default().body(payload).token(token),
        )
        .await?;

    let envelope: UserEnvelope<User> = response.json().await?;
    Ok(envelope.user)
}

//! Authentication test helpers
//!
//! Provides utilities for registering users, signing in, and forging
//! tokens for session tests.

use axum::{
    http::{header, HeaderMap, Method, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use todogate::backend::auth::TokenCodec;

use super::server::{request, send, TEST_SECRET};

/// Sign up and sign in, returning the session token from the cookie
pub async fn sign_up_and_in(app: &Router, username: &str, password: &str) -> String {
    let credentials = json!({ "username": username, "password": password });

    let response = send(app, request(Method::POST, "/signup", Some(credentials.clone()), None)).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = send(app, request(Method::POST, "/signin", Some(credentials), None)).await;
    assert_eq!(response.status, StatusCode::OK);

    cookie_token(&response.headers).expect("signin did not set the token cookie")
}

/// Extract the `token` cookie value from `Set-Cookie`
pub fn cookie_token(headers: &HeaderMap) -> Option<String> {
    let cookie = headers.get(header::SET_COOKIE)?.to_str().ok()?;
    let first = cookie.split(';').next()?;
    first.strip_prefix("token=").map(str::to_string)
}

/// Issue a token directly, as if signed in at `issued_at`
pub fn token_issued_at(username: &str, issued_at: DateTime<Utc>) -> String {
    TokenCodec::new(TEST_SECRET)
        .issue(username, issued_at)
        .expect("Failed to issue test token")
        .value
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/**
 * Signin Handler
 *
 * This module implements the user authentication handler for POST /signin.
 *
 * # Authentication Process
 *
 * 1. Look up the stored hash for the username
 * 2. Verify the password using bcrypt
 * 3. Issue a session token valid for five minutes
 * 4. Set it as the `token` cookie and return it in the body
 *
 * # Security
 *
 * - Unknown users and wrong passwords both return 401 with the same message
 * - Passwords and tokens are never logged
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::SET_COOKIE, HeaderValue},
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};

use crate::backend::auth::handlers::types::{Credentials, SignInResponse};
use crate::backend::auth::sessions::SessionToken;
use crate::backend::auth::users::CredentialService;
use crate::backend::error::{AuthError, BackendError};
use crate::backend::middleware::auth::SESSION_COOKIE;

/// Render the `Set-Cookie` value for a session token
pub fn session_cookie(token: &SessionToken) -> String {
    format!(
        "{}={}; Path=/; Expires={}; HttpOnly",
        SESSION_COOKIE,
        token.value,
        http_date(token.expires_at)
    )
}

fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Sign in handler
///
/// # Returns
///
/// `200 OK` with `Set-Cookie: token=...` and a JSON body holding the token
/// and its expiry
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not valid JSON credentials
/// * `401 Unauthorized` - If the user is unknown or the password is wrong
/// * `500 Internal Server Error` - If the token cannot be produced
pub async fn signin(
    State(credentials): State<CredentialService>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Response, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected signin body: {}", e);
        BackendError::invalid_payload()
    })?;

    let token = credentials
        .sign_in(&request.username, &request.password, Utc::now())
        .await?;

    let cookie = HeaderValue::from_str(&session_cookie(&token))
        .map_err(|e| AuthError::Internal(format!("invalid cookie value: {}", e)))?;

    let body = SignInResponse {
        token: token.value,
        expires_at: token.expires_at,
    };

    Ok(([(SET_COOKIE, cookie)], Json(body)).into_response())
}

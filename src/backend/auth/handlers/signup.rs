/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Decode `{username, password}` from the body
 * 2. Hash the password with bcrypt
 * 3. Store the hash, overwriting any existing user of that name
 *
 * No username or password rules are enforced.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::Credentials;
use crate::backend::auth::users::CredentialService;
use crate::backend::error::BackendError;

/// Sign up handler
///
/// # Returns
///
/// `201 Created` with an empty body
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not valid JSON credentials
/// * `500 Internal Server Error` - If password hashing fails
pub async fn signup(
    State(credentials): State<CredentialService>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected signup body: {}", e);
        BackendError::invalid_payload()
    })?;

    tracing::info!("Signup request for username: {}", request.username);

    credentials
        .sign_up(&request.username, &request.password)
        .await?;

    Ok(StatusCode::CREATED)
}

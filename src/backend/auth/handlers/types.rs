/**
 * Authentication Handler Types
 *
 * Request and response bodies for the sign-up and sign-in handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials submitted to `/signup` and `/signin`
///
/// Missing fields decode as empty strings.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    /// Plain-text password; hashed or verified, never stored or logged
    pub password: String,
}

/// Sign-in response
///
/// The same token is also set as the `token` cookie.
#[derive(Serialize, Deserialize, Debug)]
pub struct SignInResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

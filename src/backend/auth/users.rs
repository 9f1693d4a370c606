/**
 * Credential Service
 *
 * Registers users and authenticates sign-in attempts against the shared
 * store. bcrypt runs on the blocking pool so request tasks never stall on it.
 */

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{SessionToken, TokenCodec};
use crate::backend::error::{AuthError, HashingError};
use crate::backend::store::SharedStore;

#[derive(Debug, Clone)]
pub struct CredentialService {
    store: SharedStore,
    hasher: PasswordHasher,
    tokens: Arc<TokenCodec>,
}

impl CredentialService {
    pub fn new(store: SharedStore, hasher: PasswordHasher, tokens: Arc<TokenCodec>) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Register a user, overwriting any existing credentials for `username`
    ///
    /// No validation is applied to the username or password.
    pub async fn sign_up(&self, username: &str, password: &str) -> Result<(), HashingError> {
        let hasher = self.hasher;
        let password = password.to_string();
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

        self.store.put_user_hash(username, hashed).await;
        tracing::info!("User signed up: {}", username);
        Ok(())
    }

    /// Check credentials and issue a session token
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - unknown user or wrong password (indistinguishable)
    /// * `Internal` - verification worker or token signing failed
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionToken, AuthError> {
        let Some(hashed) = self.store.get_user_hash(username).await else {
            tracing::warn!("Sign-in rejected for {}", username);
            return Err(AuthError::InvalidCredentials);
        };

        let hasher = self.hasher;
        let password = password.to_string();
        let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hashed))
            .await
            .map_err(|e| AuthError::Internal(format!("verification worker failed: {}", e)))?;

        if !valid {
            tracing::warn!("Sign-in rejected for {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(username, now)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!("User signed in: {}", username);
        Ok(token)
    }
}

/**
 * Authentication Middleware
 *
 * This module resolves the session carried by a request into the
 * authenticated username, and provides the middleware and extractor that
 * protect the todo routes.
 *
 * # Carriers
 *
 * The token is read from the `token` cookie, falling back to an
 * `Authorization: Bearer <token>` header.
 *
 * # Outcomes
 *
 * - No carrier, expired or tampered token → `SessionError::Unauthorized`
 * - Unreadable carrier or undecodable token → `SessionError::BadRequest`
 */

use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap,
    },
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::{BackendError, SessionError};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Something a session token can be read from
pub trait TokenSource {
    /// The raw token, `Ok(None)` when no carrier is present
    ///
    /// # Errors
    ///
    /// `SessionError::BadRequest` when a carrier is present but unreadable.
    fn session_token(&self) -> Result<Option<&str>, SessionError>;
}

impl TokenSource for HeaderMap {
    fn session_token(&self) -> Result<Option<&str>, SessionError> {
        // Other cookies may hold arbitrary bytes; only ours has to be text
        for header in self.get_all(COOKIE) {
            if let Some(raw) = find_cookie(header.as_bytes(), SESSION_COOKIE) {
                let token = std::str::from_utf8(raw).map_err(|_| {
                    tracing::warn!("Session cookie is not valid text");
                    SessionError::BadRequest
                })?;

                return Ok(Some(token.trim_matches('"')));
            }
        }

        let Some(header) = self.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let value = header.to_str().map_err(|_| {
            tracing::warn!("Authorization header is not valid text");
            SessionError::BadRequest
        })?;

        Ok(value.strip_prefix("Bearer "))
    }
}

/// Raw value of the first `name=value` pair called `name` in a Cookie header
fn find_cookie<'a>(header: &'a [u8], name: &str) -> Option<&'a [u8]> {
    header.split(|byte| *byte == b';').find_map(|pair| {
        let pair = pair.trim_ascii();
        let eq = pair.iter().position(|byte| *byte == b'=')?;
        (&pair[..eq] == name.as_bytes()).then(|| &pair[eq + 1..])
    })
}

/// Turns a request's session carrier into an authenticated username
#[derive(Debug, Clone)]
pub struct SessionResolver {
    tokens: Arc<TokenCodec>,
}

impl SessionResolver {
    pub fn new(tokens: Arc<TokenCodec>) -> Self {
        Self { tokens }
    }

    pub fn resolve<S>(&self, source: &S, now: DateTime<Utc>) -> Result<String, SessionError>
    where
        S: TokenSource + ?Sized,
    {
        let token = source.session_token()?.ok_or_else(|| {
            tracing::warn!("Request carries no session token");
            SessionError::Unauthorized
        })?;

        self.tokens.verify(token, now).map_err(|e| {
            tracing::warn!("Session token rejected: {}", e);
            SessionError::from(e)
        })
    }
}

/// Authenticated user attached to the request by `auth_middleware`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Authentication middleware
///
/// Resolves the session before the handler runs; rejected requests never
/// reach the handler, so they leave the store untouched.
pub async fn auth_middleware(
    State(resolver): State<SessionResolver>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let username = resolver.resolve(request.headers(), Utc::now())?;

    request.extensions_mut().insert(AuthenticatedUser { username });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::from(SessionError::Unauthorized)
            })?;

        Ok(AuthUser(user))
    }
}

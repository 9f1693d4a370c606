/**
 * Backend Error Types
 *
 * This module defines the failure kinds raised by the authentication core
 * and the todo operations, plus the `BackendError` they collapse into at
 * the HTTP boundary.
 *
 * # Error Categories
 *
 * ## Credential Errors
 *
 * - `HashingError` - bcrypt or its worker failed (fatal, 500)
 * - `AuthError` - sign-in rejected or could not issue a token
 *
 * ## Session Errors
 *
 * - `TokenError` - a token failed verification (internal to session resolution)
 * - `SessionError` - the request carries no usable session (401 / 400)
 *
 * ## Todo Errors
 *
 * - `NotFoundError` - no todo with the requested id (404)
 * - `BackendError::InvalidTodoId` - path id is not an integer (also 404)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Password hashing failed
///
/// Only raised on internal failure (bcrypt error, blocking worker lost),
/// never because of the password itself.
#[derive(Debug, Error)]
#[error("password hashing failed: {message}")]
pub struct HashingError {
    message: String,
}

impl HashingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<bcrypt::BcryptError> for HashingError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<tokio::task::JoinError> for HashingError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::new(format!("hashing worker failed: {}", err))
    }
}

/// Sign-in failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user or wrong password; the two are deliberately the same
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Credentials were fine but no token could be produced
    #[error("internal authentication error: {0}")]
    Internal(String),
}

/// Token verification failures
///
/// These never leave the session layer; `SessionError` is what callers see.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature does not match the payload
    #[error("token signature is invalid")]
    InvalidSignature,

    /// `exp` is at or before the verification time
    #[error("token has expired")]
    Expired,

    /// Token could not be decoded
    #[error("token is malformed")]
    Malformed,

    /// Token could not be signed on issue
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

/// Session resolution outcome exposed to the HTTP layer
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Missing, expired or tampered session
    #[error("Unauthorized")]
    Unauthorized,

    /// Session carrier present but structurally broken
    #[error("Bad request")]
    BadRequest,
}

impl From<TokenError> for SessionError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed => Self::BadRequest,
            TokenError::InvalidSignature | TokenError::Expired | TokenError::Signing(_) => {
                Self::Unauthorized
            }
        }
    }
}

/// No todo matched the requested id
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("todo {id} not found")]
pub struct NotFoundError {
    pub id: i64,
}

/// Backend-specific error types
///
/// Every handler returns this type; each variant knows its HTTP status and
/// the message sent back to the client.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., undecodable request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    #[error(transparent)]
    Hashing(#[from] HashingError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Path id that is not a decimal integer, so it cannot name any todo
    #[error("unparsable todo id: {0:?}")]
    InvalidTodoId(String),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// The request body could not be decoded
    pub fn invalid_payload() -> Self {
        Self::handler(StatusCode::BAD_REQUEST, "Invalid request payload")
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Hashing` - 500 Internal Server Error
    /// - `Auth::InvalidCredentials` - 401 Unauthorized
    /// - `Auth::Internal` - 500 Internal Server Error
    /// - `Session::Unauthorized` - 401 Unauthorized
    /// - `Session::BadRequest` - 400 Bad Request
    /// - `NotFound` / `InvalidTodoId` - 404 Not Found
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Session(SessionError::Unauthorized) => StatusCode::UNAUTHORIZED,
            Self::Session(SessionError::BadRequest) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::InvalidTodoId(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal details stay in the logs; clients only see the fixed text.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Hashing(_) => "Failed to create user".to_string(),
            Self::Auth(AuthError::InvalidCredentials) => "Invalid username or password".to_string(),
            Self::Auth(AuthError::Internal(_)) => "Failed to create token".to_string(),
            Self::Session(err) => err.to_string(),
            Self::NotFound(_) | Self::InvalidTodoId(_) => "Todo not found".to_string(),
        }
    }
}

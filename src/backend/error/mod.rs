//! Backend Error Module
//!
//! This module defines the error taxonomy of the service and how each error
//! is turned into an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `HashingError` - Password hashing failed (500)
//! - `AuthError` - Sign-in rejected (401) or token signing failed (500)
//! - `TokenError` - Token verification failure, absorbed into `SessionError`
//! - `SessionError` - Missing/invalid session (401) or broken carrier (400)
//! - `NotFoundError` - Todo id not present (404)
//! - `BackendError` - Umbrella type returned by handlers
//!
//! All errors are terminal for the request that raised them.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError, HashingError, NotFoundError, SessionError, TokenError};

//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`auth`** - Session resolution for protected routes

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser, SessionResolver, TokenSource};

//! Backend Module
//!
//! This module contains all server-side code for todogate: an Axum HTTP
//! service where users sign up, sign in for a session token, and manage
//! their own todo lists.
//!
//! # Architecture
//!
//! - **`auth`** - Password hashing, session tokens, sign-up/sign-in
//! - **`middleware`** - Session resolution for protected routes
//! - **`store`** - In-memory, lock-protected users and todo lists
//! - **`todos`** - Todo CRUD service and handlers
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - Router assembly
//! - **`error`** - Error taxonomy and HTTP translation
//!
//! # Request Flow
//!
//! ```text
//! /signup, /signin  → CredentialService → PasswordHasher + SharedStore → TokenCodec
//! /todos*           → auth_middleware (SessionResolver) → TodoService → SharedStore
//! ```
//!
//! # Thread Safety
//!
//! The only shared mutable resource is `SharedStore`, an `Arc<RwLock<_>>`:
//! reads share the lock, writes take it exclusively. bcrypt work runs on
//! the blocking thread pool.

/// Authentication and user management
pub mod auth;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Shared in-memory store
pub mod store;

/// Todo service and handlers
pub mod todos;

pub use error::BackendError;
pub use server::{create_app, AppState};
pub use store::SharedStore;

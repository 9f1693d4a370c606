//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Routes
//!
//! - `POST /signup` - User registration
//! - `POST /signin` - User login
//! - `POST /todos`, `GET /todos` - Create and list todos
//! - `PUT /todos/{id}`, `DELETE /todos/{id}` - Replace and delete todos
//!
//! Todo routes require a session; see `middleware::auth`.

/// Main router creation
pub mod router;

pub use router::create_router;

//! todogate - Session-authenticated todo service
//!
//! Clients register credentials, sign in to receive a short-lived signed
//! token, and then create, list, update and delete their own todo items.
//!
//! # Module Structure
//!
//! - **`shared`** - Types exchanged with clients (`Todo`)
//! - **`backend`** - Axum server, authentication core, in-memory store
//!
//! # Usage
//!
//! ```rust,no_run
//! use todogate::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config);
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Non-goals
//!
//! State is volatile: a restart forgets every user and todo. Tokens cannot
//! be revoked or refreshed; they simply expire after five minutes.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

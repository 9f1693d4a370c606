//! Server Module
//!
//! This module contains the code that configures and assembles the Axum
//! application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (file + environment)
//! └── init.rs         - App creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds one `SharedStore` plus the credential, session and todo
//! services built on it. The store synchronizes itself internally, so the
//! state is cloned freely into handlers.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;

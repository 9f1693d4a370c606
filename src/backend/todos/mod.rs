//! Todos Module
//!
//! Per-user todo lists: the service that operates on the shared store and
//! the HTTP handlers in front of it.
//!
//! # Module Structure
//!
//! ```text
//! todos/
//! ├── mod.rs       - Module exports
//! ├── service.rs   - TodoService (create/list/update/delete)
//! └── handlers.rs  - /todos HTTP handlers
//! ```

/// Todo CRUD over the shared store
pub mod service;

/// HTTP handlers for /todos
pub mod handlers;

pub use handlers::{create_todo, delete_todo, list_todos, update_todo};
pub use service::TodoService;

//! Shared Module
//!
//! Types exchanged with clients over the HTTP API.

/// Todo data structure
pub mod todo;

pub use todo::Todo;

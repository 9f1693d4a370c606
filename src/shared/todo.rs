/**
 * Todo Data Structure
 *
 * This module defines the todo item exchanged between clients and the server.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item owned by one user
///
/// Every field falls back to its default when absent from a request body,
/// so `{"title": "x"}` decodes to id 0, not completed, created at the epoch.
/// The server overwrites `id` and `created_at` on creation; on update the
/// record is stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    /// Position-based id, unique within the owner's list at creation time
    pub id: i64,
    /// Free-form title
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp, set by the server
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create an incomplete todo with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/**
 * Shared Store
 *
 * The process-wide, in-memory state: username → password hash and
 * username → ordered todo list. Both maps live behind one `RwLock`, so the
 * operations below are each atomic; reads share the lock, writes hold it
 * exclusively. Nothing is persisted.
 *
 * Raw map access never leaves this module.
 */

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::shared::Todo;

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<String, String>,
    todos: HashMap<String, Vec<Todo>>,
}

/// Concurrency-safe handle to the store
///
/// Cloning the handle is cheap and every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<StoreState>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a user's password hash
    pub async fn put_user_hash(&self, username: &str, hash: String) {
        let mut state = self.inner.write().await;
        if state.users.insert(username.to_string(), hash).is_some() {
            tracing::debug!("Overwrote credentials for existing user {}", username);
        }
    }

    pub async fn get_user_hash(&self, username: &str) -> Option<String> {
        self.inner.read().await.users.get(username).cloned()
    }

    /// Append a todo to the user's list
    ///
    /// The assigned id is the current list length + 1, computed under the
    /// write lock. After a delete the next id can repeat one still present
    /// in the list.
    pub async fn append_todo(&self, username: &str, mut todo: Todo) -> Todo {
        let mut state = self.inner.write().await;
        let list = state.todos.entry(username.to_string()).or_default();

        todo.id = list.len() as i64 + 1;
        list.push(todo.clone());

        tracing::debug!("Appended todo {} for {}", todo.id, username);
        todo
    }

    /// Snapshot of the user's list in creation order; empty for unknown users
    pub async fn list_todos(&self, username: &str) -> Vec<Todo> {
        self.inner
            .read()
            .await
            .todos
            .get(username)
            .cloned()
            .unwrap_or_default()
    }

    /// Replace the first todo with `id` by `todo`, verbatim
    ///
    /// No fields are merged: the stored id and `created_at` become whatever
    /// `todo` carries. Returns whether a match was found.
    pub async fn replace_todo_by_id(&self, username: &str, id: i64, todo: Todo) -> bool {
        let mut state = self.inner.write().await;
        let Some(list) = state.todos.get_mut(username) else {
            return false;
        };

        match list.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    /// Remove the first todo with `id`, keeping the order of the rest
    pub async fn delete_todo_by_id(&self, username: &str, id: i64) -> bool {
        let mut state = self.inner.write().await;
        let Some(list) = state.todos.get_mut(username) else {
            return false;
        };

        match list.iter().position(|existing| existing.id == id) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }
}

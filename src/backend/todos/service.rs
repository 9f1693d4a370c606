/**
 * Todo Service
 *
 * CRUD over one user's todo list. Callers pass the username obtained from
 * session resolution; the service never looks at credentials.
 */

use chrono::{DateTime, Utc};

use crate::backend::error::NotFoundError;
use crate::backend::store::SharedStore;
use crate::shared::Todo;

#[derive(Debug, Clone)]
pub struct TodoService {
    store: SharedStore,
}

impl TodoService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Stamp `created_at` and append; the store assigns the id
    pub async fn create(&self, username: &str, mut todo: Todo, now: DateTime<Utc>) -> Todo {
        todo.created_at = now;
        let todo = self.store.append_todo(username, todo).await;
        tracing::info!("Created todo {} for {}", todo.id, username);
        todo
    }

    pub async fn list(&self, username: &str) -> Vec<Todo> {
        self.store.list_todos(username).await
    }

    /// Replace the todo with `id` by `todo` as supplied
    pub async fn update(&self, username: &str, id: i64, todo: Todo) -> Result<Todo, NotFoundError> {
        if self.store.replace_todo_by_id(username, id, todo.clone()).await {
            tracing::info!("Updated todo {} for {}", id, username);
            Ok(todo)
        } else {
            Err(NotFoundError { id })
        }
    }

    pub async fn delete(&self, username: &str, id: i64) -> Result<(), NotFoundError> {
        if self.store.delete_todo_by_id(username, id).await {
            tracing::info!("Deleted todo {} for {}", id, username);
            Ok(())
        } else {
            Err(NotFoundError { id })
        }
    }
}

/**
 * Todo Handlers
 *
 * HTTP handlers for the `/todos` endpoints. All of them sit behind
 * `auth_middleware`, so the session is resolved before any body is read.
 *
 * # Routes
 *
 * - `POST /todos` - Create a todo (201)
 * - `GET /todos` - List the caller's todos (200)
 * - `PUT /todos/{id}` - Replace a todo (200, 404)
 * - `DELETE /todos/{id}` - Delete a todo (204, 404)
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::todos::service::TodoService;
use crate::shared::Todo;

/// Parse a path id; anything that is not a decimal integer matches no todo
fn parse_id(raw: &str) -> Result<i64, BackendError> {
    raw.parse::<i64>().map_err(|_| {
        tracing::debug!("Unparsable todo id: {}", raw);
        BackendError::InvalidTodoId(raw.to_string())
    })
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, BackendError> {
    payload.map(|Json(value)| value).map_err(|e| {
        tracing::warn!("Rejected request body: {}", e);
        BackendError::invalid_payload()
    })
}

pub async fn create_todo(
    State(todos): State<TodoService>,
    AuthUser(user): AuthUser,
    payload: Result<Json<Todo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), BackendError> {
    let todo = decode(payload)?;
    let created = todos.create(&user.username, todo, Utc::now()).await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_todos(
    State(todos): State<TodoService>,
    AuthUser(user): AuthUser,
) -> Json<Vec<Todo>> {
    Json(todos.list(&user.username).await)
}

pub async fn update_todo(
    State(todos): State<TodoService>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<Todo>, JsonRejection>,
) -> Result<Json<Todo>, BackendError> {
    let todo = decode(payload)?;
    let id = parse_id(&id)?;
    let updated = todos.update(&user.username, id, todo).await?;
    Ok(Json(updated))
}

pub async fn delete_todo(
    State(todos): State<TodoService>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let id = parse_id(&id)?;
    todos.delete(&user.username, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Auth routes (public)
 * 2. Todo routes (behind `auth_middleware`)
 * 3. Fallback handler (404)
 */

use axum::{
    middleware,
    routing::{post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::backend::auth::{signin, signup};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::todos::{create_todo, delete_todo, list_todos, update_todo};

/// Create the Axum router with all routes configured
///
/// ## Auth Routes
///
/// - `POST /signup` - User registration
/// - `POST /signin` - User login, sets the `token` cookie
///
/// ## Todo Routes (session required)
///
/// - `POST /todos` / `GET /todos`
/// - `PUT /todos/{id}` / `DELETE /todos/{id}`
pub fn create_router(app_state: AppState) -> Router<()> {
    let auth_routes = Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin));

    let todo_routes = Router::new()
        .route("/todos", post(create_todo).get(list_todos))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(auth_routes)
        .merge(todo_routes)
        .fallback(|| async {
            BackendError::handler(axum::http::StatusCode::NOT_FOUND, "404 Not Found")
        })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

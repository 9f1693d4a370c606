/**
 * Server Initialization
 *
 * This module builds the application from a resolved configuration: an
 * empty in-memory store, the services around it, and the router.
 */

use axum::Router;

use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// State starts empty on every call; nothing is restored or persisted.
pub fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing todogate server");

    let app_state = AppState::from_config(config);
    tracing::info!("Store initialized, bcrypt cost {}", config.bcrypt_cost);

    create_router(app_state)
}

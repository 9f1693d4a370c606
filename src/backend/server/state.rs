/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` owns one `SharedStore` and the services built on top of it.
 * Every service holds a clone of the same store handle, so all requests
 * observe a single set of users and todo lists.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the service they
 * need, e.g. `State(todos): State<TodoService>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::{CredentialService, PasswordHasher, TokenCodec};
use crate::backend::middleware::SessionResolver;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::SharedStore;
use crate::backend::todos::TodoService;

/// Central state container for the Axum application
#[derive(Clone, Debug)]
pub struct AppState {
    /// Process-wide in-memory store
    pub store: SharedStore,

    /// Sign-up and sign-in
    pub credentials: CredentialService,

    /// Session token → username
    pub sessions: SessionResolver,

    /// Per-user todo CRUD
    pub todos: TodoService,
}

impl AppState {
    /// Wire all services around a fresh, empty store
    pub fn new(secret: &[u8], hasher: PasswordHasher) -> Self {
        let store = SharedStore::new();
        let tokens = Arc::new(TokenCodec::new(secret));

        Self {
            credentials: CredentialService::new(store.clone(), hasher, tokens.clone()),
            sessions: SessionResolver::new(tokens),
            todos: TodoService::new(store.clone()),
            store,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.jwt_secret.as_bytes(),
            PasswordHasher::new(config.bcrypt_cost),
        )
    }
}

impl FromRef<AppState> for CredentialService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}

impl FromRef<AppState> for SessionResolver {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for TodoService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.todos.clone()
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

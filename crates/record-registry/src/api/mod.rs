//! HTTP API for the record registry.

mod handlers;
mod json;
mod middleware;
mod types;

pub use handlers::*;
pub use json::IndentedJson;
pub use middleware::logging_middleware;
pub use types::*;

use crate::store::RecordStore;
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Admitted records, guarded for lookup + append
    pub store: Arc<RwLock<RecordStore>>,
}

impl AppState {
    /// Create new application state owning `store`.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/datos", get(handlers::list_records).post(handlers::add_record))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

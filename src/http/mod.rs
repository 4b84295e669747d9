pub mod handlers;

use crate::core::gateway::StorageGateway;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<StorageGateway>,
}

impl AppState {
    pub fn new(gateway: StorageGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/storage/objects", get(handlers::list_objects))
        .route("/storage/download/{name}", get(handlers::download_object))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

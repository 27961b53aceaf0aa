use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::villages::handlers;
use crate::features::villages::services::VillageService;

/// Create routes for the villages feature (public)
pub fn routes(service: Arc<VillageService>) -> Router {
    Router::new()
        .route("/api/villages", get(handlers::list_villages))
        .with_state(service)
}

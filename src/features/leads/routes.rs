use std::sync::Arc;

use axum::{handler::Handler, middleware::from_fn_with_state, routing::post, Router};

use crate::core::middleware;
use crate::features::auth::ApiKeyValidator;
use crate::features::leads::handlers;
use crate::features::leads::services::LeadService;

/// Create routes for the leads feature
///
/// Submitting is public; listing is guarded by the admin API key.
pub fn routes(service: Arc<LeadService>, api_key: Arc<ApiKeyValidator>) -> Router {
    Router::new()
        .route(
            "/api/leads/farmer",
            post(handlers::submit_lead).get(
                handlers::list_leads
                    .layer(from_fn_with_state(api_key, middleware::api_key_middleware)),
            ),
        )
        .with_state(service)
}

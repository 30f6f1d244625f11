// ============================================================================
// HTTP Routes
// ============================================================================
//
// Structure:
// - mod.rs: router assembly and middleware stack
// - messages.rs: the /api/messages collection (list, create, delete)
// - health.rs: storage reachability probe
// - middleware.rs: request logging
//
// ============================================================================

mod health;
mod messages;
mod middleware;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Create the application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    Router::new()
        // Health probe
        .route("/health", get(health::health_check))
        // Messages collection
        .route("/api/messages", get(messages::list_messages))
        .route("/api/messages", post(messages::create_message))
        .route("/api/messages", delete(messages::delete_message))
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .into_inner(),
        )
        .with_state(app_context)
}

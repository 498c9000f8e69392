//! API Routes
//!
//! Configures the Axum router with all note service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    generate_data_handler, get_cached_note_handler, get_note_handler, health_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// Routes are registered whether or not their store is configured; a request
/// against a missing store answers 500.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/note/:id", get(get_note_handler))
        .route("/cache/note/:id", get(get_cached_note_handler))
        .route("/generateData", post(generate_data_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! # Web API
//!
//! HTTP surface for the workflow engine: definition management, instance
//! lifecycle, and action execution. JSON bodies use lowerCamelCase field
//! names throughout.

pub mod handlers;
pub mod response_types;
pub mod state;

use axum::routing::{get, post};
use axum::Router;

use state::AppState;

/// Build the axum router exposing the workflow API
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/workflows",
            post(handlers::workflows::create_definition).get(handlers::workflows::list_definitions),
        )
        .route("/api/workflows/{id}", get(handlers::workflows::get_definition))
        .route(
            "/api/workflows/{id}/instances",
            post(handlers::instances::start_instance),
        )
        .route("/api/instances", get(handlers::instances::list_instances))
        .route("/api/instances/{id}", get(handlers::instances::get_instance))
        .route(
            "/api/instances/{id}/execute",
            post(handlers::instances::execute_action),
        )
        .route("/health", get(handlers::health::health))
        .with_state(state)
}

//! # Health Handler
//!
//! Liveness endpoint reporting uptime and store counters.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::web::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: i64,
    pub definition_count: usize,
    pub instance_count: usize,
}

/// Health check: GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.started_at);

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: uptime.num_seconds(),
        definition_count: state.service.definition_count().await,
        instance_count: state.service.instance_count().await,
    })
}

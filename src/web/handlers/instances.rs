//! # Workflow Instance Handlers
//!
//! HTTP handlers for starting instances, reading them, and executing
//! actions against them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::error::WorkflowError;
use crate::models::WorkflowInstance;
use crate::web::response_types::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Request body for POST /api/instances/{id}/execute
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteActionRequest {
    pub action_id: String,
}

/// Start a new instance: POST /api/workflows/{id}/instances
///
/// An unknown definition id is a 400 here, not a 404: the submitted body
/// is empty and the path segment is the client's claim being rejected.
pub async fn start_instance(
    State(state): State<AppState>,
    Path(definition_id): Path<String>,
) -> ApiResult<(StatusCode, Json<WorkflowInstance>)> {
    info!(definition_id = %definition_id, "starting workflow instance");

    match state.service.start_instance(&definition_id).await {
        Ok(instance) => Ok((StatusCode::CREATED, Json(instance))),
        Err(err @ WorkflowError::DefinitionNotFound { .. }) => {
            warn!(definition_id = %definition_id, "cannot start instance of unknown definition");
            Err(ApiError::bad_request(err.to_string()))
        }
        Err(err) => Err(ApiError::from(err)),
    }
}

/// Get an instance: GET /api/instances/{id}
pub async fn get_instance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkflowInstance>> {
    debug!(instance_id = %id, "retrieving workflow instance");

    let instance = state.service.get_instance(&id).await?;
    Ok(Json(instance))
}

/// List all instances: GET /api/instances
pub async fn list_instances(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<WorkflowInstance>>> {
    let instances = state.service.list_instances().await;
    debug!(count = instances.len(), "listing workflow instances");
    Ok(Json(instances))
}

/// Execute an action: POST /api/instances/{id}/execute
///
/// Transition failures are 400s carrying the engine's message. An unknown
/// instance is a 404. A dangling definition reference means the store
/// invariant was broken and surfaces as a 500.
pub async fn execute_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ExecuteActionRequest>,
) -> ApiResult<Json<WorkflowInstance>> {
    info!(instance_id = %id, action_id = %request.action_id, "executing action");

    match state.service.execute_action(&id, &request.action_id).await {
        Ok(instance) => Ok(Json(instance)),
        Err(WorkflowError::InstanceNotFound { .. }) => Err(ApiError::NotFound),
        Err(err @ WorkflowError::DefinitionNotFound { .. }) => {
            error!(instance_id = %id, error = %err, "instance references missing definition");
            Err(ApiError::Internal)
        }
        Err(err @ WorkflowError::Internal(_)) => {
            error!(instance_id = %id, error = %err, "action execution hit an internal fault");
            Err(ApiError::Internal)
        }
        Err(err) => {
            warn!(instance_id = %id, action_id = %request.action_id, error = %err, "action rejected");
            Err(ApiError::bad_request(err.to_string()))
        }
    }
}

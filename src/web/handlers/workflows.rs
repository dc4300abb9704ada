//! # Workflow Definition Handlers
//!
//! HTTP handlers for creating and reading workflow definitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info, warn};

use crate::models::{DefinitionRequest, WorkflowDefinition};
use crate::web::response_types::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Create a new workflow definition: POST /api/workflows
///
/// Validates the submitted states and actions; nothing is stored when any
/// structural check fails.
pub async fn create_definition(
    State(state): State<AppState>,
    Json(request): Json<DefinitionRequest>,
) -> ApiResult<(StatusCode, Json<WorkflowDefinition>)> {
    info!(
        name = %request.name,
        state_count = request.states.len(),
        action_count = request.actions.len(),
        "creating workflow definition"
    );

    match state.service.create_definition(request).await {
        Ok(definition) => Ok((StatusCode::CREATED, Json(definition))),
        Err(err) => {
            warn!(error = %err, "rejected workflow definition");
            Err(ApiError::bad_request(err.to_string()))
        }
    }
}

/// Get a definition: GET /api/workflows/{id}
pub async fn get_definition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkflowDefinition>> {
    debug!(definition_id = %id, "retrieving workflow definition");

    let definition = state.service.get_definition(&id).await?;
    Ok(Json(definition))
}

/// List all definitions: GET /api/workflows
pub async fn list_definitions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<WorkflowDefinition>>> {
    let definitions = state.service.list_definitions().await;
    debug!(count = definitions.len(), "listing workflow definitions");
    Ok(Json(definitions))
}

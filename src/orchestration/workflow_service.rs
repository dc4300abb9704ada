use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, WorkflowError};
use crate::models::{DefinitionRequest, WorkflowDefinition, WorkflowInstance};
use crate::registry::{DefinitionStore, InstanceStore};
use crate::state_machine::TransitionEngine;
use crate::validation;

/// Coordinates definition creation, instance lifecycle, and action
/// execution.
///
/// One instance of this service is shared process-wide. Definitions are
/// validated exactly once, stored under a fresh id, and never mutated
/// afterwards; instance mutation happens only inside the instance store's
/// synchronized entry point.
#[derive(Clone, Default)]
pub struct WorkflowService {
    definitions: DefinitionStore,
    instances: InstanceStore,
    engine: TransitionEngine,
}

impl WorkflowService {
    pub fn new() -> Self {
        Self {
            definitions: DefinitionStore::new(),
            instances: InstanceStore::new(),
            engine: TransitionEngine::new(),
        }
    }

    /// Validate and store a new workflow definition.
    ///
    /// All-or-nothing: a definition that fails any structural check is
    /// never stored.
    pub async fn create_definition(&self, request: DefinitionRequest) -> Result<WorkflowDefinition> {
        validation::validate_definition(&request.name, &request.states, &request.actions)?;

        let definition = WorkflowDefinition {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            states: request.states,
            actions: request.actions,
            created_at: Utc::now(),
        };

        self.definitions.put(definition.clone()).await;
        info!(
            definition_id = %definition.id,
            name = %definition.name,
            state_count = definition.states.len(),
            action_count = definition.actions.len(),
            "created workflow definition"
        );

        Ok(definition)
    }

    /// Fetch a definition by id
    pub async fn get_definition(&self, id: &str) -> Result<WorkflowDefinition> {
        self.definitions
            .get(id)
            .await
            .ok_or_else(|| WorkflowError::DefinitionNotFound { id: id.to_string() })
    }

    /// List all stored definitions
    pub async fn list_definitions(&self) -> Vec<WorkflowDefinition> {
        self.definitions.list().await
    }

    /// Start a new instance of an existing definition, seeded at its
    /// unique initial state with empty history
    pub async fn start_instance(&self, definition_id: &str) -> Result<WorkflowInstance> {
        let definition = self.get_definition(definition_id).await?;

        let initial = definition.initial_state().ok_or_else(|| {
            WorkflowError::internal(format!(
                "definition '{}' has no initial state",
                definition.id
            ))
        })?;

        let instance = WorkflowInstance::new(
            Uuid::new_v4().to_string(),
            definition.id.clone(),
            initial.id.clone(),
        );

        self.instances.put(instance.clone()).await;
        info!(
            instance_id = %instance.id,
            definition_id = %definition.id,
            initial_state = %instance.current_state_id,
            "started workflow instance"
        );

        Ok(instance)
    }

    /// Fetch an instance by id
    pub async fn get_instance(&self, id: &str) -> Result<WorkflowInstance> {
        self.instances
            .get(id)
            .await
            .ok_or_else(|| WorkflowError::InstanceNotFound { id: id.to_string() })
    }

    /// List all instances
    pub async fn list_instances(&self) -> Vec<WorkflowInstance> {
        self.instances.list().await
    }

    /// Execute an action against an instance and return the updated
    /// snapshot.
    ///
    /// The definition is resolved before the instance store's write lock
    /// is taken; it is immutable, so the two-step lookup cannot go stale.
    /// A missing definition here means the back-reference invariant was
    /// broken and surfaces as `DefinitionNotFound`.
    pub async fn execute_action(
        &self,
        instance_id: &str,
        action_id: &str,
    ) -> Result<WorkflowInstance> {
        let current = self
            .instances
            .get(instance_id)
            .await
            .ok_or_else(|| WorkflowError::InstanceNotFound {
                id: instance_id.to_string(),
            })?;

        let definition = self
            .definitions
            .get(&current.definition_id)
            .await
            .ok_or_else(|| WorkflowError::DefinitionNotFound {
                id: current.definition_id.clone(),
            })?;

        let updated = self
            .instances
            .execute_with(instance_id, |instance| {
                self.engine.execute(instance, &definition, action_id)?;
                Ok(instance.clone())
            })
            .await?;

        info!(
            instance_id = %updated.id,
            action_id = %action_id,
            current_state = %updated.current_state_id,
            history_len = updated.history.len(),
            "executed action"
        );

        Ok(updated)
    }

    /// Number of stored definitions (health reporting)
    pub async fn definition_count(&self) -> usize {
        self.definitions.count().await
    }

    /// Number of stored instances (health reporting)
    pub async fn instance_count(&self) -> usize {
        self.instances.count().await
    }
}

impl std::fmt::Debug for WorkflowService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, State};

    fn state(id: &str, is_initial: bool, is_final: bool) -> State {
        State {
            id: id.to_string(),
            name: id.to_string(),
            is_initial,
            is_final,
            enabled: true,
            description: None,
        }
    }

    fn action(id: &str, from_states: &[&str], to_state: &str) -> Action {
        Action {
            id: id.to_string(),
            name: id.to_string(),
            enabled: true,
            from_states: from_states.iter().map(|s| s.to_string()).collect(),
            to_state: to_state.to_string(),
        }
    }

    fn approval_request() -> DefinitionRequest {
        DefinitionRequest {
            name: "Approval".to_string(),
            states: vec![
                state("pending", true, false),
                state("approved", false, false),
                state("completed", false, true),
            ],
            actions: vec![
                action("approve", &["pending"], "approved"),
                action("complete", &["approved"], "completed"),
            ],
        }
    }

    #[tokio::test]
    async fn test_create_definition_assigns_fresh_id() {
        let service = WorkflowService::new();
        let first = service.create_definition(approval_request()).await.unwrap();
        let second = service.create_definition(approval_request()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.list_definitions().await.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_definition_is_not_stored() {
        let service = WorkflowService::new();
        let mut request = approval_request();
        request.states[1].is_initial = true;

        let err = service.create_definition(request).await.unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidDefinition { .. }));
        assert!(service.list_definitions().await.is_empty());
    }

    #[tokio::test]
    async fn test_start_instance_seeds_initial_state() {
        let service = WorkflowService::new();
        let definition = service.create_definition(approval_request()).await.unwrap();

        let instance = service.start_instance(&definition.id).await.unwrap();
        assert_eq!(instance.definition_id, definition.id);
        assert_eq!(instance.current_state_id, "pending");
        assert!(instance.history.is_empty());
    }

    #[tokio::test]
    async fn test_start_instance_unknown_definition_fails() {
        let service = WorkflowService::new();
        let err = service.start_instance("missing").await.unwrap_err();
        assert!(matches!(err, WorkflowError::DefinitionNotFound { .. }));
    }

    #[tokio::test]
    async fn test_execute_action_returns_updated_snapshot() {
        let service = WorkflowService::new();
        let definition = service.create_definition(approval_request()).await.unwrap();
        let instance = service.start_instance(&definition.id).await.unwrap();

        let updated = service.execute_action(&instance.id, "approve").await.unwrap();
        assert_eq!(updated.current_state_id, "approved");
        assert_eq!(updated.history.len(), 1);

        // The stored copy advanced as well
        let stored = service.get_instance(&instance.id).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_execute_action_failure_leaves_instance_unchanged() {
        let service = WorkflowService::new();
        let definition = service.create_definition(approval_request()).await.unwrap();
        let instance = service.start_instance(&definition.id).await.unwrap();

        let err = service.execute_action(&instance.id, "complete").await.unwrap_err();
        assert!(matches!(err, WorkflowError::IllegalTransition { .. }));

        let stored = service.get_instance(&instance.id).await.unwrap();
        assert_eq!(stored.current_state_id, "pending");
        assert!(stored.history.is_empty());
    }

    #[tokio::test]
    async fn test_execute_action_unknown_instance_fails() {
        let service = WorkflowService::new();
        let err = service.execute_action("missing", "approve").await.unwrap_err();
        assert!(matches!(err, WorkflowError::InstanceNotFound { .. }));
    }

    #[tokio::test]
    async fn test_instances_of_same_definition_are_independent() {
        let service = WorkflowService::new();
        let definition = service.create_definition(approval_request()).await.unwrap();
        let first = service.start_instance(&definition.id).await.unwrap();
        let second = service.start_instance(&definition.id).await.unwrap();

        service.execute_action(&first.id, "approve").await.unwrap();

        let untouched = service.get_instance(&second.id).await.unwrap();
        assert_eq!(untouched.current_state_id, "pending");
        assert!(untouched.history.is_empty());
    }
}

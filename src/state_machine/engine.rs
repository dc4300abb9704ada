use chrono::Utc;
use tracing::debug;

use crate::error::{Result, WorkflowError};
use crate::models::{HistoryEntry, WorkflowDefinition, WorkflowInstance};

/// Validates and applies transitions against a workflow instance.
///
/// Checks run in a fixed order, each with a distinct failure kind:
/// action resolution, action enablement, current-state resolution,
/// terminal-state gating, then source-state legality. The terminal check
/// precedes the source-state check, so a final state blocks every action
/// even when the action lists it as a source.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionEngine;

impl TransitionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate and apply one transition.
    ///
    /// On success the instance's current state becomes the action's target
    /// and the returned entry has been appended to its history. On any
    /// failure the instance is left untouched.
    pub fn execute(
        &self,
        instance: &mut WorkflowInstance,
        definition: &WorkflowDefinition,
        action_id: &str,
    ) -> Result<HistoryEntry> {
        let action = definition.find_action(action_id).ok_or_else(|| {
            WorkflowError::ActionNotFound {
                action_id: action_id.to_string(),
            }
        })?;

        if !action.enabled {
            return Err(WorkflowError::ActionDisabled {
                action_id: action.id.clone(),
            });
        }

        // Current state is always a valid state id of the definition; a
        // miss here means a store invariant was broken upstream.
        let current = definition
            .find_state(&instance.current_state_id)
            .ok_or_else(|| {
                WorkflowError::internal(format!(
                    "instance '{}' is in state '{}' which does not exist in definition '{}'",
                    instance.id, instance.current_state_id, definition.id
                ))
            })?;

        if current.is_final {
            return Err(WorkflowError::TerminalState {
                state_id: current.id.clone(),
            });
        }

        if !action.can_fire_from(&current.id) {
            return Err(WorkflowError::IllegalTransition {
                action_id: action.id.clone(),
                state_id: current.id.clone(),
            });
        }

        // Build the record first so both fields mutate together below and
        // the caller never observes a partial update.
        let entry = HistoryEntry {
            action_id: action.id.clone(),
            action_name: action.name.clone(),
            from_state_id: current.id.clone(),
            to_state_id: action.to_state.clone(),
            timestamp: Utc::now(),
        };

        instance.current_state_id = action.to_state.clone();
        instance.history.push(entry.clone());

        debug!(
            instance_id = %instance.id,
            action_id = %entry.action_id,
            from_state = %entry.from_state_id,
            to_state = %entry.to_state_id,
            "applied transition"
        );

        Ok(entry)
    }
}

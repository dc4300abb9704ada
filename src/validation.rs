//! Structural validation for proposed workflow definitions.
//!
//! Runs once at creation time, before a definition is stored. Checks fail
//! fast in a fixed order so a given malformed input always reports the
//! same reason; duplicate detection scans the whole collection rather than
//! stopping at the first pair.

use std::collections::HashSet;

use crate::error::{Result, WorkflowError};
use crate::models::{Action, State};

/// Validate a proposed definition for structural correctness
pub fn validate_definition(name: &str, states: &[State], actions: &[Action]) -> Result<()> {
    validate_name(name)?;
    validate_has_states(states)?;
    validate_unique_state_ids(states)?;
    validate_unique_action_ids(actions)?;
    validate_single_initial_state(states)?;
    validate_action_references(states, actions)?;
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(WorkflowError::invalid_definition(
            "definition name must not be empty",
        ));
    }
    Ok(())
}

fn validate_has_states(states: &[State]) -> Result<()> {
    if states.is_empty() {
        return Err(WorkflowError::invalid_definition(
            "definition must have at least one state",
        ));
    }
    Ok(())
}

fn validate_unique_state_ids(states: &[State]) -> Result<()> {
    let mut seen = HashSet::new();
    for state in states {
        if !seen.insert(state.id.as_str()) {
            return Err(WorkflowError::invalid_definition(format!(
                "duplicate state id '{}'",
                state.id
            )));
        }
    }
    Ok(())
}

fn validate_unique_action_ids(actions: &[Action]) -> Result<()> {
    let mut seen = HashSet::new();
    for action in actions {
        if !seen.insert(action.id.as_str()) {
            return Err(WorkflowError::invalid_definition(format!(
                "duplicate action id '{}'",
                action.id
            )));
        }
    }
    Ok(())
}

fn validate_single_initial_state(states: &[State]) -> Result<()> {
    let initial_count = states.iter().filter(|s| s.is_initial).count();
    if initial_count != 1 {
        return Err(WorkflowError::invalid_definition(
            "exactly one initial state required",
        ));
    }
    Ok(())
}

fn validate_action_references(states: &[State], actions: &[Action]) -> Result<()> {
    let state_ids: HashSet<&str> = states.iter().map(|s| s.id.as_str()).collect();

    for action in actions {
        if !state_ids.contains(action.to_state.as_str()) {
            return Err(WorkflowError::invalid_definition(format!(
                "action '{}' references unknown target state '{}'",
                action.id, action.to_state
            )));
        }
        for from_state in &action.from_states {
            if !state_ids.contains(from_state.as_str()) {
                return Err(WorkflowError::invalid_definition(format!(
                    "action '{}' references unknown source state '{}'",
                    action.id, from_state
                )));
            }
        }
    }
    Ok(())
}

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use flowstate::models::{Action, DefinitionRequest, State};

pub fn state(id: &str, is_initial: bool, is_final: bool) -> State {
    State {
        id: id.to_string(),
        name: id.to_string(),
        is_initial,
        is_final,
        enabled: true,
        description: None,
    }
}

pub fn action(id: &str, from_states: &[&str], to_state: &str) -> Action {
    Action {
        id: id.to_string(),
        name: format!("{id} action"),
        enabled: true,
        from_states: from_states.iter().map(|s| s.to_string()).collect(),
        to_state: to_state.to_string(),
    }
}

pub fn disabled_action(id: &str, from_states: &[&str], to_state: &str) -> Action {
    Action {
        enabled: false,
        ..action(id, from_states, to_state)
    }
}

/// The reference approval workflow: pending (initial) -> approved ->
/// completed (final), with `approve` and `complete` actions.
pub fn approval_request() -> DefinitionRequest {
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

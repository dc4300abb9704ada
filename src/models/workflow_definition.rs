use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Action, State};

/// Immutable template describing states and legal transitions.
///
/// Created atomically via validate-then-store; never modified afterwards,
/// so running instances can hold a back-reference by id without risk of
/// the graph shifting under them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub id: String,
    pub name: String,
    pub states: Vec<State>,
    pub actions: Vec<Action>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a new definition (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRequest {
    pub name: String,
    pub states: Vec<State>,
    pub actions: Vec<Action>,
}

impl WorkflowDefinition {
    /// Look up a state by identifier
    pub fn find_state(&self, state_id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == state_id)
    }

    /// Look up an action by identifier
    pub fn find_action(&self, action_id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == action_id)
    }

    /// The unique state new instances start in.
    ///
    /// Validation guarantees exactly one state has `is_initial` set, so a
    /// `None` here means the definition bypassed validation.
    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|s| s.is_initial)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable record of one completed transition.
///
/// The action name is captured at execution time rather than re-derived
/// later, so history stays truthful to what actually ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub action_id: String,
    pub action_name: String,
    pub from_state_id: String,
    pub to_state_id: String,
    pub timestamp: DateTime<Utc>,
}

/// One running execution of a workflow definition.
///
/// Holds a non-owning back-reference to its definition by id. Mutated only
/// through the transition engine: the current state advances and history
/// grows, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowInstance {
    pub id: String,
    pub definition_id: String,
    pub current_state_id: String,
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
}

impl WorkflowInstance {
    /// Create an instance seeded at the definition's initial state with
    /// empty history
    pub fn new(id: String, definition_id: String, initial_state_id: String) -> Self {
        Self {
            id,
            definition_id,
            current_state_id: initial_state_id,
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

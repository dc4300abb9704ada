use serde::{Deserialize, Serialize};

/// A transition rule: one or more legal source states and exactly one
/// target state. Source ordering carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub from_states: Vec<String>,
    pub to_state: String,
}

impl Action {
    /// Whether this action lists the given state as a legal source
    pub fn can_fire_from(&self, state_id: &str) -> bool {
        self.from_states.iter().any(|s| s == state_id)
    }
}

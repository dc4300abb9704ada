use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::WorkflowDefinition;

/// Thread-safe repository of accepted workflow definitions.
///
/// Definitions are immutable once stored, so readers only ever see
/// complete snapshots; the lock exists to coordinate inserts with
/// concurrent reads.
#[derive(Clone, Default)]
pub struct DefinitionStore {
    definitions: Arc<RwLock<HashMap<String, WorkflowDefinition>>>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self {
            definitions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store an accepted definition under its id
    pub async fn put(&self, definition: WorkflowDefinition) {
        let mut definitions = self.definitions.write().await;
        debug!(definition_id = %definition.id, name = %definition.name, "stored workflow definition");
        definitions.insert(definition.id.clone(), definition);
    }

    /// Fetch a definition snapshot by id
    pub async fn get(&self, id: &str) -> Option<WorkflowDefinition> {
        let definitions = self.definitions.read().await;
        definitions.get(id).cloned()
    }

    /// List all stored definitions, ordered by creation time
    pub async fn list(&self) -> Vec<WorkflowDefinition> {
        let definitions = self.definitions.read().await;
        let mut all: Vec<WorkflowDefinition> = definitions.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        all
    }

    /// Number of stored definitions
    pub async fn count(&self) -> usize {
        self.definitions.read().await.len()
    }
}

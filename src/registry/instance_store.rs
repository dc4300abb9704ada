use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Result, WorkflowError};
use crate::models::WorkflowInstance;

/// Thread-safe repository of running workflow instances.
///
/// Instances are owned by this store; readers get cloned snapshots and all
/// mutation funnels through [`execute_with`](Self::execute_with), which
/// holds the write lock across the caller's check-then-mutate sequence.
/// Two racing transition requests therefore never observe the same current
/// state and double-append to history.
#[derive(Clone, Default)]
pub struct InstanceStore {
    instances: Arc<RwLock<HashMap<String, WorkflowInstance>>>,
}

impl InstanceStore {
    pub fn new() -> Self {
        Self {
            instances: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a newly started instance under its id
    pub async fn put(&self, instance: WorkflowInstance) {
        let mut instances = self.instances.write().await;
        debug!(
            instance_id = %instance.id,
            definition_id = %instance.definition_id,
            "stored workflow instance"
        );
        instances.insert(instance.id.clone(), instance);
    }

    /// Fetch an instance snapshot by id
    pub async fn get(&self, id: &str) -> Option<WorkflowInstance> {
        let instances = self.instances.read().await;
        instances.get(id).cloned()
    }

    /// List all instances, ordered by creation time
    pub async fn list(&self) -> Vec<WorkflowInstance> {
        let instances = self.instances.read().await;
        let mut all: Vec<WorkflowInstance> = instances.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        all
    }

    /// Number of stored instances
    pub async fn count(&self) -> usize {
        self.instances.read().await.len()
    }

    /// Run `f` against the stored instance under the store's write lock.
    ///
    /// Fails with `InstanceNotFound` if the id is unknown. The closure may
    /// mutate the instance; its result is passed through unchanged, and an
    /// `Err` from the closure leaves whatever state the closure left
    /// behind — callers are expected to mutate only on their success path.
    pub async fn execute_with<F, R>(&self, id: &str, f: F) -> Result<R>
    where
        F: FnOnce(&mut WorkflowInstance) -> Result<R>,
    {
        let mut instances = self.instances.write().await;
        let instance = instances
            .get_mut(id)
            .ok_or_else(|| WorkflowError::InstanceNotFound { id: id.to_string() })?;
        f(instance)
    }
}

use chrono::{DateTime, Utc};

use crate::orchestration::WorkflowService;

/// Shared application state handed to every handler via axum's `State`
/// extractor
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: WorkflowService,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: WorkflowService) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }
}

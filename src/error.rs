use thiserror::Error;

/// Failure kinds for definition validation and instance execution.
///
/// All variants are local, recoverable, caller-facing conditions; none are
/// fatal to the process. The web layer maps them onto HTTP status codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("invalid workflow definition: {reason}")]
    InvalidDefinition { reason: String },

    #[error("workflow definition '{id}' not found")]
    DefinitionNotFound { id: String },

    #[error("workflow instance '{id}' not found")]
    InstanceNotFound { id: String },

    #[error("action '{action_id}' not found in definition")]
    ActionNotFound { action_id: String },

    #[error("action '{action_id}' is disabled")]
    ActionDisabled { action_id: String },

    #[error("state '{state_id}' is final; no further actions may be executed")]
    TerminalState { state_id: String },

    #[error("action '{action_id}' cannot be executed from state '{state_id}'")]
    IllegalTransition {
        action_id: String,
        state_id: String,
    },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl WorkflowError {
    /// Create an `InvalidDefinition` error with the given reason
    pub fn invalid_definition(reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            reason: reason.into(),
        }
    }

    /// Create an `Internal` error for invariant breaches
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, WorkflowError>;

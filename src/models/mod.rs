//! Data model for workflow definitions and running instances.
//!
//! Definitions are immutable once accepted; instances carry the mutable
//! current state and an append-only transition history.

pub mod action;
pub mod state;
pub mod workflow_definition;
pub mod workflow_instance;

// Re-export core models for easy access
pub use action::Action;
pub use state::State;
pub use workflow_definition::{DefinitionRequest, WorkflowDefinition};
pub use workflow_instance::{HistoryEntry, WorkflowInstance};

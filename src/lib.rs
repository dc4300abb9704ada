#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Flowstate
//!
//! Workflow engine with a state-machine core: user-configurable
//! definitions describe states and permitted transitions ("actions"),
//! and instances track one execution each, recording the current state
//! and the full transition history.
//!
//! ## Architecture
//!
//! A definition is validated once at creation time and is immutable from
//! then on. Instances are created against a stored definition, seeded at
//! its unique initial state, and advance only through the transition
//! engine, which enforces state-machine legality (action existence and
//! enablement, terminal-state gating, source-state membership) and
//! appends one history record per applied transition.
//!
//! ## Module Organization
//!
//! - [`models`] - States, actions, definitions, instances, history
//! - [`validation`] - Structural checks for proposed definitions
//! - [`state_machine`] - The runtime transition engine
//! - [`registry`] - In-memory keyed stores for definitions and instances
//! - [`orchestration`] - The workflow service coordinating the above
//! - [`web`] - axum HTTP surface
//! - [`config`] / [`logging`] / [`error`] - Runtime plumbing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowstate::models::DefinitionRequest;
//! use flowstate::orchestration::WorkflowService;
//!
//! # async fn example(request: DefinitionRequest) -> flowstate::Result<()> {
//! let service = WorkflowService::new();
//! let definition = service.create_definition(request).await?;
//! let instance = service.start_instance(&definition.id).await?;
//! let updated = service.execute_action(&instance.id, "approve").await?;
//! println!("instance now in state {}", updated.current_state_id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod registry;
pub mod state_machine;
pub mod validation;
pub mod web;

pub use error::{Result, WorkflowError};
pub use models::{Action, DefinitionRequest, HistoryEntry, State, WorkflowDefinition, WorkflowInstance};
pub use orchestration::WorkflowService;
pub use state_machine::TransitionEngine;

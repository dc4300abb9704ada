//! Orchestration boundary over the validator, stores, and transition
//! engine. The service is the only entry point the web layer talks to.

pub mod workflow_service;

pub use workflow_service::WorkflowService;

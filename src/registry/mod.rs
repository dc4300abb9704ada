//! In-memory keyed repositories for definitions and instances.
//!
//! One process-wide store of each kind, initialized empty at startup and
//! torn down with the process. Both expose the same repository contract
//! (`put`/`get`/`list`); the instance store additionally owns the single
//! synchronized mutation entry point used for transitions.

pub mod definition_store;
pub mod instance_store;

pub use definition_store::DefinitionStore;
pub use instance_store::InstanceStore;

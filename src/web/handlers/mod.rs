//! HTTP handler modules for the workflow API

pub mod health;
pub mod instances;
pub mod workflows;

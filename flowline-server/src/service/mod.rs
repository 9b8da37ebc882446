//! Service Module
//!
//! Business logic layer for the server. Services sit between the API
//! handlers and the registry.

pub mod run;

// Re-export for convenience
pub use run as run_service;

//! Core domain types
//!
//! This module contains the core domain structures for tracking pipeline
//! runs. These types are shared between the registry (which stores them)
//! and the HTTP layer (which serializes them).

pub mod run;

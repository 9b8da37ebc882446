//! Flowline Core
//!
//! Core types for the Flowline CI run tracker.
//!
//! This crate contains:
//! - Domain types: Core business entities (PipelineRun, Stage)
//! - DTOs: Request and filter shapes for the HTTP API

pub mod domain;
pub mod dto;

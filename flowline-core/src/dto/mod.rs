//! Data transfer objects
//!
//! Request bodies and query shapes exchanged over the HTTP API.

pub mod run;

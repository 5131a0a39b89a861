//! Error handling
//!
//! Defines error types for the file manager core and the command
//! dispatcher layer above it.

pub mod types;

pub use types::*;

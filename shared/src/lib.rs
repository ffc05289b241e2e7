//! Diary API Shared Library
//!
//! This crate contains the wire types, validation rules, and error types
//! used by the backend and by API clients.

pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

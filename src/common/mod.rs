// Common module - shared types and utilities across all modules

pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::SearchError;
pub use helpers::{contains_ci, has_value};
pub use validation::{ValidationError, ValidationResult, Validator};

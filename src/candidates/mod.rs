// src/candidates/mod.rs

pub mod models;
pub mod search;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::{Attachment, CandidateRecord, CandidateStatus, FilterState};
pub use search::search_candidates;

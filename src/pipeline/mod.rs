// src/pipeline/mod.rs

pub mod aggregate;
pub mod calendar;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use aggregate::{aggregate_pipeline, PipelineBreakdown};
pub use calendar::{month_name, month_number, parse_applied_date, Quarter, MONTH_NAMES};
pub use models::{Period, PipelineCandidate, RoleRecord, Stage};

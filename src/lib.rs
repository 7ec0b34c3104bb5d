// Candidate search filtering and hiring-pipeline aggregation.
//
// Pure, synchronous views over already-materialized record collections. The
// host application owns fetching, rendering, and persistence; this crate only
// derives filtered subsets and stage groupings from the data it is handed.

pub mod candidates;
pub mod common;
pub mod pipeline;

// Re-export the public surface at the crate root
pub use candidates::models::{Attachment, CandidateRecord, CandidateStatus, FilterState};
pub use candidates::search::search_candidates;
pub use candidates::validators::FilterStateValidator;
pub use common::{SearchError, ValidationError, ValidationResult, Validator};
pub use pipeline::aggregate::{aggregate_pipeline, PipelineBreakdown};
pub use pipeline::calendar::Quarter;
pub use pipeline::models::{Period, PipelineCandidate, RoleRecord, Stage};

// src/candidates/validators.rs

use super::models::FilterState;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Filter State Validators
// ============================================================================

/// Sanity checks on user-selected criteria before a search pass. The search
/// itself tolerates anything; these exist so hosts can surface form errors
/// instead of silently returning an empty listing.
pub struct FilterStateValidator;

impl Validator<FilterState> for FilterStateValidator {
    fn validate(&self, data: &FilterState) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some((min, max)) = data.experience {
            if min < 0.0 {
                result.add_error("experience", "Minimum experience cannot be negative");
            }
            if max < min {
                result.add_error(
                    "experience",
                    "Maximum experience cannot be less than minimum experience",
                );
            }
        }

        if data.search_query.len() > 500 {
            result.add_error(
                "search_query",
                "Search query must be less than 500 characters",
            );
        }

        for (index, skill) in data.specific_skills.iter().enumerate() {
            if skill.trim().is_empty() {
                result.add_error(
                    &format!("specific_skills[{}]", index),
                    "Skill entries cannot be blank",
                );
            }
        }

        for (index, keyword) in data.excluded_keywords.iter().enumerate() {
            if keyword.trim().is_empty() {
                result.add_error(
                    &format!("excluded_keywords[{}]", index),
                    "Excluded keyword entries cannot be blank",
                );
            }
        }

        result
    }
}

// src/candidates/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::candidates::models::FilterState;
    use crate::candidates::validators::FilterStateValidator;
    use crate::common::Validator;

    #[test]
    fn test_default_filter_state_is_valid() {
        let validator = FilterStateValidator;
        let result = validator.validate(&FilterState::default());
        assert!(result.is_valid());
        assert_eq!(result.errors.len(), 0);
    }

    #[test]
    fn test_inverted_experience_range_fails() {
        let validator = FilterStateValidator;
        let filters = FilterState {
            experience: Some((10.0, 5.0)),
            ..Default::default()
        };

        let result = validator.validate(&filters);
        assert!(!result.is_valid());
        assert!(result
            .error_messages()
            .iter()
            .any(|m| m.starts_with("experience:")));
    }

    #[test]
    fn test_negative_minimum_experience_fails() {
        let validator = FilterStateValidator;
        let filters = FilterState {
            experience: Some((-1.0, 5.0)),
            ..Default::default()
        };

        let result = validator.validate(&filters);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_overlong_search_query_fails() {
        let validator = FilterStateValidator;
        let filters = FilterState {
            search_query: "a".repeat(501),
            ..Default::default()
        };

        let result = validator.validate(&filters);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_blank_skill_entry_fails_with_indexed_field() {
        let validator = FilterStateValidator;
        let filters = FilterState {
            specific_skills: vec!["React".to_string(), "  ".to_string()],
            ..Default::default()
        };

        let result = validator.validate(&filters);
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].field, "specific_skills[1]");
    }
}

// src/candidates/tests/models_tests.rs

#[cfg(test)]
mod tests {
    use crate::candidates::models::*;

    #[test]
    fn test_experience_accepts_json_number() {
        let record: CandidateRecord =
            serde_json::from_str(r#"{"id":"1","name":"Asha","email":"a@x.dev","experience":7.5}"#)
                .unwrap();
        assert_eq!(record.experience, 7.5);
    }

    #[test]
    fn test_experience_accepts_numeric_string() {
        let record: CandidateRecord =
            serde_json::from_str(r#"{"id":"1","name":"Asha","email":"a@x.dev","experience":"8"}"#)
                .unwrap();
        assert_eq!(record.experience, 8.0);
    }

    #[test]
    fn test_unparsable_experience_falls_back_to_zero() {
        let record: CandidateRecord = serde_json::from_str(
            r#"{"id":"1","name":"Asha","email":"a@x.dev","experience":"N/A"}"#,
        )
        .unwrap();
        assert_eq!(record.experience, 0.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let record: CandidateRecord = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(record.experience, 0.0);
        assert!(record.skills.is_empty());
        assert!(record.resume_file.is_none());
    }

    #[test]
    fn test_filter_state_deserializes_from_empty_object() {
        let filters: FilterState = serde_json::from_str("{}").unwrap();
        assert_eq!(filters, FilterState::default());
        assert_eq!(filters.experience, None);
    }

    #[test]
    fn test_attachment_wire_names() {
        let flags: Vec<Attachment> =
            serde_json::from_str(r#"["resume","portfolio","website"]"#).unwrap();
        assert_eq!(
            flags,
            vec![Attachment::Resume, Attachment::Portfolio, Attachment::Website]
        );
    }

    #[test]
    fn test_candidate_status_wire_names() {
        let status: CandidateStatus = serde_json::from_str(r#""new_registration""#).unwrap();
        assert_eq!(status, CandidateStatus::NewRegistration);
        let status: CandidateStatus = serde_json::from_str(r#""modified_candidates""#).unwrap();
        assert_eq!(status, CandidateStatus::ModifiedCandidates);
    }
}

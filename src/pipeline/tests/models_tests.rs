// src/pipeline/tests/models_tests.rs

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::common::SearchError;
    use crate::pipeline::models::{Period, Stage};

    #[test]
    fn test_stage_order_is_fixed() {
        assert_eq!(Stage::ALL.first(), Some(&Stage::Sourced));
        assert_eq!(Stage::ALL.last(), Some(&Stage::Rejected));

        let mut sorted = Stage::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Stage::ALL.to_vec());
    }

    #[test]
    fn test_pipeline_stages_exclude_rejected() {
        assert_eq!(Stage::PIPELINE.len(), Stage::ALL.len() - 1);
        assert!(!Stage::PIPELINE.contains(&Stage::Rejected));
    }

    #[test]
    fn test_stage_labels_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::parse(stage.label()), Some(stage));
        }
        assert_eq!(Stage::parse("hr round"), Some(Stage::HrRound));
        assert_eq!(Stage::parse("  Offer Stage "), Some(Stage::OfferStage));
        assert_eq!(Stage::parse("Onboarding"), None);
    }

    #[test]
    fn test_stage_serializes_as_display_name() {
        assert_eq!(
            serde_json::to_string(&Stage::IntroCall).unwrap(),
            r#""Intro Call""#
        );
        let stage: Stage = serde_json::from_str(r#""Final Round""#).unwrap();
        assert_eq!(stage, Stage::FinalRound);
    }

    #[test]
    fn test_period_constructors_validate_inputs() {
        assert!(Period::monthly(3, 2024).is_ok());
        assert_eq!(
            Period::monthly(13, 2024),
            Err(SearchError::InvalidMonth(13))
        );
        assert!(Period::monthly_by_name("june", 2024).is_ok());
        assert_eq!(
            Period::monthly_by_name("Juneteenth", 2024),
            Err(SearchError::UnknownMonthName("Juneteenth".to_string()))
        );
        assert_eq!(
            Period::quarterly(5, 2024),
            Err(SearchError::InvalidQuarter(5))
        );
    }

    #[test]
    fn test_period_membership() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert!(Period::daily(date).contains(date));
        assert!(!Period::daily(date).contains(date.succ_opt().unwrap()));

        let march = Period::monthly(3, 2024).unwrap();
        assert!(march.contains(date));
        assert!(!march.contains(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()));

        let q1 = Period::quarterly(1, 2024).unwrap();
        assert!(q1.contains(date));
        assert!(!q1.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    }
}

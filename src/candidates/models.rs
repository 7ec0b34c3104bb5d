// src/candidates/models.rs

use serde::{Deserialize, Serialize};

use crate::common::helpers::deserialize_experience;

// ============================================================================
// Candidate Models
// ============================================================================

/// A candidate profile as delivered by the data-fetching layer.
///
/// Records are read-only for the duration of a filter pass; identity is the
/// `id` field. Attachment fields are checked for presence only, their content
/// is never inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    /// Years of experience. Numeric strings in the payload are tolerated;
    /// unparsable values collapse to 0.0.
    #[serde(deserialize_with = "deserialize_experience")]
    pub experience: f64,
    pub title: Option<String>,
    pub location: Option<String>,
    pub preferred_location: Option<String>,
    pub current_company: Option<String>,
    pub education_ug: Option<String>,
    pub education_pg: Option<String>,
    pub notice_period: Option<String>,
    pub employment_type: Option<String>,
    pub resume_file: Option<String>,
    pub portfolio_url: Option<String>,
    pub website_url: Option<String>,
    pub profile_picture: Option<String>,
}

/// Attachment kinds a search can require on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attachment {
    Resume,
    Portfolio,
    Website,
}

/// Candidate listing categories offered by the search UI. Carried on the
/// filter state for hosts that segment their listings, but applies no
/// predicate of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    NewRegistration,
    ModifiedCandidates,
}

// ============================================================================
// Filter State
// ============================================================================

/// The full set of user-selected search criteria.
///
/// Every field is optional in effect: blank strings and empty lists are
/// no-ops, so `FilterState::default()` is the identity filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Inclusive OR match against skills, name and title.
    pub keywords: Vec<String>,
    /// Any hit against skills, name, title or company rejects the candidate.
    pub excluded_keywords: Vec<String>,
    /// Every entry must substring-match at least one candidate skill.
    pub specific_skills: Vec<String>,
    pub search_query: String,
    /// Enables AND/OR operator handling in the free-text query.
    pub boolean_mode: bool,
    /// Inclusive (min, max) range in years; `None` applies no bound, so the
    /// default state stays the identity filter.
    pub experience: Option<(f64, f64)>,
    pub location: String,
    pub preferred_location: String,
    /// Matched against the candidate's title.
    pub role: String,
    /// Matched against the candidate's current company.
    pub company: String,
    pub notice_period: String,
    pub education_ug: String,
    pub education_pg: String,
    pub excluded_companies: Vec<String>,
    /// OR match against the combined education text.
    pub additional_degrees: Vec<String>,
    pub employment_type: String,
    /// Attachments the candidate must carry to be listed.
    pub show_with: Vec<Attachment>,
    pub candidate_status: Option<CandidateStatus>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            excluded_keywords: Vec::new(),
            specific_skills: Vec::new(),
            search_query: String::new(),
            boolean_mode: false,
            experience: None,
            location: String::new(),
            preferred_location: String::new(),
            role: String::new(),
            company: String::new(),
            notice_period: String::new(),
            education_ug: String::new(),
            education_pg: String::new(),
            excluded_companies: Vec::new(),
            additional_degrees: Vec::new(),
            employment_type: String::new(),
            show_with: Vec::new(),
            candidate_status: None,
        }
    }
}

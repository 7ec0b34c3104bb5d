// src/candidates/search.rs

use tracing::debug;

use super::models::{Attachment, CandidateRecord, FilterState};
use crate::common::helpers::{contains_ci, has_value};

// ============================================================================
// Search Entry Point
// ============================================================================

/// Filters candidates against every active criterion.
///
/// Input order is preserved and the input is never mutated; the result borrows
/// the matching records. A fully-default `FilterState` with a blank query
/// returns every candidate. This function never fails: malformed record values
/// simply fail the predicate that needed them.
///
/// `query` takes precedence over `filters.search_query`; the stored query is
/// used when the argument is blank.
pub fn search_candidates<'a>(
    candidates: &'a [CandidateRecord],
    filters: &FilterState,
    query: &str,
) -> Vec<&'a CandidateRecord> {
    let query = if query.trim().is_empty() {
        filters.search_query.as_str()
    } else {
        query
    };

    let matched: Vec<&CandidateRecord> = candidates
        .iter()
        .filter(|candidate| matches_all(candidate, filters, query))
        .collect();

    debug!(
        total = candidates.len(),
        matched = matched.len(),
        "Candidate search pass completed"
    );

    matched
}

fn matches_all(candidate: &CandidateRecord, filters: &FilterState, query: &str) -> bool {
    !hits_excluded_keywords(candidate, &filters.excluded_keywords)
        && !hits_excluded_companies(candidate, &filters.excluded_companies)
        && matches_keywords(candidate, &filters.keywords)
        && matches_specific_skills(candidate, &filters.specific_skills)
        && matches_query(candidate, query, filters.boolean_mode)
        && in_experience_range(candidate, filters.experience)
        && matches_field_filters(candidate, filters)
        && matches_additional_degrees(candidate, &filters.additional_degrees)
        && matches_employment_type(candidate, &filters.employment_type)
        && has_required_attachments(candidate, &filters.show_with)
}

// ============================================================================
// Predicates
// ============================================================================

/// Rejects on any hit against skills, name, title or current company.
fn hits_excluded_keywords(candidate: &CandidateRecord, excluded: &[String]) -> bool {
    active_terms(excluded).any(|term| {
        matches_skill_name_title(candidate, term)
            || optional_field_contains(&candidate.current_company, term)
    })
}

fn hits_excluded_companies(candidate: &CandidateRecord, excluded: &[String]) -> bool {
    active_terms(excluded).any(|term| optional_field_contains(&candidate.current_company, term))
}

/// Inclusive OR: at least one keyword must hit skills, name or title.
fn matches_keywords(candidate: &CandidateRecord, keywords: &[String]) -> bool {
    let mut terms = active_terms(keywords).peekable();
    if terms.peek().is_none() {
        return true;
    }
    terms.any(|term| matches_skill_name_title(candidate, term))
}

/// Required AND: every entry must substring-match some candidate skill.
fn matches_specific_skills(candidate: &CandidateRecord, required: &[String]) -> bool {
    active_terms(required).all(|term| {
        candidate
            .skills
            .iter()
            .any(|skill| contains_ci(skill, term))
    })
}

fn in_experience_range(candidate: &CandidateRecord, range: Option<(f64, f64)>) -> bool {
    match range {
        Some((min, max)) => candidate.experience >= min && candidate.experience <= max,
        None => true,
    }
}

fn matches_field_filters(candidate: &CandidateRecord, filters: &FilterState) -> bool {
    let education = education_text(candidate);

    required_contains(&candidate.location, &filters.location)
        && required_contains(&candidate.preferred_location, &filters.preferred_location)
        && required_contains(&candidate.title, &filters.role)
        && required_contains(&candidate.current_company, &filters.company)
        && required_contains(&candidate.notice_period, &filters.notice_period)
        && text_contains(&education, &filters.education_ug)
        && text_contains(&education, &filters.education_pg)
}

/// OR over degree terms against the combined education text.
fn matches_additional_degrees(candidate: &CandidateRecord, degrees: &[String]) -> bool {
    let mut terms = active_terms(degrees).peekable();
    if terms.peek().is_none() {
        return true;
    }
    let education = education_text(candidate);
    terms.any(|term| contains_ci(&education, term))
}

/// The filter only applies when the candidate declares an employment type;
/// records without one are not excluded by it.
fn matches_employment_type(candidate: &CandidateRecord, filter: &str) -> bool {
    let filter = filter.trim();
    if filter.is_empty() {
        return true;
    }
    match candidate.employment_type.as_deref() {
        Some(employment_type) => contains_ci(employment_type, filter),
        None => true,
    }
}

/// Every requested attachment must be present on the candidate. The resume
/// flag requires an actual resume file; a profile picture alone does not
/// satisfy it.
fn has_required_attachments(candidate: &CandidateRecord, show_with: &[Attachment]) -> bool {
    show_with.iter().all(|flag| match flag {
        Attachment::Resume => has_value(&candidate.resume_file),
        Attachment::Portfolio => has_value(&candidate.portfolio_url),
        Attachment::Website => has_value(&candidate.website_url),
    })
}

// ============================================================================
// Free-Text Query
// ============================================================================

/// Evaluates the free-text query against the candidate's combined text.
///
/// Boolean mode honors standalone AND / OR operator words (AND wins when both
/// appear); without an operator the whole query is one substring. Outside
/// boolean mode the query splits on whitespace with OR semantics, so a
/// multi-word query broadens rather than narrows the result.
fn matches_query(candidate: &CandidateRecord, query: &str, boolean_mode: bool) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let text = combined_text(candidate);

    if boolean_mode {
        if let Some(terms) = split_on_operator(query, "and") {
            return terms.iter().all(|term| text.contains(term.as_str()));
        }
        if let Some(terms) = split_on_operator(query, "or") {
            return terms.iter().any(|term| text.contains(term.as_str()));
        }
        return text.contains(&query.to_lowercase());
    }

    query
        .split_whitespace()
        .any(|term| text.contains(&term.to_lowercase()))
}

/// Splits a query on a standalone operator word, case-insensitively.
/// Returns `None` when the operator never appears.
fn split_on_operator(query: &str, operator: &str) -> Option<Vec<String>> {
    let words: Vec<&str> = query.split_whitespace().collect();
    if !words.iter().any(|word| word.eq_ignore_ascii_case(operator)) {
        return None;
    }

    let mut terms = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for word in words {
        if word.eq_ignore_ascii_case(operator) {
            if !current.is_empty() {
                terms.push(current.join(" ").to_lowercase());
                current.clear();
            }
        } else {
            current.push(word);
        }
    }
    if !current.is_empty() {
        terms.push(current.join(" ").to_lowercase());
    }

    Some(terms)
}

/// Lowercased haystack of name, title, company and skills for free-text search.
fn combined_text(candidate: &CandidateRecord) -> String {
    let mut text = candidate.name.clone();
    for part in [&candidate.title, &candidate.current_company] {
        if let Some(value) = part {
            text.push(' ');
            text.push_str(value);
        }
    }
    for skill in &candidate.skills {
        text.push(' ');
        text.push_str(skill);
    }
    text.to_lowercase()
}

// ============================================================================
// Matching Helpers
// ============================================================================

/// Filter terms with blanks dropped; an empty entry must never reject anyone.
fn active_terms(terms: &[String]) -> impl Iterator<Item = &str> {
    terms.iter().map(|t| t.trim()).filter(|t| !t.is_empty())
}

fn matches_skill_name_title(candidate: &CandidateRecord, term: &str) -> bool {
    candidate.skills.iter().any(|skill| contains_ci(skill, term))
        || contains_ci(&candidate.name, term)
        || optional_field_contains(&candidate.title, term)
}

fn optional_field_contains(field: &Option<String>, term: &str) -> bool {
    field.as_deref().map_or(false, |value| contains_ci(value, term))
}

/// An active filter requires a match on the field; a blank filter is a no-op.
fn required_contains(field: &Option<String>, filter: &str) -> bool {
    let filter = filter.trim();
    if filter.is_empty() {
        return true;
    }
    optional_field_contains(field, filter)
}

fn text_contains(haystack: &str, filter: &str) -> bool {
    let filter = filter.trim();
    if filter.is_empty() {
        return true;
    }
    contains_ci(haystack, filter)
}

/// UG and PG degrees are matched as a single combined haystack.
fn education_text(candidate: &CandidateRecord) -> String {
    let mut text = String::new();
    for part in [&candidate.education_ug, &candidate.education_pg] {
        if let Some(value) = part {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(value);
        }
    }
    text
}

// src/pipeline/aggregate.rs

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use super::calendar::parse_applied_date;
use super::models::{Period, PipelineCandidate, RoleRecord, Stage};

// ============================================================================
// Pipeline Breakdown
// ============================================================================

/// Derived view of a job pipeline: the filtered records in input order, stage
/// buckets in display order, and per-status counts.
///
/// `by_stage` holds a bucket for every pipeline stage (empty buckets are
/// present) and never one for `Rejected`. `counts` covers the full status
/// vocabulary including `Rejected`. Records whose status falls outside the
/// vocabulary remain in `filtered` but appear in no bucket and no count.
#[derive(Debug)]
pub struct PipelineBreakdown<'a> {
    pub filtered: Vec<&'a PipelineCandidate>,
    pub by_stage: BTreeMap<Stage, Vec<&'a PipelineCandidate>>,
    pub counts: BTreeMap<Stage, usize>,
}

impl PipelineBreakdown<'_> {
    pub fn count(&self, stage: Stage) -> usize {
        self.counts.get(&stage).copied().unwrap_or(0)
    }

    pub fn stage(&self, stage: Stage) -> &[&PipelineCandidate] {
        self.by_stage.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Filters pipeline records by period and role selection, then groups the
/// survivors by stage.
///
/// `period = None` applies no temporal filter; an active period excludes
/// records whose applied date is missing or unparsable. An empty
/// `selected_role_ids` applies no role filter; a non-empty selection keeps
/// only records whose role name matches a selected catalog entry, so a
/// selection that resolves to nothing keeps nothing.
pub fn aggregate_pipeline<'a>(
    records: &'a [PipelineCandidate],
    period: Option<&Period>,
    selected_role_ids: &[String],
    role_catalog: &[RoleRecord],
) -> PipelineBreakdown<'a> {
    let role_names = resolve_role_names(selected_role_ids, role_catalog);

    let filtered: Vec<&PipelineCandidate> = records
        .iter()
        .filter(|record| matches_period(record, period))
        .filter(|record| matches_role(record, role_names.as_ref()))
        .collect();

    let mut by_stage: BTreeMap<Stage, Vec<&PipelineCandidate>> = Stage::PIPELINE
        .iter()
        .map(|stage| (*stage, Vec::new()))
        .collect();
    let mut counts: BTreeMap<Stage, usize> =
        Stage::ALL.iter().map(|stage| (*stage, 0)).collect();

    for record in filtered.iter().copied() {
        match Stage::parse(&record.current_status) {
            Some(stage) => {
                *counts.entry(stage).or_insert(0) += 1;
                if stage != Stage::Rejected {
                    by_stage.entry(stage).or_default().push(record);
                }
            }
            None => {
                debug!(
                    id = %record.id,
                    status = %record.current_status,
                    "Record status outside the stage vocabulary; left unbucketed"
                );
            }
        }
    }

    debug!(
        total = records.len(),
        filtered = filtered.len(),
        "Pipeline aggregation pass completed"
    );

    PipelineBreakdown {
        filtered,
        by_stage,
        counts,
    }
}

// ============================================================================
// Filters
// ============================================================================

fn matches_period(record: &PipelineCandidate, period: Option<&Period>) -> bool {
    let Some(period) = period else {
        return true;
    };
    match record.applied_date.as_deref().and_then(parse_applied_date) {
        Some(date) => period.contains(date),
        None => false,
    }
}

/// Resolves the selected role ids to lowercased titles through the catalog.
/// Ids with no catalog entry contribute no matches; `None` means no role
/// filter is active.
fn resolve_role_names(selected: &[String], catalog: &[RoleRecord]) -> Option<HashSet<String>> {
    let selected: Vec<&str> = selected
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .collect();
    if selected.is_empty() {
        return None;
    }

    let mut names = HashSet::new();
    for id in selected {
        match catalog.iter().find(|role| role.id == id) {
            Some(role) => {
                names.insert(role.title.trim().to_lowercase());
            }
            None => {
                warn!(role_id = %id, "Selected role id not present in the role catalog");
            }
        }
    }
    Some(names)
}

fn matches_role(record: &PipelineCandidate, role_names: Option<&HashSet<String>>) -> bool {
    match role_names {
        None => true,
        Some(names) => names.contains(&record.role_applied.trim().to_lowercase()),
    }
}

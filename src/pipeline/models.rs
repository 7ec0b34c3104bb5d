// src/pipeline/models.rs

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar::{month_number, Quarter};
use crate::common::SearchError;

// ============================================================================
// Pipeline Records
// ============================================================================

/// One candidate inside a job's hiring pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineCandidate {
    pub id: String,
    /// Role name as applied for. The record carries no role id; role filters
    /// resolve through the role catalog by name.
    pub role_applied: String,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Free-form amount with unit, e.g. "12 LPA". Kept opaque.
    pub salary: Option<String>,
    pub current_status: String,
    /// DD-MM-YYYY. Missing or malformed dates drop out of temporal views.
    pub applied_date: Option<String>,
}

/// An entry of the role catalog used to resolve role selections to names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: String,
    pub title: String,
}

// ============================================================================
// Pipeline Stages
// ============================================================================

/// Hiring pipeline stages in their fixed display order.
///
/// Dashboards render buckets in this sequence; the order and spelling must
/// not change. `Rejected` is terminal: it receives a count but never a
/// stage bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Stage {
    #[serde(rename = "Sourced")]
    Sourced,
    #[serde(rename = "Shortlisted")]
    Shortlisted,
    #[serde(rename = "Intro Call")]
    IntroCall,
    #[serde(rename = "Assignment")]
    Assignment,
    #[serde(rename = "L1")]
    L1,
    #[serde(rename = "L2")]
    L2,
    #[serde(rename = "L3")]
    L3,
    #[serde(rename = "Final Round")]
    FinalRound,
    #[serde(rename = "HR Round")]
    HrRound,
    #[serde(rename = "Offer Stage")]
    OfferStage,
    #[serde(rename = "Closure")]
    Closure,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl Stage {
    /// The full status vocabulary, in display order.
    pub const ALL: [Stage; 12] = [
        Stage::Sourced,
        Stage::Shortlisted,
        Stage::IntroCall,
        Stage::Assignment,
        Stage::L1,
        Stage::L2,
        Stage::L3,
        Stage::FinalRound,
        Stage::HrRound,
        Stage::OfferStage,
        Stage::Closure,
        Stage::Rejected,
    ];

    /// Stages that form pipeline buckets, i.e. everything except `Rejected`.
    pub const PIPELINE: [Stage; 11] = [
        Stage::Sourced,
        Stage::Shortlisted,
        Stage::IntroCall,
        Stage::Assignment,
        Stage::L1,
        Stage::L2,
        Stage::L3,
        Stage::FinalRound,
        Stage::HrRound,
        Stage::OfferStage,
        Stage::Closure,
    ];

    /// Display name as it appears on record statuses and dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Sourced => "Sourced",
            Stage::Shortlisted => "Shortlisted",
            Stage::IntroCall => "Intro Call",
            Stage::Assignment => "Assignment",
            Stage::L1 => "L1",
            Stage::L2 => "L2",
            Stage::L3 => "L3",
            Stage::FinalRound => "Final Round",
            Stage::HrRound => "HR Round",
            Stage::OfferStage => "Offer Stage",
            Stage::Closure => "Closure",
            Stage::Rejected => "Rejected",
        }
    }

    /// Maps a wire status string onto the vocabulary, case-insensitively.
    /// Unknown statuses get `None`; such records stay in the filtered set but
    /// enter no bucket.
    pub fn parse(status: &str) -> Option<Stage> {
        let status = status.trim();
        Stage::ALL
            .iter()
            .copied()
            .find(|stage| stage.label().eq_ignore_ascii_case(status))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Reporting Periods
// ============================================================================

/// Temporal window for a pipeline view. Records with missing or unparsable
/// applied dates are excluded whenever a period is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Period {
    Daily { date: NaiveDate },
    Monthly { month: u32, year: i32 },
    Quarterly { quarter: Quarter, year: i32 },
}

impl Period {
    pub fn daily(date: NaiveDate) -> Period {
        Period::Daily { date }
    }

    pub fn monthly(month: u32, year: i32) -> Result<Period, SearchError> {
        if !(1..=12).contains(&month) {
            return Err(SearchError::InvalidMonth(month));
        }
        Ok(Period::Monthly { month, year })
    }

    /// Builds a monthly period from a month name ("March", "march", ...)
    /// via the calendar table, the way month dropdowns submit it.
    pub fn monthly_by_name(name: &str, year: i32) -> Result<Period, SearchError> {
        let month =
            month_number(name).ok_or_else(|| SearchError::UnknownMonthName(name.to_string()))?;
        Ok(Period::Monthly { month, year })
    }

    pub fn quarterly(quarter: u8, year: i32) -> Result<Period, SearchError> {
        Ok(Period::Quarterly {
            quarter: Quarter::from_index(quarter)?,
            year,
        })
    }

    /// Calendar membership of a parsed applied date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Period::Daily { date: selected } => date == *selected,
            Period::Monthly { month, year } => date.month() == *month && date.year() == *year,
            Period::Quarterly { quarter, year } => {
                quarter.months().contains(&date.month()) && date.year() == *year
            }
        }
    }
}

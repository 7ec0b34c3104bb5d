// src/pipeline/calendar.rs
//
// Calendar lookup tables for the monthly and quarterly pipeline views. These
// are load-bearing: period filters resolve month names and quarter membership
// through them, never through inline literals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::SearchError;

/// Month names in calendar order; index + 1 is the month number.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name.trim()))
        .map(|index| index as u32 + 1)
}

// ============================================================================
// Quarters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub fn from_index(index: u8) -> Result<Quarter, SearchError> {
        match index {
            1 => Ok(Quarter::Q1),
            2 => Ok(Quarter::Q2),
            3 => Ok(Quarter::Q3),
            4 => Ok(Quarter::Q4),
            other => Err(SearchError::InvalidQuarter(other)),
        }
    }

    /// The three month numbers belonging to this quarter.
    pub fn months(&self) -> [u32; 3] {
        match self {
            Quarter::Q1 => [1, 2, 3],
            Quarter::Q2 => [4, 5, 6],
            Quarter::Q3 => [7, 8, 9],
            Quarter::Q4 => [10, 11, 12],
        }
    }
}

// ============================================================================
// Date Parsing
// ============================================================================

/// Parses an applied date in DD-MM-YYYY form. Malformed values return `None`
/// so a single bad record cannot abort an aggregation pass; the record is
/// simply excluded from temporal views.
pub fn parse_applied_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%d-%m-%Y") {
        Ok(date) => Some(date),
        Err(error) => {
            warn!(raw = %trimmed, error = %error, "Skipping record with malformed applied date");
            None
        }
    }
}

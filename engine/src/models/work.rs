//! Work record model
//!
//! A departmental work as reported for the dashboard: which constituency
//! it belongs to, what it was for, how far it has progressed and what was
//! spent. Everything is optional — the store is schemaless and older
//! records are sparsely filled.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Progress status of a departmental work
///
/// A closed vocabulary. The store holds free-form strings; [`WorkStatus::parse`]
/// normalises them into this set and anything unrecognised stays outside it
/// (and therefore never counts as completed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkStatus {
    /// Sanctioned but not yet started
    Proposed,

    /// Work under execution
    InProgress,

    /// Physical work completed
    Completed,

    /// Completed and formally commissioned
    Commissioned,
}

impl WorkStatus {
    /// Parse a raw store string into the closed status vocabulary
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for anything outside the known vocabulary.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "proposed" | "not started" => Some(Self::Proposed),
            "in progress" | "in-progress" | "ongoing" | "work in progress" => {
                Some(Self::InProgress)
            }
            "completed" | "work completed" => Some(Self::Completed),
            "commissioned" => Some(Self::Commissioned),
            _ => None,
        }
    }

    /// Whether this status counts as completed in reporting
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Commissioned)
    }
}

/// A departmental work as reported for the dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkRecord {
    /// Electoral constituency the work is reported under
    pub constituency: Option<String>,

    /// Raw purpose label as entered (grouped into display categories by the rollup)
    pub purpose: Option<String>,

    /// Raw progress status string as entered
    pub work_status: Option<String>,

    /// Total expenditure booked against the work (rupees)
    pub total_expenditure: Option<f64>,

    /// When the work was completed, if it has been
    pub date_of_completion: Option<NaiveDateTime>,
}

impl WorkRecord {
    /// Whether the recorded status parses to a terminal (completed) status
    pub fn is_completed(&self) -> bool {
        self.work_status
            .as_deref()
            .and_then(WorkStatus::parse)
            .map(WorkStatus::is_terminal)
            .unwrap_or(false)
    }

    /// Booked expenditure, treating absent or malformed figures as zero
    pub fn expenditure_or_zero(&self) -> f64 {
        self.total_expenditure
            .filter(|amt| amt.is_finite())
            .unwrap_or(0.0)
    }
}

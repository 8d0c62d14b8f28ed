//! Constituency/purpose aggregation
//!
//! Folds the department's work records into the per-constituency summary
//! shown on the dashboard: total works, total expenditure, completed
//! count, and a per-purpose-category breakdown with the contributing
//! records retained for drill-down.
//!
//! # Configuration is explicit
//!
//! The constituency vocabulary and the purpose grouping are admin-editable
//! tables maintained elsewhere in the application. They are passed in as
//! [`RollupConfig`] rather than read from ambient state, which keeps the
//! fold a pure function of its arguments.
//!
//! # Critical Invariants
//!
//! - Every valid constituency appears in the output, zeroed when nothing
//!   was bucketed into it
//! - Records with an absent or unknown constituency are dropped, never
//!   bucketed under a catch-all key
//! - Deterministic for a given input order; output keys are alphabetical

use crate::models::WorkRecord;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use thiserror::Error;
use tracing::trace;

/// Display category used when a record carries no purpose label
pub const UNSPECIFIED_PURPOSE: &str = "Unspecified";

/// Errors that can occur while building a rollup query
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RollupError {
    #[error("date range start {start} is after end {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

/// Admin-maintained reporting configuration
///
/// # Example
/// ```
/// use tender_rules_core::RollupConfig;
///
/// let config = RollupConfig::new(
///     ["Thrissur", "Ollur"],
///     [("Open Well Recharge", "ARS"), ("Check Dam", "ARS")],
/// );
/// assert_eq!(config.display_category(Some("Check Dam")), "ARS");
/// assert_eq!(config.display_category(Some("Borewell")), "Borewell");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollupConfig {
    /// Constituency vocabulary; records outside it are dropped
    pub valid_constituencies: BTreeSet<String>,

    /// Many-to-one mapping from raw purpose labels to display categories
    pub purpose_groups: HashMap<String, String>,
}

impl RollupConfig {
    /// Build a configuration from iterables of names and label pairs
    pub fn new<C, N, P, K, V>(valid_constituencies: C, purpose_groups: P) -> Self
    where
        C: IntoIterator<Item = N>,
        N: Into<String>,
        P: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            valid_constituencies: valid_constituencies.into_iter().map(Into::into).collect(),
            purpose_groups: purpose_groups
                .into_iter()
                .map(|(raw, category)| (raw.into(), category.into()))
                .collect(),
        }
    }

    /// Resolve a raw purpose label to its display category
    ///
    /// Unmapped labels pass through unchanged; an absent label resolves to
    /// [`UNSPECIFIED_PURPOSE`].
    pub fn display_category<'a>(&'a self, raw_purpose: Option<&'a str>) -> &'a str {
        match raw_purpose {
            None => UNSPECIFIED_PURPOSE,
            Some(raw) => self
                .purpose_groups
                .get(raw)
                .map(String::as_str)
                .unwrap_or(raw),
        }
    }
}

/// Completion-date filter for the rollup
///
/// The filter is only *active* when both ends are present; with either end
/// missing, every record is admitted. An active filter covers completions
/// from the start of `start` to the end of `end`, inclusive, and excludes
/// records with no completion date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Build a date range, rejecting an inverted interval
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use tender_rules_core::DateRange;
    ///
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 4, 1),
    ///     NaiveDate::from_ymd_opt(2025, 3, 31),
    /// ).unwrap();
    /// assert!(range.is_active());
    /// ```
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, RollupError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(RollupError::InvertedDateRange { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// A range that admits every record
    pub fn open() -> Self {
        Self::default()
    }

    /// Whether both ends are present and the filter applies
    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether a record with the given completion date passes the filter
    pub fn admits(&self, completed: Option<NaiveDateTime>) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => match completed {
                // Comparing dates gives the inclusive start-of-day /
                // end-of-day interval semantics.
                Some(completed) => {
                    let date = completed.date();
                    start <= date && date <= end
                }
                None => false,
            },
            _ => true,
        }
    }
}

/// Per-purpose-category slice of a constituency summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurposeSummary {
    /// Number of works in this category
    pub count: usize,

    /// Total expenditure in this category (rupees)
    pub expenditure: f64,

    /// The contributing records, retained for drill-down views
    pub works: Vec<WorkRecord>,
}

/// Aggregated reporting figures for one constituency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstituencySummary {
    /// Total number of works
    pub total_works: usize,

    /// Total expenditure across all works (rupees)
    pub total_expenditure: f64,

    /// Number of works whose status is terminal (completed/commissioned)
    pub completed_works: usize,

    /// Per-display-category breakdown, keyed alphabetically
    pub purposes: BTreeMap<String, PurposeSummary>,
}

/// Fold work records into per-constituency summaries
///
/// Single pass: each record is admitted through the date filter, dropped
/// unless its constituency is in the vocabulary, resolved to a display
/// category, and accumulated. The output always contains every valid
/// constituency, zeroed when nothing was bucketed into it.
///
/// # Example
/// ```
/// use tender_rules_core::{aggregate, DateRange, RollupConfig, WorkRecord};
///
/// let config = RollupConfig::new(["Thrissur"], std::iter::empty::<(&str, &str)>());
/// let works = vec![WorkRecord {
///     constituency: Some("Thrissur".to_string()),
///     total_expenditure: Some(250_000.0),
///     ..Default::default()
/// }];
///
/// let summaries = aggregate(&works, &config, &DateRange::open());
/// assert_eq!(summaries["Thrissur"].total_works, 1);
/// assert_eq!(summaries["Thrissur"].total_expenditure, 250_000.0);
/// ```
pub fn aggregate(
    works: &[WorkRecord],
    config: &RollupConfig,
    range: &DateRange,
) -> BTreeMap<String, ConstituencySummary> {
    let mut summaries: BTreeMap<String, ConstituencySummary> = config
        .valid_constituencies
        .iter()
        .map(|name| (name.clone(), ConstituencySummary::default()))
        .collect();

    for work in works {
        if !range.admits(work.date_of_completion) {
            continue;
        }
        let Some(constituency) = work.constituency.as_deref() else {
            trace!("dropping work record with no constituency");
            continue;
        };
        let Some(summary) = summaries.get_mut(constituency) else {
            trace!(constituency, "dropping work record outside constituency vocabulary");
            continue;
        };

        let expenditure = work.expenditure_or_zero();
        summary.total_works += 1;
        summary.total_expenditure += expenditure;
        if work.is_completed() {
            summary.completed_works += 1;
        }

        let category = config.display_category(work.purpose.as_deref());
        let purpose = summary.purposes.entry(category.to_owned()).or_default();
        purpose.count += 1;
        purpose.expenditure += expenditure;
        purpose.works.push(work.clone());
    }

    summaries
}

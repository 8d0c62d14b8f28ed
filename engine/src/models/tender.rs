//! Tender model
//!
//! Financial facts recorded against a tender, and the milestone dates the
//! lifecycle status is derived from.
//!
//! # Notes on the financial fields
//!
//! - The Performance Guarantee is *manually entered* by the section clerk.
//!   Departmental practice describes it as "nominally 5% of the accepted
//!   quote", but the stored figure is authoritative and this engine never
//!   derives it.
//! - The stamp-paper value defaults to Rs. 200 when the tender record does
//!   not carry one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stamp-paper value used when the tender record carries none (rupees)
pub const DEFAULT_STAMP_PAPER_VALUE: f64 = 200.0;

/// Financial facts recorded against a tender
///
/// All fields are optional: the record is filled in over the life of the
/// tender and every downstream rule degrades gracefully when a field is
/// still blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenderFinancials {
    /// Sanctioned estimate amount (rupees)
    pub estimate_amount: Option<f64>,

    /// Manually entered Performance Guarantee amount (rupees)
    pub performance_guarantee_amount: Option<f64>,

    /// Manually entered Additional Performance Guarantee amount (rupees)
    pub additional_performance_guarantee_amount: Option<f64>,

    /// Stamp-paper value for the agreement (rupees, default 200)
    pub stamp_paper_amount: Option<f64>,
}

/// Milestone dates recorded against a tender
///
/// Each date is entered when the corresponding stage happens; the
/// lifecycle status is derived from whichever milestones are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenderMilestones {
    /// Date the tender notice was published
    pub date_of_publication: Option<NaiveDate>,

    /// Date the received bids were opened
    pub date_of_bid_opening: Option<NaiveDate>,

    /// Date the selection notice was issued to the L1 bidder
    pub date_of_selection_notice: Option<NaiveDate>,

    /// Date the agreement was executed
    pub date_of_agreement: Option<NaiveDate>,

    /// Date the work was completed
    pub date_of_completion: Option<NaiveDate>,
}

/// Lifecycle status of a tender
///
/// A closed set; UI colour legends and capability gates dispatch on these
/// variants rather than on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TenderStatus {
    /// Recorded but not yet published
    Draft,

    /// Tender notice published, awaiting bids
    Published,

    /// Bids opened, under evaluation
    BidsOpened,

    /// Selection notice issued to the L1 bidder
    Awarded,

    /// Agreement executed, work may proceed
    AgreementExecuted,

    /// Work completed
    Completed,
}

impl TenderMilestones {
    /// Derive the lifecycle status from whichever milestone dates are present
    ///
    /// The furthest milestone with a date wins; a later date dominates
    /// earlier ones even when intermediate milestones were never entered
    /// (records migrated from the old registers are often gappy).
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use tender_rules_core::{TenderMilestones, TenderStatus};
    ///
    /// let milestones = TenderMilestones {
    ///     date_of_publication: NaiveDate::from_ymd_opt(2024, 1, 5),
    ///     date_of_bid_opening: NaiveDate::from_ymd_opt(2024, 2, 1),
    ///     ..Default::default()
    /// };
    /// assert_eq!(milestones.derive_status(), TenderStatus::BidsOpened);
    /// ```
    pub fn derive_status(&self) -> TenderStatus {
        if self.date_of_completion.is_some() {
            TenderStatus::Completed
        } else if self.date_of_agreement.is_some() {
            TenderStatus::AgreementExecuted
        } else if self.date_of_selection_notice.is_some() {
            TenderStatus::Awarded
        } else if self.date_of_bid_opening.is_some() {
            TenderStatus::BidsOpened
        } else if self.date_of_publication.is_some() {
            TenderStatus::Published
        } else {
            TenderStatus::Draft
        }
    }
}

impl TenderFinancials {
    /// Stamp-paper value, applying the Rs. 200 default
    ///
    /// An explicitly recorded value is kept even when it is zero; only an
    /// absent or malformed (non-finite, negative) value falls back to the
    /// default.
    pub fn stamp_paper_value(&self) -> f64 {
        self.stamp_paper_amount
            .filter(|amt| amt.is_finite() && *amt >= 0.0)
            .unwrap_or(DEFAULT_STAMP_PAPER_VALUE)
    }
}

//! Guarantee computation
//!
//! Computes the Performance Guarantee and the Additional Performance
//! Guarantee (APG) figures disclosed in selection notices and agreement
//! documents.
//!
//! # The APG rule
//!
//! When the accepted (L1) quote undercuts the sanctioned estimate by more
//! than 10%, the department demands a supplementary guarantee to
//! discourage abnormally low bids. The engine computes *applicability* and
//! the *disclosure percentage*; the guarantee amounts themselves are the
//! manually entered figures from the tender record, passed through
//! unchanged.
//!
//! # Critical Invariants
//!
//! - Guarantee amounts are never negative and never auto-derived
//! - Missing inputs degrade to 0 / false / None; nothing here can fail
//! - The 10% threshold is a fixed constant
//!
//! # Fallback percentage
//!
//! When no L1 quote is available but a manual APG amount and an estimate
//! are both present, the disclosure percentage falls back to
//! `amount / estimate * 100` with no threshold subtraction. The two
//! branches are knowingly asymmetric; the wording of generated notices
//! depends on it, so the asymmetry is kept until the department confirms
//! otherwise.

use crate::models::tender::DEFAULT_STAMP_PAPER_VALUE;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Undercut fraction above which an Additional Performance Guarantee is required
pub const APG_THRESHOLD: f64 = 0.10;

/// Inputs to the guarantee computation
///
/// All fields are optional; absent fields degrade to the neutral defaults
/// described on [`compute_guarantees`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuaranteeInputs {
    /// Sanctioned estimate amount (rupees)
    pub estimate_amount: Option<f64>,

    /// Accepted L1 quote (rupees), usually from [`crate::select_l1`]
    pub l1_quote: Option<f64>,

    /// Manually entered Performance Guarantee amount (rupees)
    pub manual_performance_guarantee: Option<f64>,

    /// Manually entered Additional Performance Guarantee amount (rupees)
    pub manual_additional_guarantee: Option<f64>,

    /// Stamp-paper value recorded on the tender (rupees)
    pub stamp_paper_amount: Option<f64>,
}

/// Computed guarantee figures for disclosure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeBreakdown {
    /// Performance Guarantee amount (rupees), 0 when none recorded
    pub performance_guarantee: f64,

    /// Whether an Additional Performance Guarantee is required
    pub additional_guarantee_required: bool,

    /// Additional Performance Guarantee amount (rupees), 0 when not required
    pub additional_guarantee: f64,

    /// Disclosure percentage for the APG, rounded to 2 decimals;
    /// `None` when no APG applies
    pub additional_guarantee_percent: Option<f64>,

    /// Stamp-paper value (rupees), defaulted to 200 when unset
    pub stamp_paper_value: f64,
}

/// Compute the guarantee figures for a tender
///
/// 1. The Performance Guarantee is the manually entered figure, defaulted
///    to 0. The nominal "5% of the accepted quote" rule is departmental
///    guidance, not something this engine derives.
/// 2. The stamp-paper value defaults to Rs. 200.
/// 3. The APG applies iff both estimate and L1 quote are present, the
///    quote is below the estimate, and the undercut fraction
///    `(estimate - l1) / estimate` exceeds [`APG_THRESHOLD`]. The
///    disclosure percentage is the excess over the threshold, times 100.
/// 4. The APG amount is always the manually entered figure (passthrough);
///    the percentage is disclosure only.
///
/// # Example
/// ```
/// use tender_rules_core::{compute_guarantees, GuaranteeInputs};
///
/// let breakdown = compute_guarantees(&GuaranteeInputs {
///     estimate_amount: Some(100_000.0),
///     l1_quote: Some(85_000.0),
///     manual_additional_guarantee: Some(6_000.0),
///     ..Default::default()
/// });
/// assert!(breakdown.additional_guarantee_required);
/// assert_eq!(breakdown.additional_guarantee_percent, Some(5.0));
/// assert_eq!(breakdown.additional_guarantee, 6_000.0);
/// ```
pub fn compute_guarantees(inputs: &GuaranteeInputs) -> GuaranteeBreakdown {
    let estimate = positive_amount(inputs.estimate_amount);
    let l1_quote = positive_amount(inputs.l1_quote);
    let manual_additional = non_negative_amount(inputs.manual_additional_guarantee);

    let performance_guarantee =
        non_negative_amount(inputs.manual_performance_guarantee).unwrap_or(0.0);
    let stamp_paper_value = non_negative_amount(inputs.stamp_paper_amount)
        .unwrap_or(DEFAULT_STAMP_PAPER_VALUE);

    let mut breakdown = GuaranteeBreakdown {
        performance_guarantee,
        additional_guarantee_required: false,
        additional_guarantee: 0.0,
        additional_guarantee_percent: None,
        stamp_paper_value,
    };

    match (estimate, l1_quote) {
        (Some(estimate), Some(l1)) if l1 < estimate => {
            let percentage_difference = (estimate - l1) / estimate;
            if percentage_difference > APG_THRESHOLD {
                breakdown.additional_guarantee_required = true;
                breakdown.additional_guarantee = manual_additional.unwrap_or(0.0);
                breakdown.additional_guarantee_percent =
                    Some(round2((percentage_difference - APG_THRESHOLD) * 100.0));
                debug!(
                    undercut = percentage_difference,
                    "additional performance guarantee required"
                );
            }
        }
        // No quote on record yet, but an APG amount was entered: disclose
        // the percentage relative to the estimate, without the threshold
        // subtraction (see module docs).
        (Some(estimate), None) => {
            if let Some(amount) = manual_additional.filter(|amt| *amt > 0.0) {
                breakdown.additional_guarantee_required = true;
                breakdown.additional_guarantee = amount;
                breakdown.additional_guarantee_percent =
                    Some(round2(amount / estimate * 100.0));
            }
        }
        _ => {}
    }

    breakdown
}

/// Round to 2 decimals for disclosure text
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A finite amount usable as a divisor or comparison base
fn positive_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|amt| amt.is_finite() && *amt > 0.0)
}

/// A finite, non-negative monetary figure
fn non_negative_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|amt| amt.is_finite() && *amt >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.3333), 3.33);
        assert_eq!(round2(6.6666), 6.67);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn test_all_inputs_absent() {
        let breakdown = compute_guarantees(&GuaranteeInputs::default());
        assert_eq!(breakdown.performance_guarantee, 0.0);
        assert!(!breakdown.additional_guarantee_required);
        assert_eq!(breakdown.additional_guarantee, 0.0);
        assert_eq!(breakdown.additional_guarantee_percent, None);
        assert_eq!(breakdown.stamp_paper_value, 200.0);
    }
}

//! Guarantee Computation Tests
//!
//! Covers the Performance Guarantee passthrough, the stamp-paper default,
//! the 10% Additional Performance Guarantee threshold and the fallback
//! disclosure-percentage path used when no L1 quote is on record.

use tender_rules_core::{compute_guarantees, GuaranteeInputs, APG_THRESHOLD};

// ============================================================================
// Test Group 1: Performance Guarantee and Stamp Paper
// ============================================================================

#[test]
fn test_performance_guarantee_is_manual_passthrough() {
    let breakdown = compute_guarantees(&GuaranteeInputs {
        l1_quote: Some(100_000.0),
        manual_performance_guarantee: Some(7_250.0),
        ..Default::default()
    });
    // Never auto-derived from the quote (the nominal 5% rule is
    // departmental guidance only).
    assert_eq!(breakdown.performance_guarantee, 7_250.0);
}

#[test]
fn test_performance_guarantee_defaults_to_zero() {
    let breakdown = compute_guarantees(&GuaranteeInputs {
        l1_quote: Some(100_000.0),
        ..Default::default()
    });
    assert_eq!(breakdown.performance_guarantee, 0.0);
}

#[test]
fn test_malformed_manual_figures_degrade_to_zero() {
    let breakdown = compute_guarantees(&GuaranteeInputs {
        manual_performance_guarantee: Some(f64::NAN),
        manual_additional_guarantee: Some(-500.0),
        ..Default::default()
    });
    assert_eq!(breakdown.performance_guarantee, 0.0);
    assert_eq!(breakdown.additional_guarantee, 0.0);
}

#[test]
fn test_stamp_paper_defaults_to_200() {
    let breakdown = compute_guarantees(&GuaranteeInputs::default());
    assert_eq!(breakdown.stamp_paper_value, 200.0);
}

#[test]
fn test_stamp_paper_explicit_value_is_kept() {
    let breakdown = compute_guarantees(&GuaranteeInputs {
        stamp_paper_amount: Some(500.0),
        ..Default::default()
    });
    assert_eq!(breakdown.stamp_paper_value, 500.0);
}

// ============================================================================
// Test Group 2: APG Threshold
// ============================================================================

#[test]
fn test_apg_required_above_threshold() {
    // Undercut = 15%: required, disclosure percent = (0.15 - 0.10) * 100.
    let breakdown = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(100_000.0),
        l1_quote: Some(85_000.0),
        manual_additional_guarantee: Some(6_000.0),
        ..Default::default()
    });
    assert!(breakdown.additional_guarantee_required);
    assert_eq!(breakdown.additional_guarantee_percent, Some(5.0));
    assert_eq!(breakdown.additional_guarantee, 6_000.0);
}

#[test]
fn test_apg_not_required_below_threshold() {
    // Undercut = 5%: not required even when a manual amount exists.
    let breakdown = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(100_000.0),
        l1_quote: Some(95_000.0),
        manual_additional_guarantee: Some(6_000.0),
        ..Default::default()
    });
    assert!(!breakdown.additional_guarantee_required);
    assert_eq!(breakdown.additional_guarantee, 0.0);
    assert_eq!(breakdown.additional_guarantee_percent, None);
}

#[test]
fn test_apg_not_required_at_exact_threshold() {
    // Undercut of exactly 10% does not trigger (strict comparison).
    let breakdown = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(100_000.0),
        l1_quote: Some(90_000.0),
        ..Default::default()
    });
    assert!(!breakdown.additional_guarantee_required);
}

#[test]
fn test_apg_never_required_without_estimate() {
    let breakdown = compute_guarantees(&GuaranteeInputs {
        l1_quote: Some(80_000.0),
        manual_additional_guarantee: Some(10_000.0),
        ..Default::default()
    });
    assert!(!breakdown.additional_guarantee_required);
    assert_eq!(breakdown.additional_guarantee, 0.0);
}

#[test]
fn test_apg_not_required_when_quote_at_or_above_estimate() {
    let at_estimate = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(100_000.0),
        l1_quote: Some(100_000.0),
        ..Default::default()
    });
    assert!(!at_estimate.additional_guarantee_required);

    let above_estimate = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(100_000.0),
        l1_quote: Some(110_000.0),
        ..Default::default()
    });
    assert!(!above_estimate.additional_guarantee_required);
}

#[test]
fn test_apg_amount_defaults_to_zero_when_required_but_unentered() {
    let breakdown = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(100_000.0),
        l1_quote: Some(80_000.0),
        ..Default::default()
    });
    assert!(breakdown.additional_guarantee_required);
    assert_eq!(breakdown.additional_guarantee, 0.0);
    assert_eq!(breakdown.additional_guarantee_percent, Some(10.0));
}

#[test]
fn test_apg_percent_is_rounded_to_two_decimals() {
    // Undercut = 12000/90000 = 13.33..% -> excess 3.33..% -> 3.33.
    let breakdown = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(90_000.0),
        l1_quote: Some(78_000.0),
        ..Default::default()
    });
    assert_eq!(breakdown.additional_guarantee_percent, Some(3.33));
}

#[test]
fn test_threshold_constant() {
    assert_eq!(APG_THRESHOLD, 0.10);
}

// ============================================================================
// Test Group 3: Fallback Percentage (no L1 quote on record)
// ============================================================================

#[test]
fn test_fallback_percent_has_no_threshold_subtraction() {
    // amount / estimate * 100, with no 10% subtraction.
    let breakdown = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(100_000.0),
        manual_additional_guarantee: Some(6_000.0),
        ..Default::default()
    });
    assert!(breakdown.additional_guarantee_required);
    assert_eq!(breakdown.additional_guarantee, 6_000.0);
    assert_eq!(breakdown.additional_guarantee_percent, Some(6.0));
}

#[test]
fn test_fallback_needs_a_manual_amount() {
    let breakdown = compute_guarantees(&GuaranteeInputs {
        estimate_amount: Some(100_000.0),
        ..Default::default()
    });
    assert!(!breakdown.additional_guarantee_required);
    assert_eq!(breakdown.additional_guarantee_percent, None);
}

//! Tender Rules Core - Rust Engine
//!
//! Pure bid-evaluation and reporting rules for a ground-water department's
//! tender administration system.
//!
//! # Architecture
//!
//! - **models**: Domain types (Bid, TenderFinancials, WorkRecord, statuses)
//! - **selection**: L1 (lowest bidder) selection
//! - **guarantee**: Performance Guarantee and Additional Performance Guarantee rules
//! - **rollup**: Constituency/purpose aggregation for dashboard reporting
//! - **decode**: Tolerant decoding of loosely-typed store documents
//!
//! # Critical Invariants
//!
//! 1. Every operation is a pure function of its inputs (no I/O, no ambient state)
//! 2. Missing or malformed inputs degrade to neutral defaults, never panic
//! 3. Output ordering is deterministic for a given input order

// Module declarations
pub mod decode;
pub mod guarantee;
pub mod models;
pub mod rollup;
pub mod selection;

// Re-exports for convenience
pub use guarantee::{compute_guarantees, GuaranteeBreakdown, GuaranteeInputs, APG_THRESHOLD};
pub use models::{
    bid::Bid,
    tender::{TenderFinancials, TenderMilestones, TenderStatus, DEFAULT_STAMP_PAPER_VALUE},
    work::{WorkRecord, WorkStatus},
};
pub use rollup::{
    aggregate, ConstituencySummary, DateRange, PurposeSummary, RollupConfig, RollupError,
};
pub use selection::{lowest_valid_quote, select_l1};

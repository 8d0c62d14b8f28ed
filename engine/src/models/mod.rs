//! Domain models for the tender rules engine

pub mod bid;
pub mod tender;
pub mod work;

// Re-exports
pub use bid::Bid;
pub use tender::{TenderFinancials, TenderMilestones, TenderStatus};
pub use work::{WorkRecord, WorkStatus};

//! Bid model
//!
//! Represents one bidder's entry against a tender, as supplied by the
//! backing store. Many bids may share a tender; the store gives no
//! ordering guarantee among them.
//!
//! A quoted amount is only *valid* when it is a finite number strictly
//! greater than zero. A zero bid is not meaningful, and NaN/infinite
//! values are malformed store input, so all of these are treated the
//! same as an absent quote.

use serde::{Deserialize, Serialize};

/// One bidder's entry against a tender
///
/// # Example
/// ```
/// use tender_rules_core::Bid;
///
/// let bid = Bid::new("M/s Sharma Borewells", "Thrissur", Some(85_000.0));
/// assert_eq!(bid.valid_quote(), Some(85_000.0));
///
/// let withdrawn = Bid::new("M/s KWA Drilling", "Kollam", None);
/// assert_eq!(withdrawn.valid_quote(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bid {
    /// Bidder's registered name
    pub bidder_name: String,

    /// Bidder's address as entered in the bid register
    pub address: String,

    /// Quoted amount in rupees, absent when the bid carried no figure
    pub quoted_amount: Option<f64>,
}

impl Bid {
    /// Create a new bid
    pub fn new(bidder_name: impl Into<String>, address: impl Into<String>, quoted_amount: Option<f64>) -> Self {
        Self {
            bidder_name: bidder_name.into(),
            address: address.into(),
            quoted_amount,
        }
    }

    /// The quoted amount, if it is usable for L1 selection
    ///
    /// Returns `Some` only for a present, finite quote strictly greater
    /// than zero; zero, NaN and infinite quotes are treated as absent.
    pub fn valid_quote(&self) -> Option<f64> {
        self.quoted_amount.filter(|amt| amt.is_finite() && *amt > 0.0)
    }
}

//! L1 (lowest bidder) selection
//!
//! Selecting the L1 bidder is a stable minimum-by-quote fold over the bid
//! list: among bids with a valid quote (finite, strictly positive), the
//! lowest wins, and on a tie the bid encountered first in input order
//! wins. The store gives no ordering guarantee among bids, so the caller's
//! list order is the tie-break order.
//!
//! # Critical Invariants
//!
//! - Bids without a valid quote never influence the result
//! - Ties keep the earliest bid (strictly-lower replaces, equal does not)
//! - Pure function of the input list; no side effects

use crate::models::Bid;

/// Select the L1 bidder from a bid list
///
/// Returns `None` when no bid carries a valid quote.
///
/// # Example
/// ```
/// use tender_rules_core::{select_l1, Bid};
///
/// let bids = vec![
///     Bid::new("A", "Kochi", Some(100_000.0)),
///     Bid::new("B", "Palakkad", Some(85_000.0)),
///     Bid::new("C", "Kannur", None),
/// ];
/// assert_eq!(select_l1(&bids).map(|b| b.bidder_name.as_str()), Some("B"));
/// ```
pub fn select_l1(bids: &[Bid]) -> Option<&Bid> {
    let mut best: Option<(&Bid, f64)> = None;
    for bid in bids {
        let Some(quote) = bid.valid_quote() else {
            continue;
        };
        match best {
            Some((_, lowest)) if quote >= lowest => {}
            _ => best = Some((bid, quote)),
        }
    }
    best.map(|(bid, _)| bid)
}

/// The L1 quote itself, for callers that only need the figure
pub fn lowest_valid_quote(bids: &[Bid]) -> Option<f64> {
    select_l1(bids).and_then(Bid::valid_quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_keeps_first_encountered() {
        let bids = vec![
            Bid::new("A", "X", Some(100.0)),
            Bid::new("B", "Y", Some(50.0)),
            Bid::new("C", "Z", Some(50.0)),
        ];
        assert_eq!(select_l1(&bids).map(|b| b.bidder_name.as_str()), Some("B"));
    }

    #[test]
    fn test_empty_list_has_no_l1() {
        assert!(select_l1(&[]).is_none());
    }
}

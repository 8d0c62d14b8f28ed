//! Tolerant decoding of store documents
//!
//! The backing store is schemaless: numeric fields sometimes arrive as
//! strings, blank strings stand in for absent values, and dates appear in
//! a handful of formats. The original front-end coerced fields ad hoc at
//! every read site; this module centralises that coercion.
//!
//! Decoding never fails. A malformed field decodes to `None` and the
//! surrounding rules degrade to their neutral defaults.

use crate::models::{Bid, TenderFinancials, TenderMilestones, WorkRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Read a numeric field, accepting JSON numbers and numeric strings
///
/// Rejects NaN, infinities and non-numeric strings.
///
/// # Example
/// ```
/// use serde_json::json;
/// use tender_rules_core::decode::number_field;
///
/// let doc = json!({ "estimateAmount": "100000.50", "emd": 2500 });
/// assert_eq!(number_field(&doc, "estimateAmount"), Some(100000.5));
/// assert_eq!(number_field(&doc, "emd"), Some(2500.0));
/// assert_eq!(number_field(&doc, "missing"), None);
/// ```
pub fn number_field(doc: &Value, key: &str) -> Option<f64> {
    let value = doc.get(key)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Read a string field, trimming whitespace; blank decodes to `None`
pub fn string_field(doc: &Value, key: &str) -> Option<String> {
    let raw = doc.get(key)?.as_str()?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}

/// Read a date field (`YYYY-MM-DD`, or the date part of a datetime)
pub fn date_field(doc: &Value, key: &str) -> Option<NaiveDate> {
    datetime_field(doc, key).map(|dt| dt.date())
}

/// Read a datetime field
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD` (midnight). Anything else
/// decodes to `None`.
pub fn datetime_field(doc: &Value, key: &str) -> Option<NaiveDateTime> {
    let raw = doc.get(key)?.as_str()?.trim();
    parse_datetime(raw)
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

impl Bid {
    /// Decode a bid entry from a store document
    pub fn from_value(doc: &Value) -> Self {
        Self {
            bidder_name: string_field(doc, "bidderName").unwrap_or_default(),
            address: string_field(doc, "address").unwrap_or_default(),
            quoted_amount: number_field(doc, "quotedAmount"),
        }
    }
}

impl TenderFinancials {
    /// Decode the financial fields from a tender document
    pub fn from_value(doc: &Value) -> Self {
        Self {
            estimate_amount: number_field(doc, "estimateAmount"),
            performance_guarantee_amount: number_field(doc, "performanceGuaranteeAmount"),
            additional_performance_guarantee_amount: number_field(
                doc,
                "additionalPerformanceGuaranteeAmount",
            ),
            stamp_paper_amount: number_field(doc, "stampPaperAmount"),
        }
    }
}

impl TenderMilestones {
    /// Decode the milestone dates from a tender document
    pub fn from_value(doc: &Value) -> Self {
        Self {
            date_of_publication: date_field(doc, "dateOfPublication"),
            date_of_bid_opening: date_field(doc, "dateOfBidOpening"),
            date_of_selection_notice: date_field(doc, "dateOfSelectionNotice"),
            date_of_agreement: date_field(doc, "dateOfAgreement"),
            date_of_completion: date_field(doc, "dateOfCompletion"),
        }
    }
}

impl WorkRecord {
    /// Decode a work record from a store document
    pub fn from_value(doc: &Value) -> Self {
        Self {
            constituency: string_field(doc, "constituency"),
            purpose: string_field(doc, "purpose"),
            work_status: string_field(doc, "workStatus"),
            total_expenditure: number_field(doc, "totalExpenditure"),
            date_of_completion: datetime_field(doc, "dateOfCompletion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_field_rejects_nan_string() {
        let doc = json!({ "amount": "NaN" });
        assert_eq!(number_field(&doc, "amount"), None);
    }

    #[test]
    fn test_string_field_blank_is_none() {
        let doc = json!({ "constituency": "   " });
        assert_eq!(string_field(&doc, "constituency"), None);
    }

    #[test]
    fn test_date_only_parses_to_midnight() {
        let doc = json!({ "dateOfCompletion": "2024-06-30" });
        let dt = datetime_field(&doc, "dateOfCompletion").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(dt.time(), NaiveTime::MIN);
    }
}

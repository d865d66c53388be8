//! Predicate filtering over arbitrage history

use chrono::{DateTime, Utc};

use crate::types::{ArbitrageTransaction, HistoryFilter};

/// Returns the records matching every criterion present on `filter`, in
/// their original order. Absent criteria match everything, so the default
/// filter is the identity. All bounds are inclusive.
///
/// `end_date` is widened to the end of its UTC calendar day (23:59:59.999)
/// so a caller passing a date selects the whole day, not just that instant.
/// Inverted ranges yield an empty result rather than an error.
pub fn filter_history(
    records: &[ArbitrageTransaction],
    filter: &HistoryFilter,
) -> Vec<ArbitrageTransaction> {
    records
        .iter()
        .filter(|tx| matches_filter(tx, filter))
        .cloned()
        .collect()
}

fn matches_filter(tx: &ArbitrageTransaction, filter: &HistoryFilter) -> bool {
    if let Some(status) = filter.status {
        if tx.status != status {
            return false;
        }
    }

    if let Some(start) = filter.start_date {
        if tx.timestamp < start {
            return false;
        }
    }
    if let Some(end) = filter.end_date {
        if tx.timestamp > end_of_day_utc(end) {
            return false;
        }
    }

    if let Some(min) = filter.min_profit {
        if tx.profit < min {
            return false;
        }
    }
    if let Some(max) = filter.max_profit {
        if tx.profit > max {
            return false;
        }
    }

    true
}

/// Last representable millisecond of the UTC calendar day containing `ts`.
fn end_of_day_utc(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid wall-clock time")
        .and_utc()
}

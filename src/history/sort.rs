//! Keyed ordering of arbitrage history

use std::cmp::Ordering;

use crate::history::filter_history;
use crate::types::{ArbitrageTransaction, HistoryFilter, SortField, SortOrder};

/// Returns a re-ordered copy of `records` by the chosen key. The sort is
/// stable: records with equal keys keep their pre-sort relative order.
pub fn sort_history(
    records: &[ArbitrageTransaction],
    sort_by: SortField,
    sort_order: SortOrder,
) -> Vec<ArbitrageTransaction> {
    let mut sorted = records.to_vec();
    sort_in_place(&mut sorted, sort_by, sort_order);
    sorted
}

/// Filter-then-sort in one call, the way the dashboard history view
/// consumes a query. Without `sort_by` the filtered records keep their
/// original order; without `sort_order` the sort defaults to descending.
pub fn apply_history_query(
    records: &[ArbitrageTransaction],
    filter: &HistoryFilter,
) -> Vec<ArbitrageTransaction> {
    let mut view = filter_history(records, filter);
    if let Some(sort_by) = filter.sort_by {
        let order = filter.sort_order.unwrap_or(SortOrder::Desc);
        sort_in_place(&mut view, sort_by, order);
    }
    view
}

fn sort_in_place(records: &mut [ArbitrageTransaction], sort_by: SortField, sort_order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort_by);
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &ArbitrageTransaction, b: &ArbitrageTransaction, sort_by: SortField) -> Ordering {
    match sort_by {
        SortField::Date => a.timestamp.cmp(&b.timestamp),
        SortField::Profit => a.profit.cmp(&b.profit),
        SortField::ExecutionTime => a.execution_time.cmp(&b.execution_time),
    }
}

//! Merging and ordering of raw trade datasets.

use crate::domain::{sort_trades_by_entry_date, TradeRecord};
use tracing::debug;

/// Concatenate datasets and sort the combined set ascending by entry date.
///
/// All rows are preserved; there is no deduplication. The sort is stable, so
/// trades with identical timestamps keep their relative concatenation order.
/// Sorted order is the precondition for every downstream cumulative
/// computation.
pub fn merge_and_sort(datasets: Vec<Vec<TradeRecord>>) -> Vec<TradeRecord> {
    let dataset_count = datasets.len();
    let mut trades: Vec<TradeRecord> = datasets.into_iter().flatten().collect();
    sort_trades_by_entry_date(&mut trades);
    debug!(
        datasets = dataset_count,
        trades = trades.len(),
        "merged trade datasets"
    );
    trades
}

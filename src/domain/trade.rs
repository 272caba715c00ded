//! Trade record type and deterministic entry-date ordering.

use crate::domain::Decimal;
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single trade row as loaded from a report.
///
/// Only `entry_date` and `pnl` participate in computation; every other input
/// column is carried through unmodified in `extra`, preserving input column
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Time the trade was entered.
    pub entry_date: NaiveDateTime,
    /// Gross profit/loss of the trade, before charge allocation.
    pub pnl: Decimal,
    /// Passthrough columns (name, raw value), excluded from computation.
    pub extra: Vec<(String, String)>,
}

impl TradeRecord {
    /// Create a TradeRecord with no passthrough columns.
    pub fn new(entry_date: NaiveDateTime, pnl: Decimal) -> Self {
        TradeRecord {
            entry_date,
            pnl,
            extra: Vec::new(),
        }
    }

    /// Attach passthrough columns to this record.
    pub fn with_extra(mut self, extra: Vec<(String, String)>) -> Self {
        self.extra = extra;
        self
    }

    /// Calendar year of the entry date.
    pub fn year(&self) -> i32 {
        self.entry_date.year()
    }

    /// Calendar month (1-12) of the entry date.
    pub fn month(&self) -> u32 {
        self.entry_date.month()
    }
}

/// Sort trades ascending by entry date.
///
/// The sort is stable: rows with identical timestamps retain their relative
/// input order, which is what makes merging multiple reports deterministic.
pub fn sort_trades_by_entry_date(trades: &mut [TradeRecord]) {
    trades.sort_by_key(|t| t.entry_date);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trade(date: &str, pnl: i64, tag: &str) -> TradeRecord {
        let entry = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        TradeRecord::new(entry, Decimal::from_i64(pnl))
            .with_extra(vec![("Trade #".to_string(), tag.to_string())])
    }

    #[test]
    fn test_sort_ascending_by_entry_date() {
        let mut trades = vec![
            trade("2024-03-01", 100, "c"),
            trade("2024-01-01", 200, "a"),
            trade("2024-02-01", -50, "b"),
        ];
        sort_trades_by_entry_date(&mut trades);

        let tags: Vec<_> = trades.iter().map(|t| t.extra[0].1.as_str()).collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let mut trades = vec![
            trade("2024-01-01", 1, "first"),
            trade("2024-01-01", 2, "second"),
            trade("2024-01-01", 3, "third"),
        ];
        sort_trades_by_entry_date(&mut trades);

        let tags: Vec<_> = trades.iter().map(|t| t.extra[0].1.as_str()).collect();
        assert_eq!(tags, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_year_month_accessors() {
        let t = trade("2023-11-15", 0, "x");
        assert_eq!(t.year(), 2023);
        assert_eq!(t.month(), 11);
    }

    #[test]
    fn test_trade_serialization_roundtrip() {
        let t = trade("2024-01-05", 1000, "T-1");
        let json = serde_json::to_string(&t).unwrap();
        let back: TradeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}

//! Calendar bucketing of net P/L and drawdown.

use crate::domain::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::DerivedTrade;

/// A calendar month bucket key, ordered chronologically.
///
/// Displays and serializes as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12.
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        MonthKey { year, month }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Monthly/yearly P/L buckets plus each year's worst drawdown.
///
/// Buckets exist only for periods with at least one trade; absence means "no
/// activity" and is zero-filled at presentation time, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Aggregates {
    /// Net P/L summed per calendar month.
    pub monthly_pnl: BTreeMap<MonthKey, Decimal>,
    /// Net P/L summed per calendar year.
    pub yearly_pnl: BTreeMap<i32, Decimal>,
    /// Minimum (most negative) drawdown observed within each year: the worst
    /// point reached during the year, not the drawdown at year end.
    pub yearly_max_drawdown: BTreeMap<i32, Decimal>,
}

/// Group the derived sequence into calendar buckets.
pub fn bucket(derived: &[DerivedTrade]) -> Aggregates {
    let mut aggregates = Aggregates::default();

    for t in derived {
        let year = t.trade.year();
        let key = MonthKey::new(year, t.trade.month());

        *aggregates
            .monthly_pnl
            .entry(key)
            .or_insert_with(Decimal::zero) += t.net_pnl;
        *aggregates
            .yearly_pnl
            .entry(year)
            .or_insert_with(Decimal::zero) += t.net_pnl;

        let worst = aggregates
            .yearly_max_drawdown
            .entry(year)
            .or_insert_with(Decimal::zero);
        if t.drawdown < *worst {
            *worst = t.drawdown;
        }
    }

    aggregates
}

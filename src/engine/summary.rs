//! Scalar summary metrics over the full derived sequence.

use crate::domain::Decimal;
use serde::Serialize;

use super::{Aggregates, DerivedTrade};

/// Portfolio-level scalar metrics for one run.
///
/// All fields are defined (zero) for an empty trade set; an empty upload is a
/// valid result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Sum of net P/L over all trades.
    pub total_profit: Decimal,
    /// total_profit / total_capital * 100.
    pub total_return_pct: Decimal,
    /// The capital base the run was computed against.
    pub total_capital: Decimal,
    /// Mean of the monthly net P/L buckets.
    pub avg_monthly_profit: Decimal,
    /// avg_monthly_profit / total_capital * 100.
    pub avg_monthly_profit_pct: Decimal,
    /// Most negative drawdown over all trades (<= 0).
    pub max_drawdown: Decimal,
    /// max_drawdown / total_capital * 100.
    pub max_drawdown_pct: Decimal,
}

/// Reduce the derived sequence and its buckets to scalar metrics.
pub fn compute(derived: &[DerivedTrade], aggregates: &Aggregates, total_capital: Decimal) -> Summary {
    let total_profit: Decimal = derived.iter().map(|t| t.net_pnl).sum();
    let total_return_pct = total_profit.percent_of(total_capital);

    let month_count = aggregates.monthly_pnl.len();
    let avg_monthly_profit = if month_count == 0 {
        Decimal::zero()
    } else {
        let monthly_sum: Decimal = aggregates.monthly_pnl.values().copied().sum();
        monthly_sum / Decimal::from_i64(month_count as i64)
    };
    let avg_monthly_profit_pct = avg_monthly_profit.percent_of(total_capital);

    let max_drawdown = derived
        .iter()
        .map(|t| t.drawdown)
        .min()
        .unwrap_or_else(Decimal::zero);
    let max_drawdown_pct = max_drawdown.percent_of(total_capital);

    Summary {
        total_profit,
        total_return_pct,
        total_capital,
        avg_monthly_profit,
        avg_monthly_profit_pct,
        max_drawdown,
        max_drawdown_pct,
    }
}

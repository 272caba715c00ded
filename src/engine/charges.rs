//! Flat per-trade charge allocation.

use crate::domain::Decimal;

/// Compute the equal per-trade share of total charges.
///
/// Charges are amortized as a flat average across all trades, regardless of
/// each trade's size or date. This exact policy is load-bearing for output
/// compatibility with historical reports; do not change it to a proportional
/// split. Zero trades means zero charge per trade.
pub fn charge_per_trade(total_charges: Decimal, trade_count: usize) -> Decimal {
    if trade_count == 0 {
        return Decimal::zero();
    }
    total_charges / Decimal::from_i64(trade_count as i64)
}

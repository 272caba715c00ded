//! Equity curve and drawdown derivation.

use crate::domain::{Decimal, TradeRecord};

use super::DerivedTrade;

/// Derive net P/L, equity, peak equity and drawdown for a sorted trade
/// sequence.
///
/// A strict left-to-right scan with O(1) state: a running net-P/L sum and a
/// running equity maximum. The peak is the running maximum over equity values
/// only, so the first record is always its own peak and carries drawdown 0
/// even when it is a loss. Callers must pass trades already sorted ascending
/// by entry date (see `normalize::merge_and_sort`).
pub fn derive(
    trades: Vec<TradeRecord>,
    charge_per_trade: Decimal,
    total_capital: Decimal,
) -> Vec<DerivedTrade> {
    let mut cum_net_pnl = Decimal::zero();
    let mut running_peak: Option<Decimal> = None;
    let mut derived = Vec::with_capacity(trades.len());

    for trade in trades {
        let net_pnl = trade.pnl - charge_per_trade;
        cum_net_pnl += net_pnl;
        let equity = total_capital + cum_net_pnl;
        let peak_equity = match running_peak {
            Some(peak) if peak > equity => peak,
            _ => equity,
        };
        running_peak = Some(peak_equity);
        let drawdown = equity - peak_equity;
        let drawdown_pct = drawdown.percent_of(total_capital);

        derived.push(DerivedTrade {
            trade,
            net_pnl,
            equity,
            peak_equity,
            drawdown,
            drawdown_pct,
        });
    }

    derived
}

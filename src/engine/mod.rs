//! Pure computation engine for deterministic portfolio analytics.
//!
//! The pipeline is a single synchronous forward pass:
//! merge/sort -> charge allocation -> equity & drawdown scan -> calendar
//! aggregation -> summary scalars. No I/O, no shared state; the same inputs
//! always produce the same [`Report`].

use crate::config::PortfolioConfig;
use crate::domain::{Decimal, TradeRecord};
use crate::error::AnalyticsError;
use serde::Serialize;
use tracing::info;

pub mod aggregate;
pub mod charges;
pub mod equity;
pub mod normalize;
pub mod summary;

pub use aggregate::{Aggregates, MonthKey};
pub use summary::Summary;

/// A trade annotated with the values derived for it by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedTrade {
    /// The original record, passthrough columns included.
    pub trade: TradeRecord,
    /// P/L after deducting this trade's equal share of total charges.
    pub net_pnl: Decimal,
    /// Capital plus cumulative net P/L up to and including this trade.
    pub equity: Decimal,
    /// Running maximum of equity so far. Monotonically non-decreasing.
    pub peak_equity: Decimal,
    /// equity - peak_equity. Always <= 0; 0 at and after a new peak.
    pub drawdown: Decimal,
    /// drawdown / total capital * 100.
    pub drawdown_pct: Decimal,
}

/// The complete result bundle of one analytics run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Derived trade sequence, ascending by entry date.
    pub trades: Vec<DerivedTrade>,
    /// Monthly/yearly P/L buckets and per-year worst drawdown.
    pub aggregates: Aggregates,
    /// Scalar summary metrics.
    pub summary: Summary,
}

/// Run the full analytics pipeline over one or more trade datasets.
///
/// Datasets are concatenated without deduplication, then normalized by a
/// stable ascending sort on entry date. An empty input is a valid run: the
/// report comes back with no trades, no buckets, and all-zero summary
/// metrics.
///
/// # Errors
/// Returns `InvalidConfig` if the configuration fails boundary validation.
pub fn analyze(
    config: &PortfolioConfig,
    datasets: Vec<Vec<TradeRecord>>,
) -> Result<Report, AnalyticsError> {
    config.validate()?;

    let trades = normalize::merge_and_sort(datasets);
    let charge_per_trade = charges::charge_per_trade(config.total_charges, trades.len());
    let derived = equity::derive(trades, charge_per_trade, config.total_capital);
    let aggregates = aggregate::bucket(&derived);
    let summary = summary::compute(&derived, &aggregates, config.total_capital);

    info!(
        trades = derived.len(),
        months = aggregates.monthly_pnl.len(),
        "analytics pipeline complete"
    );

    Ok(Report {
        trades: derived,
        aggregates,
        summary,
    })
}

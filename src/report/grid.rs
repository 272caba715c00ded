//! Year-by-month pivot of the aggregate buckets for tabular display.

use crate::domain::Decimal;
use crate::engine::{MonthKey, Report};
use serde::Serialize;

/// Fixed month column order for the pivot table.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Which representation the grid carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GridMode {
    /// Net P/L in currency units.
    Absolute,
    /// Every value scaled to percent of total capital.
    PercentOfCapital,
}

/// One year of the pivot: twelve month cells, the year total, and the worst
/// drawdown observed during the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRow {
    pub year: i32,
    /// Net P/L per month, Jan..Dec. Months without trades are zero.
    pub months: [Decimal; 12],
    pub total: Decimal,
    pub max_drawdown: Decimal,
}

/// The monthly/yearly P/L summary table, rows ascending by year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyGrid {
    pub mode: GridMode,
    pub rows: Vec<YearRow>,
}

impl MonthlyGrid {
    /// Pivot a report's aggregates into the fixed Jan..Dec grid.
    ///
    /// Months and years with no trades are filled with zero; "no activity"
    /// is a legitimate state, not an error. Both modes are derivable from the
    /// same report; percent mode scales every cell by the run's capital.
    pub fn build(report: &Report, mode: GridMode) -> Self {
        let capital = report.summary.total_capital;
        let scale = |value: Decimal| match mode {
            GridMode::Absolute => value,
            GridMode::PercentOfCapital => value.percent_of(capital),
        };

        let rows = report
            .aggregates
            .yearly_pnl
            .iter()
            .map(|(&year, &total)| {
                let mut months = [Decimal::zero(); 12];
                for (slot, month_value) in months.iter_mut().enumerate() {
                    let key = MonthKey::new(year, slot as u32 + 1);
                    if let Some(&pnl) = report.aggregates.monthly_pnl.get(&key) {
                        *month_value = scale(pnl);
                    }
                }
                let max_drawdown = report
                    .aggregates
                    .yearly_max_drawdown
                    .get(&year)
                    .copied()
                    .unwrap_or_else(Decimal::zero);
                YearRow {
                    year,
                    months,
                    total: scale(total),
                    max_drawdown: scale(max_drawdown),
                }
            })
            .collect();

        MonthlyGrid { mode, rows }
    }
}

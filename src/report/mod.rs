//! Presentation-facing shaping of a finished report: the year-by-month pivot
//! grid and sign-keyed cell formatting.

pub mod format;
pub mod grid;

pub use format::{currency_cell, percent_cell, FormattedCell, Tone};
pub use grid::{GridMode, MonthlyGrid, YearRow, MONTH_LABELS};

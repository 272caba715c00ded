//! Domain types shared across the pipeline.

pub mod decimal;
pub mod trade;

pub use decimal::Decimal;
pub use trade::{sort_trades_by_entry_date, TradeRecord};

pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod report;

pub use config::PortfolioConfig;
pub use datasource::{read_trades, read_trades_file};
pub use domain::{Decimal, TradeRecord};
pub use engine::{analyze, Aggregates, DerivedTrade, MonthKey, Report, Summary};
pub use error::AnalyticsError;
pub use report::{GridMode, MonthlyGrid};

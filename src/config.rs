use crate::domain::Decimal;
use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};

/// Portfolio-level inputs for one analytics run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Total portfolio capital. Must be positive; equity and every percentage
    /// metric are computed against it.
    pub total_capital: Decimal,
    /// Total charges to amortize equally across all trades. Must be >= 0.
    pub total_charges: Decimal,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            total_capital: Decimal::from_i64(300_000),
            total_charges: Decimal::zero(),
        }
    }
}

impl PortfolioConfig {
    pub fn new(total_capital: Decimal, total_charges: Decimal) -> Self {
        PortfolioConfig {
            total_capital,
            total_charges,
        }
    }

    /// Reject configurations the pipeline cannot meaningfully compute with.
    ///
    /// Runs at the boundary, before any trade is processed.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !self.total_capital.is_positive() {
            return Err(AnalyticsError::InvalidConfig(format!(
                "total_capital must be > 0, got {}",
                self.total_capital
            )));
        }
        if self.total_charges.is_negative() {
            return Err(AnalyticsError::InvalidConfig(format!(
                "total_charges must be >= 0, got {}",
                self.total_charges
            )));
        }
        Ok(())
    }
}

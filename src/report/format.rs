//! Sign-based formatting of monetary and percentage values.
//!
//! The engine never picks colors; it reports a [`Tone`] keyed on the numeric
//! sign and leaves the mapping to terminal colors (or CSS classes, or
//! nothing) to the presentation layer.

use crate::domain::Decimal;
use serde::Serialize;

/// Semantic tone of a displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Profit,
    Loss,
    Flat,
}

impl Tone {
    /// Tone for a value, keyed solely on its sign.
    pub fn of(value: Decimal) -> Self {
        if value.is_positive() {
            Tone::Profit
        } else if value.is_negative() {
            Tone::Loss
        } else {
            Tone::Flat
        }
    }
}

/// A display-ready cell: rendered text plus its tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedCell {
    pub text: String,
    pub tone: Tone,
}

/// Format a currency amount rounded to two decimal places.
pub fn currency_cell(value: Decimal) -> FormattedCell {
    FormattedCell {
        text: value.round_dp(2).to_string(),
        tone: Tone::of(value),
    }
}

/// Format a percentage rounded to two decimal places, with a `%` suffix.
pub fn percent_cell(value: Decimal) -> FormattedCell {
    FormattedCell {
        text: format!("{}%", value.round_dp(2)),
        tone: Tone::of(value),
    }
}

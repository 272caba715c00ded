use thiserror::Error;

/// Errors surfaced by the analytics pipeline and its input boundary.
///
/// Every variant is terminal for the run it occurs in; there are no retries
/// and no silent defaulting of bad input.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("missing required column \"{column}\" in dataset {dataset}")]
    MissingColumn { dataset: String, column: &'static str },

    #[error("unparseable entry date \"{value}\" at row {row} of dataset {dataset}")]
    DateParse {
        dataset: String,
        row: usize,
        value: String,
    },

    #[error("unparseable P/L value \"{value}\" at row {row} of dataset {dataset}")]
    PnlParse {
        dataset: String,
        row: usize,
        value: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("csv error in dataset {dataset}: {source}")]
    Csv {
        dataset: String,
        #[source]
        source: csv::Error,
    },
}

//! Reading trade report CSVs into domain records.
//!
//! The column names `"Entry Date"` and `"P/L"` are a schema contract with the
//! report exporter and must match exactly. Any other column is preserved as a
//! passthrough field on the record.

use crate::domain::{Decimal, TradeRecord};
use crate::error::AnalyticsError;
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Required column holding the trade entry timestamp.
pub const ENTRY_DATE_COLUMN: &str = "Entry Date";
/// Required column holding the signed trade P/L.
pub const PNL_COLUMN: &str = "P/L";

/// Datetime formats accepted for the entry date, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

/// Date-only formats accepted for the entry date, tried after the datetime
/// formats; parsed values land at midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%m/%d/%Y", "%d-%b-%Y"];

/// Parse an entry date string against the accepted formats.
pub fn parse_entry_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Read one trade report dataset from any reader.
///
/// `dataset` is a human-readable label (typically the file name) used in
/// error messages so the user can locate the offending file.
///
/// # Errors
/// - `MissingColumn` if either required column is absent (checked before any
///   row is parsed).
/// - `DateParse` / `PnlParse` with the 1-based data row of the first bad
///   value.
/// - `Csv` for reader-level failures such as ragged rows.
pub fn read_trades<R: Read>(reader: R, dataset: &str) -> Result<Vec<TradeRecord>, AnalyticsError> {
    let csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    read_from(csv_reader, dataset)
}

/// Read one trade report dataset from a file path.
pub fn read_trades_file(path: &Path) -> Result<Vec<TradeRecord>, AnalyticsError> {
    let dataset = path.display().to_string();
    let csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| AnalyticsError::Csv {
            dataset: dataset.clone(),
            source: e,
        })?;
    read_from(csv_reader, &dataset)
}

fn read_from<R: Read>(
    mut csv_reader: csv::Reader<R>,
    dataset: &str,
) -> Result<Vec<TradeRecord>, AnalyticsError> {
    let headers = csv_reader
        .headers()
        .map_err(|e| AnalyticsError::Csv {
            dataset: dataset.to_string(),
            source: e,
        })?
        .clone();

    // The schema contract is validated up front so a missing column is
    // reported before any computation proceeds.
    let date_idx = column_index(&headers, ENTRY_DATE_COLUMN, dataset)?;
    let pnl_idx = column_index(&headers, PNL_COLUMN, dataset)?;

    let mut trades = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| AnalyticsError::Csv {
            dataset: dataset.to_string(),
            source: e,
        })?;

        let date_raw = record.get(date_idx).unwrap_or("");
        let entry_date =
            parse_entry_date(date_raw).ok_or_else(|| AnalyticsError::DateParse {
                dataset: dataset.to_string(),
                row,
                value: date_raw.to_string(),
            })?;

        let pnl_raw = record.get(pnl_idx).unwrap_or("");
        let pnl = Decimal::from_str_canonical(pnl_raw.trim()).map_err(|_| {
            AnalyticsError::PnlParse {
                dataset: dataset.to_string(),
                row,
                value: pnl_raw.to_string(),
            }
        })?;

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != date_idx && *idx != pnl_idx)
            .map(|(idx, name)| (name.to_string(), record.get(idx).unwrap_or("").to_string()))
            .collect();

        trades.push(TradeRecord::new(entry_date, pnl).with_extra(extra));
    }

    debug!(dataset, rows = trades.len(), "loaded trade dataset");
    Ok(trades)
}

fn column_index(
    headers: &csv::StringRecord,
    column: &'static str,
    dataset: &str,
) -> Result<usize, AnalyticsError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(AnalyticsError::MissingColumn {
            dataset: dataset.to_string(),
            column,
        })
}

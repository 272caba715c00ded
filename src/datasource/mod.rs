//! Input boundary: parsing raw trade reports into domain records.

pub mod csv;

pub use csv::{read_trades, read_trades_file, ENTRY_DATE_COLUMN, PNL_COLUMN};

//! XLSForm workbook ingestion.
//!
//! Opens an xlsx/xls workbook, locates the `survey`, `choices`, and
//! `settings` sheets, and normalizes their rows into the model records.
//! Missing sheets and unreadable files are the only hard errors; blank
//! cells, unknown columns, and empty sheets are all tolerated.

mod error;
mod workbook;

pub use error::IngestError;
pub use workbook::{SHEET_CHOICES, SHEET_SETTINGS, SHEET_SURVEY, load_form};

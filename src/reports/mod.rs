//! Multi-format rendering of metric tables
//!
//! # Implementation Model
//!
//! Every report operates on the same input, a [`ReportTable`]: one row per metric (or per
//! unit group) and one value column per weapon or statistic. This lets the `list`, `eval`,
//! and `ranges` commands share the three generators:
//! - **Console**: Aligned columns with optional ANSI colors
//! - **CSV**: Spreadsheet-compatible format with proper escaping
//! - **JSON**: Machine-readable structured data
//!
//! Shared number formatting lives in the `common` module.

mod common;
mod console;
mod csv;
mod json;
mod report_table;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;
pub use report_table::{CombatContext, ReportRow, ReportTable};

//! CSV to SQL exporter.
//!
//! Reads an ordered list of CSV files, each paired with a target table, and
//! writes one `INSERT` statement per data row into a single `.sql` file.
//!
//! ```text
//! [(orders.csv, Orders), (payments.csv, Payments)]
//!        │
//!        ▼
//!   read_table ──► Vec<TabularRecord> ──► InsertStatement ──► realistic_data.sql
//! ```
//!
//! # Example
//!
//! ```ignore
//! use csv_sql_export::Exporter;
//! use mockdata_core::{ExportConfig, TableSource};
//!
//! let config = ExportConfig::new(
//!     vec![TableSource::new("orders.csv", "Orders")],
//!     "orders.sql",
//! );
//! let metrics = Exporter::new(config)?.export()?;
//! println!("{} statements written", metrics.statements_written);
//! ```

mod error;
mod exporter;
pub mod insert;
pub mod reader;

pub use error::ExportError;
pub use exporter::{csv_to_sql, ExportMetrics, Exporter};
pub use insert::{quote_text, render_literal, InsertStatement};
pub use reader::{read_records, read_table, ReadOptions};

//! Core types for the food-delivery mock data tools.
//!
//! This crate provides the types shared by the exporter and the generator:
//!
//! - [`ScalarValue`] - A single atomic field value read from a table
//! - [`TabularRecord`] - One ordered row of column name / value pairs
//! - [`Config`] - Configuration for both tools, loaded from YAML or TOML
//!
//! # Architecture
//!
//! ```text
//! mockdata-core (this crate)
//!    │
//!    ├─── csv-sql-export   (CSV files → INSERT statements)
//!    │
//!    ├─── user-generator   (seeded user / phone records)
//!    │
//!    └─── populate-csv     (generated records → CSV files)
//! ```

pub mod config;
pub mod values;

// Re-exports for convenience
pub use config::{
    Config, ConfigError, ExportConfig, GenerateConfig, TableSource, DEFAULT_NULL_MARKERS,
};
pub use values::{ScalarValue, TabularRecord};

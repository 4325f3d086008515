//! CSV file populator for synthetic users.
//!
//! This crate writes the records produced by the user-generator crate to
//! CSV files: one file of users, one file of user phone numbers.
//!
//! # Example
//!
//! ```ignore
//! use mockdata_core::GenerateConfig;
//! use populate_csv::CsvPopulator;
//!
//! let mut populator = CsvPopulator::new(GenerateConfig::default())?;
//! let report = populator.populate()?;
//! println!("{} users written", report.users.rows_written);
//! ```

pub mod args;
mod error;
mod populator;

pub use args::GenerateArgs;
pub use error::PopulatorError;
pub use populator::{
    phone_to_csv_record, user_to_csv_record, CsvPopulator, PopulateMetrics, PopulateReport,
    PHONES_HEADER, TIMESTAMP_FORMAT, USERS_HEADER,
};

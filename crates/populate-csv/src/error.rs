//! Error types for the CSV populator.

use thiserror::Error;

/// Errors that can occur during CSV population.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid generator configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] mockdata_core::ConfigError),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] user_generator::GeneratorError),
}

//! Mock data tools for the food-delivery schema.
//!
//! Two independent batch tools share this package:
//!
//! - **export**: convert CSV files into SQL `INSERT` statements
//!   ([`csv_sql_export`])
//! - **generate**: write synthetic users and user phone numbers to CSV
//!   ([`user_generator`], [`populate_csv`])
//!
//! # CLI Usage
//!
//! ```bash
//! # Export the files listed in a config file
//! mockdata export --config mockdata.yaml
//!
//! # Export ad-hoc pairs
//! mockdata export --table "csv files/orders.csv=Orders" --output orders.sql
//!
//! # Generate 50 users with up to 3 phones each
//! mockdata generate --num-users 50 --max-phones-per-user 3 --seed 0
//!
//! # Print the default configuration
//! mockdata sample-config --format toml
//! ```

use anyhow::Context;
use std::path::Path;

pub mod config;
pub mod metrics;

// Re-export the component crates for convenience
pub use csv_sql_export as export;
pub use mockdata_core::{Config, ExportConfig, GenerateConfig, TableSource};
pub use populate_csv as populate;
pub use user_generator as generator;

use csv_sql_export::{ExportMetrics, Exporter};
use populate_csv::{CsvPopulator, PopulateReport};

/// Run the CSV-to-SQL exporter.
pub fn run_export(
    config: ExportConfig,
    emit_metrics: Option<&Path>,
) -> anyhow::Result<ExportMetrics> {
    let output_path = config.output_sql_path.clone();
    let exporter = Exporter::new(config).context("Invalid export configuration")?;
    let metrics = exporter
        .export()
        .with_context(|| format!("Failed to export SQL to {}", output_path.display()))?;

    if let Some(path) = emit_metrics {
        metrics::emit_metrics(path, "export", &metrics)?;
    }
    Ok(metrics)
}

/// Run the synthetic user data generator.
pub fn run_generate(
    config: GenerateConfig,
    emit_metrics: Option<&Path>,
) -> anyhow::Result<PopulateReport> {
    let mut populator = CsvPopulator::new(config).context("Invalid generate configuration")?;
    let report = populator
        .populate()
        .context("Failed to write generated CSV files")?;

    if let Some(path) = emit_metrics {
        metrics::emit_metrics(path, "generate", &report)?;
    }
    Ok(report)
}

//! Exporter turning a list of CSV files into one SQL file.

use crate::error::ExportError;
use crate::insert::InsertStatement;
use crate::reader::{read_table, ReadOptions};
use mockdata_core::{ExportConfig, TableSource};
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from an export run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportMetrics {
    /// Number of CSV files read.
    pub files_processed: u64,
    /// Number of listed files skipped because they are disabled.
    pub files_skipped: u64,
    /// Number of statements written.
    pub statements_written: u64,
    /// Output file size in bytes.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl ExportMetrics {
    /// Calculate statements per second.
    pub fn statements_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.statements_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Converts the configured CSV files into `INSERT` statements.
pub struct Exporter {
    config: ExportConfig,
    options: ReadOptions,
}

impl Exporter {
    /// Create an exporter, validating the configuration.
    pub fn new(config: ExportConfig) -> Result<Self, ExportError> {
        config.validate()?;
        let options = ReadOptions::from_config(&config)?;
        Ok(Self { config, options })
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Read all enabled sources and build their statements.
    ///
    /// File order follows the configuration, row order follows each file.
    pub fn statements(&self) -> Result<Vec<InsertStatement>, ExportError> {
        Ok(self.collect()?.0)
    }

    /// Build all statements and write them to the output path.
    ///
    /// Statements are joined by newlines and replace any existing file
    /// content. Nothing is written if any source fails to read.
    pub fn export(&self) -> Result<ExportMetrics, ExportError> {
        let start_time = Instant::now();
        let (statements, mut metrics) = self.collect()?;

        let output_path = &self.config.output_sql_path;
        let content = statements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(output_path, &content)?;

        metrics.statements_written = statements.len() as u64;
        metrics.bytes_written = content.len() as u64;
        metrics.total_duration = start_time.elapsed();

        info!(
            "SQL export complete: {} statements from {} files, {} bytes in {:?} ({:.2} statements/sec)",
            metrics.statements_written,
            metrics.files_processed,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.statements_per_second()
        );
        info!("SQL file generated: {}", output_path.display());

        Ok(metrics)
    }

    fn collect(&self) -> Result<(Vec<InsertStatement>, ExportMetrics), ExportError> {
        let mut metrics = ExportMetrics::default();
        let mut statements = Vec::new();

        for source in &self.config.file_paths {
            if !source.enabled {
                debug!(
                    "Skipping disabled source '{}' for table '{}'",
                    source.source.display(),
                    source.table
                );
                metrics.files_skipped += 1;
                continue;
            }

            info!(
                "Reading '{}' into table '{}'",
                source.source.display(),
                source.table
            );
            let records = read_table(&source.source, &self.options)?;
            debug!("Read {} rows for table '{}'", records.len(), source.table);

            statements.extend(
                records
                    .iter()
                    .map(|record| InsertStatement::from_record(source.table.as_str(), record)),
            );
            metrics.files_processed += 1;
        }

        Ok((statements, metrics))
    }
}

/// Export `file_paths` to `output_sql_path` with default read options.
pub fn csv_to_sql(
    file_paths: &[TableSource],
    output_sql_path: &Path,
) -> Result<ExportMetrics, ExportError> {
    Exporter::new(ExportConfig::new(file_paths.to_vec(), output_sql_path))?.export()
}

//! Loading configuration and applying CLI overrides.

use anyhow::Context;
use clap::{Args, ValueEnum};
use mockdata_core::{Config, ExportConfig, TableSource};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file selection shared by all subcommands.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Path to a YAML or TOML config file (defaults are used when omitted)
    #[arg(long, short = 'c', env = "MOCKDATA_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the selected config file, or the defaults.
    pub fn load(&self) -> anyhow::Result<Config> {
        load_config(self.config.as_deref())
    }
}

/// Load a config file if given, otherwise return the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Overrides for the `export` section of the configuration.
#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    /// Destination of the generated SQL file
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Source file and target table; replaces the configured list when given
    #[arg(long = "table", value_name = "SOURCE=TABLE")]
    pub tables: Vec<String>,

    /// Quote every non-null value instead of inferring numeric columns
    #[arg(long)]
    pub no_infer_types: bool,

    /// CSV field delimiter
    #[arg(long)]
    pub delimiter: Option<char>,
}

impl ExportArgs {
    /// Apply the overrides on top of `config`.
    pub fn apply(&self, config: &mut ExportConfig) -> anyhow::Result<()> {
        if let Some(ref output) = self.output {
            config.output_sql_path = output.clone();
        }
        if !self.tables.is_empty() {
            config.file_paths = self
                .tables
                .iter()
                .map(|pair| TableSource::parse_pair(pair))
                .collect::<Result<Vec<_>, _>>()
                .context("Invalid --table value")?;
        }
        if self.no_infer_types {
            config.infer_types = false;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        Ok(())
    }
}

/// Output format of `sample-config`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Toml,
}

/// Render the default configuration.
pub fn sample_config(format: ConfigFormat) -> anyhow::Result<String> {
    let config = Config::default();
    let rendered = match format {
        ConfigFormat::Yaml => config.to_yaml()?,
        ConfigFormat::Toml => config.to_toml()?,
    };
    Ok(rendered)
}

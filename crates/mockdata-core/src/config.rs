//! Configuration for the mock data tools.
//!
//! Both tools read their parameters from one [`Config`], loaded from a YAML
//! (`.yaml` / `.yml`) or TOML (`.toml`) file. Every field has a default, so a
//! file only needs to list what it changes:
//!
//! ```yaml
//! export:
//!   output_sql_path: sqlInsertFiles/realistic_data.sql
//!   file_paths:
//!     - source: csv files/restaurants_realistic.csv
//!       table: Restaurants
//!     - source: csv files/feedback_realistic.csv
//!       table: Feedback
//!       enabled: false
//! generate:
//!   seed: 0
//!   num_users: 50
//!   max_phones_per_user: 3
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing TOML
    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Error rendering TOML
    #[error("Failed to render TOML: {0}")]
    TomlRenderError(#[from] toml::ser::Error),

    /// File extension is neither YAML nor TOML
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    /// A value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Null markers recognised by default, matching common dataframe readers.
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "NULL", "null", "NaN", "nan", "N/A", "n/a", "NA", "<NA>", "None", "#N/A",
];

// ============================================================================
// Exporter Configuration
// ============================================================================

/// One CSV file and the table its rows are inserted into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSource {
    /// Path to the CSV file
    pub source: PathBuf,

    /// Target table name
    pub table: String,

    /// Disabled entries stay listed but are not exported
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl TableSource {
    /// Create an enabled entry.
    pub fn new(source: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            table: table.into(),
            enabled: true,
        }
    }

    /// Create an entry that is listed but skipped.
    pub fn disabled(source: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(source, table)
        }
    }

    /// Parse a `SOURCE=TABLE` pair.
    pub fn parse_pair(pair: &str) -> Result<Self, ConfigError> {
        let (source, table) = pair
            .rsplit_once('=')
            .ok_or_else(|| ConfigError::Invalid(format!("expected SOURCE=TABLE, got '{pair}'")))?;
        let (source, table) = (source.trim(), table.trim());
        if source.is_empty() || table.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "expected SOURCE=TABLE, got '{pair}'"
            )));
        }
        Ok(Self::new(source, table))
    }
}

/// Configuration for the CSV-to-SQL exporter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Destination of the generated `.sql` file
    pub output_sql_path: PathBuf,

    /// Infer integer / float columns and render them unquoted
    pub infer_types: bool,

    /// CSV field delimiter
    pub delimiter: char,

    /// Cell contents treated as a missing value
    pub null_markers: Vec<String>,

    /// Source files and target tables, in export order
    pub file_paths: Vec<TableSource>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let csv_dir = Path::new("csv files");
        let entry = |file: &str, table: &str| TableSource::new(csv_dir.join(file), table);
        Self {
            output_sql_path: Path::new("sqlInsertFiles").join("realistic_data.sql"),
            infer_types: true,
            delimiter: ',',
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|m| m.to_string()).collect(),
            file_paths: vec![
                entry("restaurants_realistic.csv", "Restaurants"),
                entry("restaurant_phones_realistic.csv", "RestaurantPhones"),
                entry("cuisine_types_realistic.csv", "CuisineTypes"),
                entry("menu_items_realistic.csv", "MenuItems"),
                entry("orders_realistic.csv", "Orders"),
                entry("order_details_realistic.csv", "OrderDetails"),
                entry("payments_realistic.csv", "Payments"),
                entry("deliveries_realistic.csv", "Deliveries"),
                TableSource::disabled(csv_dir.join("feedback_realistic.csv"), "Feedback"),
            ],
        }
    }
}

impl ExportConfig {
    /// Create a config exporting the given pairs to `output_sql_path`.
    pub fn new(file_paths: Vec<TableSource>, output_sql_path: impl Into<PathBuf>) -> Self {
        Self {
            file_paths,
            output_sql_path: output_sql_path.into(),
            ..Self::default()
        }
    }

    /// Entries that will actually be exported.
    pub fn enabled_sources(&self) -> impl Iterator<Item = &TableSource> {
        self.file_paths.iter().filter(|s| s.enabled)
    }

    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    self.delimiter
                ))
            })
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_sql_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "output_sql_path must not be empty".to_string(),
            ));
        }
        self.delimiter_byte()?;
        Ok(())
    }
}

// ============================================================================
// Generator Configuration
// ============================================================================

/// Configuration for the synthetic user data generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerateConfig {
    /// Seed for the random source (same seed = same data)
    pub seed: u64,

    /// Number of users; phone records reference user ids `1..=num_users`
    pub num_users: u64,

    /// Upper bound of phone numbers generated per user
    pub max_phones_per_user: u32,

    /// Destination of the users CSV
    pub users_csv_path: PathBuf,

    /// Destination of the user phones CSV
    pub phones_csv_path: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_users: 50,
            max_phones_per_user: 3,
            users_csv_path: PathBuf::from("Users2.csv"),
            phones_csv_path: PathBuf::from("UsersPhones.csv"),
        }
    }
}

impl GenerateConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_phones_per_user == 0 {
            return Err(ConfigError::Invalid(
                "max_phones_per_user must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Top-level Configuration
// ============================================================================

/// Configuration for both tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// CSV-to-SQL exporter section
    pub export: ExportConfig,

    /// User data generator section
    pub generate: GenerateConfig,
}

impl Config {
    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file, picking the format from its extension.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let mut config = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Render the config as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Render the config as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Prefix every relative path with `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() && !path.as_os_str().is_empty() {
                *path = base.join(&*path);
            }
        };
        resolve(&mut self.export.output_sql_path);
        for source in &mut self.export.file_paths {
            resolve(&mut source.source);
        }
        resolve(&mut self.generate.users_csv_path);
        resolve(&mut self.generate.phones_csv_path);
    }

    /// Check both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.export.validate()?;
        self.generate.validate()
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_lists_feedback_disabled() {
        let config = ExportConfig::default();

        assert_eq!(config.file_paths.len(), 9);
        assert_eq!(config.enabled_sources().count(), 8);

        let feedback = config.file_paths.last().unwrap();
        assert_eq!(feedback.table, "Feedback");
        assert!(!feedback.enabled);
    }

    #[test]
    fn test_from_yaml_with_defaults() {
        let yaml = r#"
export:
  output_sql_path: out.sql
  file_paths:
    - source: a.csv
      table: A
    - source: b.csv
      table: B
      enabled: false
generate:
  num_users: 3
"#;
        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(config.export.output_sql_path, PathBuf::from("out.sql"));
        assert_eq!(config.export.file_paths[0], TableSource::new("a.csv", "A"));
        assert!(!config.export.file_paths[1].enabled);
        assert!(config.export.infer_types);
        assert_eq!(config.export.delimiter, ',');
        assert_eq!(config.generate.num_users, 3);
        assert_eq!(config.generate.max_phones_per_user, 3);
        assert_eq!(config.generate.seed, 0);
    }

    #[test]
    fn test_from_toml() {
        let content = r#"
[generate]
seed = 7
num_users = 10
max_phones_per_user = 2

[export]
output_sql_path = "x.sql"
infer_types = false

[[export.file_paths]]
source = "t.csv"
table = "T"
"#;
        let config = Config::from_toml(content).unwrap();

        assert_eq!(config.generate.seed, 7);
        assert_eq!(config.generate.max_phones_per_user, 2);
        assert!(!config.export.infer_types);
        assert_eq!(config.export.file_paths, vec![TableSource::new("t.csv", "T")]);
    }

    #[test]
    fn test_yaml_and_toml_render_back() {
        let config = Config::default();

        let from_yaml = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        let from_toml = Config::from_toml(&config.to_toml().unwrap()).unwrap();

        assert_eq!(from_yaml, config);
        assert_eq!(from_toml, config);
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mockdata.yaml");
        std::fs::write(
            &path,
            "export:\n  output_sql_path: out.sql\n  file_paths:\n    - { source: a.csv, table: A }\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.export.output_sql_path, temp_dir.path().join("out.sql"));
        assert_eq!(config.export.file_paths[0].source, temp_dir.path().join("a.csv"));
        assert_eq!(
            config.generate.users_csv_path,
            temp_dir.path().join("Users2.csv")
        );
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mockdata.ini");
        std::fs::write(&path, "").unwrap();

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.generate.max_phones_per_user = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.export.delimiter = 'é';
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.export.output_sql_path = PathBuf::new();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_pair() {
        let pair = TableSource::parse_pair("data/orders.csv=Orders").unwrap();
        assert_eq!(pair, TableSource::new("data/orders.csv", "Orders"));

        assert!(TableSource::parse_pair("orders.csv").is_err());
        assert!(TableSource::parse_pair("=Orders").is_err());
        assert!(TableSource::parse_pair("orders.csv=").is_err());
    }
}

//! CSV populator for synthetic users and user phones.

use crate::error::PopulatorError;
use chrono::{DateTime, Utc};
use csv::{Terminator, Writer, WriterBuilder};
use mockdata_core::GenerateConfig;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use user_generator::{DataGenerator, PhoneRecord, UserRecord};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Header row of the users CSV.
pub const USERS_HEADER: [&str; 12] = [
    "Name",
    "UserName",
    "PasswordHash",
    "City",
    "Street",
    "Apartment",
    "Email",
    "CreatedAt",
    "UpdatedAt",
    "IsDeleted",
    "LastLoginTime",
    "AccountStatus",
];

/// Header row of the user phones CSV.
pub const PHONES_HEADER: [&str; 2] = ["PhoneNumber", "UserID"];

/// Format of timestamps in CSV output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Metrics for both files of a full run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PopulateReport {
    pub users: PopulateMetrics,
    pub phones: PopulateMetrics,
}

/// CSV populator that writes generated users and phones.
pub struct CsvPopulator {
    config: GenerateConfig,
    generator: DataGenerator,
    include_header: bool,
}

impl CsvPopulator {
    /// Create a new CSV populator seeded from `config.seed`.
    pub fn new(config: GenerateConfig) -> Result<Self, PopulatorError> {
        config.validate()?;
        let generator = DataGenerator::new(config.seed);
        Ok(Self {
            config,
            generator,
            include_header: true,
        })
    }

    /// Pin the time used as "now" for generated timestamps.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.generator = DataGenerator::new(self.config.seed).with_now(now);
        self
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Write users, then user phones, to the configured paths.
    ///
    /// Users are drawn first, so the user rows for a seed do not depend on the
    /// phone settings.
    pub fn populate(&mut self) -> Result<PopulateReport, PopulatorError> {
        let config = self.config.clone();
        let users = self.populate_users(&config.users_csv_path, config.num_users)?;
        let phones = self.populate_phones(
            &config.phones_csv_path,
            config.num_users,
            config.max_phones_per_user,
        )?;
        Ok(PopulateReport { users, phones })
    }

    /// Generate a users CSV file with `count` rows.
    pub fn populate_users<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let output_path = output_path.as_ref();
        info!(
            "Generating users CSV file '{}' with {} rows",
            output_path.display(),
            count
        );

        let mut writer = self.create_writer(output_path, &USERS_HEADER, &mut metrics)?;

        for _ in 0..count {
            let gen_start = Instant::now();
            let user = self.generator.next_user();
            metrics.generation_duration += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(user_to_csv_record(&user))?;
            metrics.write_duration += write_start.elapsed();

            metrics.rows_written += 1;
        }

        finish(writer, output_path, start_time, &mut metrics)?;
        info!(
            "Users CSV complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }

    /// Generate a user phones CSV file for user ids `1..=num_users`.
    pub fn populate_phones<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        num_users: u64,
        max_phones_per_user: u32,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let output_path = output_path.as_ref();
        info!(
            "Generating user phones CSV file '{}' for {} users (up to {} phones each)",
            output_path.display(),
            num_users,
            max_phones_per_user
        );

        let gen_start = Instant::now();
        let phones = self.generator.phones(num_users, max_phones_per_user)?;
        metrics.generation_duration = gen_start.elapsed();

        let mut writer = self.create_writer(output_path, &PHONES_HEADER, &mut metrics)?;

        let write_start = Instant::now();
        for phone in &phones {
            writer.write_record(phone_to_csv_record(phone))?;
            metrics.rows_written += 1;
        }
        metrics.write_duration += write_start.elapsed();

        finish(writer, output_path, start_time, &mut metrics)?;
        info!(
            "User phones CSV complete: {} rows, {} bytes in {:?}",
            metrics.rows_written, metrics.file_size_bytes, metrics.total_duration
        );
        Ok(metrics)
    }

    fn create_writer(
        &self,
        output_path: &Path,
        header: &[&str],
        metrics: &mut PopulateMetrics,
    ) -> Result<Writer<BufWriter<File>>, PopulatorError> {
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(buf_writer);

        if self.include_header {
            let write_start = Instant::now();
            writer.write_record(header)?;
            metrics.write_duration += write_start.elapsed();
        }
        Ok(writer)
    }
}

/// Flush the writer, close the file and fill in the size and duration.
fn finish(
    mut writer: Writer<BufWriter<File>>,
    output_path: &Path,
    start_time: Instant,
    metrics: &mut PopulateMetrics,
) -> Result<(), PopulatorError> {
    writer.flush()?;
    drop(writer);
    debug!("Closed '{}'", output_path.display());

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.total_duration = start_time.elapsed();
    Ok(())
}

/// Convert a user to a CSV record in [`USERS_HEADER`] order.
pub fn user_to_csv_record(user: &UserRecord) -> Vec<String> {
    vec![
        user.name.clone(),
        user.username.clone(),
        user.password_hash.clone(),
        user.city.clone(),
        user.street.clone(),
        user.apartment.map(|a| a.to_string()).unwrap_or_default(),
        user.email.clone(),
        user.created_at.format(TIMESTAMP_FORMAT).to_string(),
        user.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        u8::from(user.is_deleted).to_string(),
        user.last_login_time.format(TIMESTAMP_FORMAT).to_string(),
        user.account_status.to_string(),
    ]
}

/// Convert a phone to a CSV record in [`PHONES_HEADER`] order.
pub fn phone_to_csv_record(phone: &PhoneRecord) -> Vec<String> {
    vec![phone.phone_number.clone(), phone.user_id.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::{HashMap, HashSet};
    use tempfile::TempDir;
    use user_generator::AccountStatus;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    fn test_config(dir: &TempDir, num_users: u64, max_phones_per_user: u32) -> GenerateConfig {
        GenerateConfig {
            seed: 0,
            num_users,
            max_phones_per_user,
            users_csv_path: dir.path().join("users.csv"),
            phones_csv_path: dir.path().join("phones.csv"),
        }
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            ..PopulateMetrics::default()
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
    }

    #[test]
    fn test_user_to_csv_record() {
        let user = UserRecord {
            name: "Mary Smith".to_string(),
            username: "msmith".to_string(),
            password_hash: "ab".repeat(32),
            city: "Port Maryville".to_string(),
            street: "Walker Avenue".to_string(),
            apartment: None,
            email: "msmith@gmail.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2021, 3, 10, 5, 6, 7).unwrap(),
            is_deleted: true,
            last_login_time: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            account_status: AccountStatus::Suspended,
        };

        let record = user_to_csv_record(&user);

        assert_eq!(record.len(), USERS_HEADER.len());
        assert_eq!(record[5], "");
        assert_eq!(record[7], "2021-03-04 05:06:07");
        assert_eq!(record[8], "2021-03-10 05:06:07");
        assert_eq!(record[9], "1");
        assert_eq!(record[10], "2024-01-02 03:04:05");
        assert_eq!(record[11], "Suspended");

        let record = user_to_csv_record(&UserRecord {
            apartment: Some(12),
            is_deleted: false,
            ..user
        });
        assert_eq!(record[5], "12");
        assert_eq!(record[9], "0");
    }

    #[test]
    fn test_phone_to_csv_record() {
        let record = phone_to_csv_record(&PhoneRecord::new("+201234567890", 4));

        assert_eq!(record, vec!["+201234567890", "4"]);
    }

    #[test]
    fn test_populate_users_csv() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir, 10, 3);
        let mut populator = CsvPopulator::new(config.clone())
            .unwrap()
            .with_now(fixed_now());

        let metrics = populator
            .populate_users(&config.users_csv_path, 10)
            .unwrap();

        assert_eq!(metrics.rows_written, 10);
        let content = std::fs::read_to_string(&config.users_csv_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 11); // 1 header + 10 data rows
        assert_eq!(
            lines[0],
            "Name,UserName,PasswordHash,City,Street,Apartment,Email,CreatedAt,UpdatedAt,IsDeleted,LastLoginTime,AccountStatus"
        );
        assert!(!content.contains('\r'));
    }

    #[test]
    fn test_populate_phones_csv() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir, 3, 2);
        let mut populator = CsvPopulator::new(config.clone()).unwrap();

        let metrics = populator
            .populate_phones(&config.phones_csv_path, 3, 2)
            .unwrap();

        let mut reader = csv::Reader::from_path(&config.phones_csv_path).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            vec!["PhoneNumber", "UserID"]
        );

        let mut per_user: HashMap<String, HashSet<String>> = HashMap::new();
        let mut rows = 0;
        for record in reader.records() {
            let record = record.unwrap();
            assert!(per_user
                .entry(record[1].to_string())
                .or_default()
                .insert(record[0].to_string()));
            rows += 1;
        }

        assert_eq!(metrics.rows_written, rows);
        assert_eq!(per_user.len(), 3);
        assert!(per_user.values().all(|n| n.len() == 1 || n.len() == 2));
    }

    #[test]
    fn test_populate_without_header() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir, 5, 1);
        let mut populator = CsvPopulator::new(config.clone())
            .unwrap()
            .with_header(false);

        populator.populate().unwrap();

        let content = std::fs::read_to_string(&config.phones_csv_path).unwrap();
        assert_eq!(content.lines().count(), 5); // exactly one phone per user
    }

    #[test]
    fn test_deterministic_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir, 5, 3);

        let mut pop1 = CsvPopulator::new(config.clone())
            .unwrap()
            .with_now(fixed_now());
        let path1 = temp_dir.path().join("test1.csv");
        pop1.populate_users(&path1, 5).unwrap();

        let mut pop2 = CsvPopulator::new(config).unwrap().with_now(fixed_now());
        let path2 = temp_dir.path().join("test2.csv");
        pop2.populate_users(&path2, 5).unwrap();

        let content1 = std::fs::read_to_string(&path1).unwrap();
        let content2 = std::fs::read_to_string(&path2).unwrap();
        assert_eq!(content1, content2);
    }

    #[test]
    fn test_missing_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir, 2, 2);
        let mut populator = CsvPopulator::new(config).unwrap();

        let result = populator.populate_users(temp_dir.path().join("no/such/dir/users.csv"), 2);

        assert!(matches!(result, Err(PopulatorError::Io(_))));
    }

    #[test]
    fn test_zero_phone_limit_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir, 2, 0);

        assert!(matches!(
            CsvPopulator::new(config),
            Err(PopulatorError::Config(_))
        ));
    }
}

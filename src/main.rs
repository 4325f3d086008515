//! Command-line interface for the mock data tools
//!
//! # Usage Examples
//!
//! ## CSV to SQL
//! ```bash
//! # Export every enabled entry of the config file
//! mockdata export --config mockdata.yaml
//!
//! # Export two files, quoting every value
//! mockdata export \
//!   --table "csv files/orders_realistic.csv=Orders" \
//!   --table "csv files/payments_realistic.csv=Payments" \
//!   --output realistic_data.sql \
//!   --no-infer-types
//! ```
//!
//! ## Synthetic users
//! ```bash
//! mockdata generate \
//!   --num-users 50 \
//!   --max-phones-per-user 3 \
//!   --users-csv Users2.csv \
//!   --phones-csv UsersPhones.csv \
//!   --emit-metrics generate-metrics.json
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see progress logs.

use clap::{Parser, Subcommand};
use mockdata::config::{sample_config, ConfigArgs, ConfigFormat, ExportArgs};
use mockdata::populate::GenerateArgs;
use mockdata::{run_export, run_generate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mockdata")]
#[command(about = "Mock data tools for the food-delivery schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert CSV files into one SQL file of INSERT statements
    Export {
        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        args: ExportArgs,

        /// Write run metrics as JSON to this path
        #[arg(long, value_name = "PATH")]
        emit_metrics: Option<PathBuf>,
    },

    /// Generate synthetic users and user phones as CSV files
    Generate {
        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        args: GenerateArgs,

        /// Write run metrics as JSON to this path
        #[arg(long, value_name = "PATH")]
        emit_metrics: Option<PathBuf>,
    },

    /// Print the default configuration
    SampleConfig {
        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            config,
            args,
            emit_metrics,
        } => {
            let mut export_config = config.load()?.export;
            args.apply(&mut export_config)?;
            let output_path = export_config.output_sql_path.clone();

            run_export(export_config, emit_metrics.as_deref())?;
            println!("SQL file generated: {}", output_path.display());
        }
        Commands::Generate {
            config,
            args,
            emit_metrics,
        } => {
            let mut generate_config = config.load()?.generate;
            args.apply(&mut generate_config);
            let users_path = generate_config.users_csv_path.clone();
            let phones_path = generate_config.phones_csv_path.clone();

            let report = run_generate(generate_config, emit_metrics.as_deref())?;
            println!(
                "Users CSV generated: {} ({} rows)",
                users_path.display(),
                report.users.rows_written
            );
            println!(
                "User phones CSV generated: {} ({} rows)",
                phones_path.display(),
                report.phones.rows_written
            );
        }
        Commands::SampleConfig { format } => {
            print!("{}", sample_config(format)?);
        }
    }

    Ok(())
}

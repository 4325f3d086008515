//! CLI argument definitions for the user data generator.

use clap::Args;
use mockdata_core::GenerateConfig;
use std::path::PathBuf;

/// Overrides for the `generate` section of the configuration.
///
/// Options left unset keep the value from the config file (or the default).
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// Number of users to generate
    #[arg(long)]
    pub num_users: Option<u64>,

    /// Upper bound of phone numbers per user
    #[arg(long)]
    pub max_phones_per_user: Option<u32>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output path of the users CSV
    #[arg(long, value_name = "PATH")]
    pub users_csv: Option<PathBuf>,

    /// Output path of the user phones CSV
    #[arg(long, value_name = "PATH")]
    pub phones_csv: Option<PathBuf>,
}

impl GenerateArgs {
    /// Apply the overrides on top of `config`.
    pub fn apply(&self, config: &mut GenerateConfig) {
        if let Some(num_users) = self.num_users {
            config.num_users = num_users;
        }
        if let Some(max) = self.max_phones_per_user {
            config.max_phones_per_user = max;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ref path) = self.users_csv {
            config.users_csv_path = path.clone();
        }
        if let Some(ref path) = self.phones_csv {
            config.phones_csv_path = path.clone();
        }
    }
}

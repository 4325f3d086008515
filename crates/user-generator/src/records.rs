//! Generated record types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Account status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountStatus {
    Active,
    Suspended,
    Blocked,
}

impl AccountStatus {
    /// All statuses, in declaration order.
    pub const ALL: [AccountStatus; 3] = [
        AccountStatus::Active,
        AccountStatus::Suspended,
        AccountStatus::Blocked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Suspended => "Suspended",
            AccountStatus::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    pub name: String,
    pub username: String,
    /// Hex SHA-256 digest of a random password
    pub password_hash: String,
    pub city: String,
    pub street: String,
    pub apartment: Option<u32>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Between 0 and 30 days after `created_at`
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    /// Between `created_at` and the generation time
    pub last_login_time: DateTime<Utc>,
    pub account_status: AccountStatus,
}

/// One phone number owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneRecord {
    pub phone_number: String,
    pub user_id: u64,
}

impl PhoneRecord {
    pub fn new(phone_number: impl Into<String>, user_id: u64) -> Self {
        Self {
            phone_number: phone_number.into(),
            user_id,
        }
    }
}

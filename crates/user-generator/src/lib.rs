//! Synthetic user data generator.
//!
//! This crate produces deterministic user and phone-number records for the
//! food-delivery schema. The generator uses a seeded RNG so that the same seed
//! yields the same records; only values bounded by the current time (creation
//! and last login timestamps) depend on the clock, and "now" can be pinned.
//!
//! # Architecture
//!
//! ```text
//!        seed
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - rng (StdRng) │
//! │  - now          │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ├──► UserRecord  { name, username, password_hash, ... }
//!          └──► PhoneRecord { phone_number, user_id }
//! ```
//!
//! # Example
//!
//! ```rust
//! use user_generator::DataGenerator;
//!
//! let mut generator = DataGenerator::new(0);
//! let users: Vec<_> = generator.users(3).collect();
//! let phones = generator.phones(3, 2).unwrap();
//!
//! assert_eq!(users.len(), 3);
//! assert!(phones.iter().all(|p| (1..=3).contains(&p.user_id)));
//! ```

pub mod generator;
pub mod generators;
pub mod records;

// Re-exports for convenience
pub use generator::{
    generate_user_phones, generate_users_data, DataGenerator, GeneratorError, UserIterator,
};
pub use records::{AccountStatus, PhoneRecord, UserRecord};

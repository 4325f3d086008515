//! Main data generator for producing user and phone records.

use crate::generators::phone::generate_phone_set;
use crate::generators::user::generate_user;
use crate::records::{PhoneRecord, UserRecord};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Phone limit below one
    #[error("max_phones_per_user must be at least 1, got {0}")]
    InvalidPhoneLimit(u32),
}

/// Generate `num_rows` users from `rng`, bounding timestamps by `now`.
pub fn generate_users_data<R: Rng>(
    rng: &mut R,
    num_rows: u64,
    now: DateTime<Utc>,
) -> Vec<UserRecord> {
    (0..num_rows).map(|_| generate_user(rng, now)).collect()
}

/// Generate phone records for user ids `1..=num_rows`.
///
/// Each user gets between 1 and `max_phones_per_user` distinct numbers,
/// the count drawn uniformly.
pub fn generate_user_phones<R: Rng>(
    rng: &mut R,
    num_rows: u64,
    max_phones_per_user: u32,
) -> Result<Vec<PhoneRecord>, GeneratorError> {
    if max_phones_per_user == 0 {
        return Err(GeneratorError::InvalidPhoneLimit(max_phones_per_user));
    }

    let mut data = Vec::new();
    for user_id in 1..=num_rows {
        let num_phones = rng.gen_range(1..=max_phones_per_user) as usize;
        data.extend(generate_phone_set(rng, user_id, num_phones));
    }
    Ok(data)
}

/// Data generator that produces deterministic user and phone records.
///
/// The generator owns a seeded random number generator, so two generators
/// created with the same seed and the same `now` produce identical output.
pub struct DataGenerator {
    /// Seed the RNG was created from
    seed: u64,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Upper bound for creation and last login timestamps
    now: DateTime<Utc>,
    /// Number of users generated so far
    index: u64,
}

impl DataGenerator {
    /// Create a new data generator with the given seed, bounded by the current time.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            now: Utc::now(),
            index: 0,
        }
    }

    /// Pin the time used as "now".
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The time used as "now".
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Number of users generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next user.
    pub fn next_user(&mut self) -> UserRecord {
        let user = generate_user(&mut self.rng, self.now);
        self.index += 1;
        user
    }

    /// Lazily generate `count` users.
    pub fn users(&mut self, count: u64) -> UserIterator<'_> {
        UserIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate the phone set of a single user.
    pub fn user_phones(
        &mut self,
        user_id: u64,
        max_phones_per_user: u32,
    ) -> Result<Vec<PhoneRecord>, GeneratorError> {
        if max_phones_per_user == 0 {
            return Err(GeneratorError::InvalidPhoneLimit(max_phones_per_user));
        }
        let num_phones = self.rng.gen_range(1..=max_phones_per_user) as usize;
        Ok(generate_phone_set(&mut self.rng, user_id, num_phones))
    }

    /// Generate phone records for user ids `1..=num_users`.
    pub fn phones(
        &mut self,
        num_users: u64,
        max_phones_per_user: u32,
    ) -> Result<Vec<PhoneRecord>, GeneratorError> {
        let records = generate_user_phones(&mut self.rng, num_users, max_phones_per_user)?;
        debug!(
            "Generated {} phone numbers for {} users",
            records.len(),
            num_users
        );
        Ok(records)
    }
}

/// Iterator that lazily generates users.
pub struct UserIterator<'a> {
    generator: &'a mut DataGenerator,
    remaining: u64,
}

impl Iterator for UserIterator<'_> {
    type Item = UserRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_user())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for UserIterator<'_> {}

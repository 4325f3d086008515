//! Full user records.

use super::address::{generate_apartment, generate_city, generate_street};
use super::password::generate_password_hash;
use super::person::{generate_email, generate_name, generate_username};
use super::timestamp::{generate_between, generate_this_decade, generate_updated_at};
use crate::records::{AccountStatus, UserRecord};
use rand::Rng;

/// Generate one user record; `now` bounds creation and last login times.
///
/// Fields are drawn in declaration order, so a given RNG state always yields
/// the same record for the same `now`.
pub fn generate_user<R: Rng>(rng: &mut R, now: chrono::DateTime<chrono::Utc>) -> UserRecord {
    let name = generate_name(rng).full();
    let username = generate_username(rng);
    let password_hash = generate_password_hash(rng);
    let city = generate_city(rng);
    let street = generate_street(rng);
    let apartment = generate_apartment(rng);
    let email = generate_email(rng);
    let created_at = generate_this_decade(rng, now);
    let updated_at = generate_updated_at(rng, created_at);
    let is_deleted = rng.gen_range(0..=1) == 1;
    let last_login_time = generate_between(rng, created_at, now);
    let account_status = AccountStatus::ALL[rng.gen_range(0..AccountStatus::ALL.len())];

    UserRecord {
        name,
        username,
        password_hash,
        city,
        street,
        apartment,
        email,
        created_at,
        updated_at,
        is_deleted,
        last_login_time,
        account_status,
    }
}

//! Phone numbers and per-user phone sets.

use crate::records::PhoneRecord;
use rand::Rng;
use std::collections::HashSet;

/// Number of subscriber digits after the country code.
pub const SUBSCRIBER_DIGITS: usize = 10;

/// Generate a phone number: `+`, a country code in `1..=99`, then ten digits.
pub fn generate_phone_number<R: Rng>(rng: &mut R) -> String {
    let country_code = rng.gen_range(1..=99);
    let subscriber: String = (0..SUBSCRIBER_DIGITS)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    format!("+{country_code}{subscriber}")
}

/// Generate `count` distinct phone numbers for one user.
///
/// Numbers that collide with one already drawn for the user are regenerated.
/// Records keep the order in which numbers were first drawn.
pub fn generate_phone_set<R: Rng>(rng: &mut R, user_id: u64, count: usize) -> Vec<PhoneRecord> {
    let mut seen = HashSet::with_capacity(count);
    let mut records = Vec::with_capacity(count);
    while records.len() < count {
        let number = generate_phone_number(rng);
        if seen.insert(number.clone()) {
            records.push(PhoneRecord::new(number, user_id));
        }
    }
    records
}

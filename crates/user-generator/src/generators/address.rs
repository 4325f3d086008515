//! City, street and apartment values.

use super::person::{FIRST_NAMES, LAST_NAMES};
use super::{coin_flip, pick};
use rand::Rng;

pub const CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port"];

pub const CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port", "mouth",
    "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way", "Square",
    "Terrace", "Crescent",
];

/// Highest apartment number.
pub const MAX_APARTMENT: u32 = 50;

/// Generate a city name such as "Port Lindaville" or "Harrisburgh".
pub fn generate_city<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..4) {
        0 => format!(
            "{} {}{}",
            pick(rng, CITY_PREFIXES),
            pick(rng, FIRST_NAMES),
            pick(rng, CITY_SUFFIXES)
        ),
        1 => format!("{} {}", pick(rng, CITY_PREFIXES), pick(rng, FIRST_NAMES)),
        2 => format!("{}{}", pick(rng, FIRST_NAMES), pick(rng, CITY_SUFFIXES)),
        _ => format!("{}{}", pick(rng, LAST_NAMES), pick(rng, CITY_SUFFIXES)),
    }
}

/// Generate a street name such as "Walker Avenue".
pub fn generate_street<R: Rng>(rng: &mut R) -> String {
    let name = if coin_flip(rng) {
        pick(rng, FIRST_NAMES)
    } else {
        pick(rng, LAST_NAMES)
    };
    format!("{name} {}", pick(rng, STREET_SUFFIXES))
}

/// Apartment number in `1..=50` half of the time, otherwise none.
pub fn generate_apartment<R: Rng>(rng: &mut R) -> Option<u32> {
    coin_flip(rng).then(|| rng.gen_range(1..=MAX_APARTMENT))
}

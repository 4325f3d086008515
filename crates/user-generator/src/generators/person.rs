//! Person names, usernames and e-mail addresses.

use super::pick;
use rand::Rng;

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark",
    "Sandra", "Steven", "Ashley", "Andrew", "Emily", "Joshua", "Michelle", "Kevin", "Amanda",
    "Brian", "Melissa", "George", "Rebecca", "Omar", "Layla", "Youssef", "Nour", "Karim", "Salma",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Hassan", "Mahmoud", "Ibrahim", "Mostafa",
];

pub const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];

/// A first and last name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: &'static str,
    pub last: &'static str,
}

impl PersonName {
    /// Full display name, "First Last".
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Generate a random person name.
pub fn generate_name<R: Rng>(rng: &mut R) -> PersonName {
    PersonName {
        first: pick(rng, FIRST_NAMES),
        last: pick(rng, LAST_NAMES),
    }
}

/// Generate a lowercase username derived from a random name.
///
/// Formats: `last.first`, `first.last`, `first` + two digits, first initial + `last`.
pub fn generate_username<R: Rng>(rng: &mut R) -> String {
    let name = generate_name(rng);
    let first = name.first.to_lowercase();
    let last = name.last.to_lowercase();
    match rng.gen_range(0..4) {
        0 => format!("{last}.{first}"),
        1 => format!("{first}.{last}"),
        2 => format!("{first}{:02}", rng.gen_range(0..100)),
        _ => format!("{}{last}", &first[..1]),
    }
}

/// Generate an e-mail address at a free mail domain.
pub fn generate_email<R: Rng>(rng: &mut R) -> String {
    let user = generate_username(rng);
    format!("{user}@{}", pick(rng, FREE_EMAIL_DOMAINS))
}

//! Random passwords and their SHA-256 digests.

use rand::seq::SliceRandom;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of generated passwords.
pub const PASSWORD_LENGTH: usize = 10;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+";

fn pick_byte<R: Rng>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}

/// Generate a password with at least one lowercase letter, uppercase letter,
/// digit and special character.
pub fn generate_password<R: Rng>(rng: &mut R) -> String {
    let classes = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL];
    let all: Vec<u8> = classes.concat();

    let mut bytes: Vec<u8> = classes.iter().map(|set| pick_byte(rng, set)).collect();
    while bytes.len() < PASSWORD_LENGTH {
        bytes.push(pick_byte(rng, &all));
    }
    bytes.shuffle(rng);

    bytes.into_iter().map(char::from).collect()
}

/// Lowercase hex SHA-256 digest of `input`.
pub fn sha256_hex(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

/// Generate a random password and return its digest.
pub fn generate_password_hash<R: Rng>(rng: &mut R) -> String {
    sha256_hex(&generate_password(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_password_classes() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let password = generate_password(&mut rng);
            assert_eq!(password.len(), PASSWORD_LENGTH);
            assert!(password.bytes().any(|b| LOWERCASE.contains(&b)));
            assert!(password.bytes().any(|b| UPPERCASE.contains(&b)));
            assert!(password.bytes().any(|b| DIGITS.contains(&b)));
            assert!(password.bytes().any(|b| SPECIAL.contains(&b)));
        }
    }

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_password_hash_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let hash = generate_password_hash(&mut rng);

        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

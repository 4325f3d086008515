//! Individual value generators for user and phone records.
//!
//! Every generator takes the RNG explicitly, so callers decide which seeded
//! stream a value is drawn from.

pub mod address;
pub mod password;
pub mod person;
pub mod phone;
pub mod timestamp;
pub mod user;

use rand::Rng;

/// Pick one entry of a non-empty pool uniformly.
pub fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

/// A fair coin flip.
pub fn coin_flip<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["a", "b", "c"];

        for _ in 0..100 {
            assert!(pool.contains(&pick(&mut rng, &pool)));
        }
    }

    #[test]
    fn test_coin_flip_hits_both_sides() {
        let mut rng = StdRng::seed_from_u64(42);
        let flips: Vec<bool> = (0..100).map(|_| coin_flip(&mut rng)).collect();

        assert!(flips.contains(&true));
        assert!(flips.contains(&false));
    }
}

//! Property checks over generated user and phone records.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashSet};
use user_generator::{generate_user_phones, generate_users_data, DataGenerator};

#[test]
fn test_three_users_two_phones() {
    let mut rng = StdRng::seed_from_u64(0);
    let phones = generate_user_phones(&mut rng, 3, 2).unwrap();

    let mut per_user: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
    for phone in &phones {
        per_user
            .entry(phone.user_id)
            .or_default()
            .push(phone.phone_number.as_str());
    }

    assert_eq!(per_user.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    for numbers in per_user.values() {
        assert!(numbers.len() == 1 || numbers.len() == 2);
        let unique: HashSet<_> = numbers.iter().collect();
        assert_eq!(unique.len(), numbers.len());
    }
}

#[test]
fn test_phone_limits_across_seeds() {
    for seed in 0..20 {
        for max in 1..=4u32 {
            let mut generator = DataGenerator::new(seed);
            let phones = generator.phones(10, max).unwrap();

            let mut per_user: BTreeMap<u64, HashSet<&str>> = BTreeMap::new();
            for phone in &phones {
                assert!(
                    per_user
                        .entry(phone.user_id)
                        .or_default()
                        .insert(phone.phone_number.as_str()),
                    "duplicate phone number for user {}",
                    phone.user_id
                );
            }
            assert_eq!(per_user.len(), 10);
            assert!(per_user
                .values()
                .all(|numbers| (1..=max as usize).contains(&numbers.len())));
        }
    }
}

#[test]
fn test_timestamps_with_real_clock() {
    let mut rng = StdRng::seed_from_u64(0);
    let users = generate_users_data(&mut rng, 50, Utc::now());
    let after = Utc::now();

    assert_eq!(users.len(), 50);
    for user in &users {
        let gap = user.updated_at - user.created_at;
        assert!(gap >= Duration::zero() && gap <= Duration::days(30));
        assert!(user.last_login_time >= user.created_at);
        assert!(user.last_login_time <= after);
        assert!(user.created_at <= after);
    }
}

#[test]
fn test_user_fields_repeat_for_same_seed() {
    let now = Utc::now();
    let users1: Vec<_> = DataGenerator::new(0).with_now(now).users(10).collect();
    let users2: Vec<_> = DataGenerator::new(0).with_now(now).users(10).collect();

    assert_eq!(users1, users2);
}

//! Timestamp value generators.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use rand::Rng;

/// Largest gap between creation and last update, in days.
pub const MAX_UPDATE_DAYS: i64 = 30;

/// Midnight UTC on January 1st of the decade containing `now`.
pub fn start_of_decade(now: DateTime<Utc>) -> DateTime<Utc> {
    let year = now.year() - now.year().rem_euclid(10);
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Random timestamp with whole-second precision in `[start, end]`.
///
/// Returns `start` when the range is empty.
pub fn generate_between<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        start
    } else {
        let random_ts = rng.gen_range(start_ts..=end_ts);
        DateTime::from_timestamp(random_ts, 0).unwrap_or(start)
    }
}

/// Random timestamp between the start of the current decade and `now`.
pub fn generate_this_decade<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    generate_between(rng, start_of_decade(now), now)
}

/// `created` shifted forward by a whole number of days in `0..=30`.
pub fn generate_updated_at<R: Rng>(rng: &mut R, created: DateTime<Utc>) -> DateTime<Utc> {
    created + Duration::days(rng.gen_range(0..=MAX_UPDATE_DAYS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_start_of_decade() {
        assert_eq!(
            start_of_decade(at(2026, 10, 17)),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            start_of_decade(at(2030, 1, 1)),
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_generate_between_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = at(2021, 1, 1);
        let end = at(2021, 2, 1);

        for _ in 0..100 {
            let value = generate_between(&mut rng, start, end);
            assert!(value >= start && value <= end);
        }
    }

    #[test]
    fn test_generate_between_empty_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = at(2022, 1, 1);

        assert_eq!(generate_between(&mut rng, start, start), start);
        assert_eq!(generate_between(&mut rng, start, at(2021, 1, 1)), start);
    }

    #[test]
    fn test_updated_at_within_thirty_days() {
        let mut rng = StdRng::seed_from_u64(42);
        let created = at(2023, 5, 5);

        for _ in 0..100 {
            let updated = generate_updated_at(&mut rng, created);
            assert!(updated >= created);
            assert!(updated - created <= Duration::days(MAX_UPDATE_DAYS));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let now = at(2026, 10, 17);

        assert_eq!(
            generate_this_decade(&mut rng1, now),
            generate_this_decade(&mut rng2, now)
        );
    }
}

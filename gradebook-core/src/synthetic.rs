//! Deterministic synthetic students and scores
//!
//! The generator state is injected, never global: the same seed always
//! yields the same sequence of rows.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::NewStudent;

pub const DEFAULT_SEED: u64 = 1;

pub const GROUP_RANGE: std::ops::RangeInclusive<i32> = 1..=10;
pub const SCORE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

const FIRST_NAMES: &[&str] = &[
    "Tracy", "Michael", "Jennifer", "David", "Amanda", "Brian", "Laura", "Kevin", "Monica",
    "Steven", "Rachel", "Jason", "Emily", "Carlos", "Megan", "Daniel", "Andrea", "Patrick",
    "Nicole", "Gregory",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
    "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson",
    "Martin", "Lee", "Thompson", "Tracy",
];

/// Birth dates fall in `[1995-01-01, 1995-01-01 + BIRTH_DATE_SPAN_DAYS)`
const BIRTH_DATE_SPAN_DAYS: u64 = 12 * 365;

pub struct SyntheticData<R: Rng = StdRng> {
    rng: R,
}

impl SyntheticData<StdRng> {
    /// Generator seeded with a fixed value
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for SyntheticData<StdRng> {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}

impl<R: Rng> SyntheticData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Doe");
        format!("{first} {last}")
    }

    pub fn birth_date(&mut self) -> NaiveDate {
        let start = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap_or_default();
        let offset = self.rng.gen_range(0..BIRTH_DATE_SPAN_DAYS);
        start.checked_add_days(Days::new(offset)).unwrap_or(start)
    }

    pub fn group(&mut self) -> i32 {
        self.rng.gen_range(GROUP_RANGE)
    }

    pub fn score(&mut self) -> i32 {
        self.rng.gen_range(SCORE_RANGE)
    }

    pub fn student(&mut self) -> NewStudent {
        NewStudent {
            name: self.name(),
            birth_date: self.birth_date(),
            group: self.group(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_students() {
        let mut a = SyntheticData::seeded(DEFAULT_SEED);
        let mut b = SyntheticData::seeded(DEFAULT_SEED);

        let left: Vec<_> = (0..10).map(|_| a.student()).collect();
        let right: Vec<_> = (0..10).map(|_| b.student()).collect();

        assert_eq!(left, right);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SyntheticData::seeded(1);
        let mut b = SyntheticData::seeded(2);

        let left: Vec<_> = (0..10).map(|_| a.student()).collect();
        let right: Vec<_> = (0..10).map(|_| b.student()).collect();

        assert_ne!(left, right);
    }

    #[test]
    fn values_stay_in_range() {
        let mut data = SyntheticData::default();
        let earliest = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();
        let latest = earliest + Days::new(BIRTH_DATE_SPAN_DAYS);

        for _ in 0..500 {
            let student = data.student();
            assert!(GROUP_RANGE.contains(&student.group));
            assert!(student.birth_date >= earliest && student.birth_date < latest);
            assert_eq!(student.name.split(' ').count(), 2);
            assert!(SCORE_RANGE.contains(&data.score()));
        }
    }
}

//! Per-tree mass accrual.
//!
//! Mass is a step function of tree age: `KG_PER_CYCLE_PER_TREE` for every
//! complete `DAYS_PER_CYCLE`-day cycle since planting. Partial cycles
//! contribute nothing, and a planting instant at or after `now` yields zero.

use crate::constants::{DAYS_PER_CYCLE, KG_PER_CYCLE_PER_TREE};
use serde::{Deserialize, Serialize};
use treekin_types::{Timestamp, TreeAgeSample, MILLIS_PER_DAY};

const MILLIS_PER_CYCLE: i64 = DAYS_PER_CYCLE * MILLIS_PER_DAY;

/// Number of complete accrual cycles between `planted_at` and `now`.
pub fn complete_cycles(planted_at: Timestamp, now: Timestamp) -> u64 {
    let elapsed = planted_at.millis_until(now);
    if elapsed <= 0 {
        return 0;
    }
    (elapsed / MILLIS_PER_CYCLE) as u64
}

/// Kilograms accrued by a single tree planted at `planted_at`, as of `now`.
pub fn age_accrued_mass(planted_at: Timestamp, now: Timestamp) -> u64 {
    complete_cycles(planted_at, now).saturating_mul(KG_PER_CYCLE_PER_TREE)
}

/// Kilograms accrued by a sample; unknown planting instants accrue nothing.
pub fn sample_accrued_mass(sample: &TreeAgeSample, now: Timestamp) -> u64 {
    sample
        .planted_at()
        .map(|planted_at| age_accrued_mass(planted_at, now))
        .unwrap_or(0)
}

/// Sum of [`sample_accrued_mass`] over every sample, all against one `now`.
pub fn total_accrued_mass<'a, I>(samples: I, now: Timestamp) -> u64
where
    I: IntoIterator<Item = &'a TreeAgeSample>,
{
    samples
        .into_iter()
        .fold(0u64, |total, sample| total.saturating_add(sample_accrued_mass(sample, now)))
}

/// Per-tree detail row for reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeAccrual {
    /// The planting date as supplied.
    pub source: String,
    /// Parsed planting instant; `None` when the source did not parse.
    pub planted_at: Option<Timestamp>,
    /// Milliseconds of age as of the report's `now`; 0 for future or unknown.
    pub age_millis: u64,
    /// Kilograms accrued (per tracked substance).
    pub kg: u64,
}

impl TreeAccrual {
    pub fn new(source: impl Into<String>, sample: &TreeAgeSample, now: Timestamp) -> Self {
        Self {
            source: source.into(),
            planted_at: sample.planted_at(),
            age_millis: sample
                .planted_at()
                .map(|planted_at| planted_at.elapsed_since(now))
                .unwrap_or(0),
            kg: sample_accrued_mass(sample, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::from_secs(1_700_000_000)
    }

    #[test]
    fn future_planting_accrues_nothing() {
        assert_eq!(age_accrued_mass(now().plus_days(1), now()), 0);
        assert_eq!(age_accrued_mass(now(), now()), 0);
    }

    #[test]
    fn accrual_steps_at_week_boundaries() {
        assert_eq!(age_accrued_mass(now().plus_days(-6), now()), 0);
        assert_eq!(age_accrued_mass(now().plus_days(-7), now()), 1);
        assert_eq!(age_accrued_mass(now().plus_days(-13), now()), 1);
        assert_eq!(age_accrued_mass(now().plus_days(-14), now()), 2);
    }

    #[test]
    fn one_millisecond_short_of_a_week_is_zero() {
        let planted = now().plus_days(-7).plus_millis(1);
        assert_eq!(age_accrued_mass(planted, now()), 0);
    }

    #[test]
    fn unknown_sample_accrues_nothing() {
        assert_eq!(sample_accrued_mass(&TreeAgeSample::unknown(), now()), 0);
    }

    #[test]
    fn total_sums_every_sample() {
        let samples = [
            TreeAgeSample::new(now().plus_days(-21)),
            TreeAgeSample::new(now().plus_days(-7)),
            TreeAgeSample::new(now().plus_days(-1)),
            TreeAgeSample::unknown(),
        ];
        assert_eq!(total_accrued_mass(&samples, now()), 4);
        assert_eq!(total_accrued_mass(&Vec::<TreeAgeSample>::new(), now()), 0);
    }

    #[test]
    fn extreme_ages_do_not_overflow() {
        let ancient = Timestamp::from_millis(i64::MIN);
        let mass = age_accrued_mass(ancient, Timestamp::from_millis(i64::MAX));
        assert_eq!(mass, (i64::MAX / MILLIS_PER_CYCLE) as u64);
        let samples = vec![TreeAgeSample::new(ancient); 4];
        assert!(total_accrued_mass(&samples, Timestamp::from_millis(i64::MAX)) >= mass);
    }

    #[test]
    fn tree_accrual_row_reports_age_and_mass() {
        let sample = TreeAgeSample::new(now().plus_days(-15));
        let row = TreeAccrual::new("x", &sample, now());
        assert_eq!(row.kg, 2);
        assert_eq!(row.age_millis, 15 * MILLIS_PER_DAY as u64);

        let future = TreeAccrual::new("y", &TreeAgeSample::new(now().plus_days(3)), now());
        assert_eq!(future.age_millis, 0);
        assert_eq!(future.kg, 0);
    }
}

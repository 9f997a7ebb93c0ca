//! Core Tredits computation engine.

use crate::accrual::{self, TreeAccrual};
use crate::breakdown::TreditsBreakdown;
use chrono::{Local, TimeZone};
use treekin_types::{Timestamp, TreeAgeSample};

/// The Tredits engine: turns a tree portfolio into a reward breakdown.
///
/// The engine holds no mutable state. Every computation takes an explicit
/// `now`, and every per-tree step within one call is evaluated against that
/// same instant. The time zone is only used to resolve planting dates that
/// carry no UTC offset.
#[derive(Clone, Debug)]
pub struct TreditsEngine<Tz: TimeZone = Local> {
    tz: Tz,
}

impl TreditsEngine<Local> {
    /// Engine that resolves offset-less dates in the system's local zone.
    pub fn new() -> Self {
        Self { tz: Local }
    }
}

impl Default for TreditsEngine<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> TreditsEngine<Tz> {
    pub fn with_timezone(tz: Tz) -> Self {
        Self { tz }
    }

    /// Parse one planting date. Unparseable input yields an unknown sample.
    pub fn sample<S: AsRef<str>>(&self, planted_date: S) -> TreeAgeSample {
        TreeAgeSample::parse_in(planted_date.as_ref(), &self.tz)
    }

    /// Kilograms a single tree planted at `planted_date` has accrued by `now`.
    pub fn age_accrued_mass<S: AsRef<str>>(&self, planted_date: S, now: Timestamp) -> u64 {
        accrual::sample_accrued_mass(&self.sample(planted_date), now)
    }

    /// Kilograms accrued across every planting date, all against `now`.
    pub fn total_accrued_mass<S: AsRef<str>>(&self, planted_dates: &[S], now: Timestamp) -> u64 {
        let samples: Vec<TreeAgeSample> = planted_dates.iter().map(|d| self.sample(d)).collect();
        accrual::total_accrued_mass(&samples, now)
    }

    /// Compute the full breakdown as of `now`.
    ///
    /// `trees_planted` is authoritative for the per-tree bonus and may
    /// differ from `planted_dates.len()`; the dates only drive mass accrual.
    /// A negative count is treated as zero.
    pub fn compute_breakdown<S: AsRef<str>>(
        &self,
        trees_planted: i64,
        planted_dates: &[S],
        now: Timestamp,
    ) -> TreditsBreakdown {
        let trees = clamp_tree_count(trees_planted);
        let accrued_kg = self.total_accrued_mass(planted_dates, now);
        let breakdown = TreditsBreakdown::from_parts(trees, accrued_kg);
        tracing::debug!(
            trees_planted = trees,
            dated_trees = planted_dates.len(),
            accrued_kg,
            total = breakdown.total,
            "computed tredits breakdown"
        );
        breakdown
    }

    /// Compute the breakdown against the current system time, sampled once.
    pub fn compute_breakdown_now<S: AsRef<str>>(
        &self,
        trees_planted: i64,
        planted_dates: &[S],
    ) -> TreditsBreakdown {
        self.compute_breakdown(trees_planted, planted_dates, Timestamp::now())
    }

    /// Breakdown over already-parsed samples.
    pub fn compute_breakdown_from_samples(
        &self,
        trees_planted: i64,
        samples: &[TreeAgeSample],
        now: Timestamp,
    ) -> TreditsBreakdown {
        let accrued_kg = accrual::total_accrued_mass(samples, now);
        TreditsBreakdown::from_parts(clamp_tree_count(trees_planted), accrued_kg)
    }

    /// Per-tree accrual rows in input order, all against `now`.
    pub fn accrual_report<S: AsRef<str>>(
        &self,
        planted_dates: &[S],
        now: Timestamp,
    ) -> Vec<TreeAccrual> {
        planted_dates
            .iter()
            .map(|d| TreeAccrual::new(d.as_ref(), &self.sample(d), now))
            .collect()
    }
}

fn clamp_tree_count(trees_planted: i64) -> u64 {
    if trees_planted < 0 {
        tracing::debug!(trees_planted, "negative tree count clamped to zero");
        0
    } else {
        trees_planted as u64
    }
}

//! Community leaderboards: planters, adopters and carbon offset.
//!
//! Inactive users never appear. Every board breaks ties by earliest
//! `joined_at`, then by `user_id` so that ordering is total.

use crate::error::CarbonError;
use crate::estimate::round2;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use treekin_types::Timestamp;

/// Base offset credited to every owned tree, in hundredths of a kg.
pub const BASE_CARBON_OFFSET_CENTIKG: u64 = 500;
/// Extra offset per growth update, in hundredths of a kg.
pub const GROWTH_FACTOR_CENTIKG: u64 = 50;

/// Adoption score weight per adopted tree.
pub const ADOPTION_POINTS_PER_TREE: f64 = 10.0;
/// Adoption score weight per Tredit spent.
pub const ADOPTION_POINTS_PER_CREDIT: f64 = 0.5;

/// A tree owned (planted) by a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedTree {
    /// Number of growth photos posted for this tree.
    #[serde(default)]
    pub growth_updates: u32,
}

impl OwnedTree {
    /// `5.0 kg + 0.5 kg × growth_updates`, in hundredths of a kg.
    pub fn carbon_offset_centikg(&self) -> u64 {
        BASE_CARBON_OFFSET_CENTIKG + GROWTH_FACTOR_CENTIKG * u64::from(self.growth_updates)
    }
}

/// A user as seen by the leaderboards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: u64,
    pub username: String,
    #[serde(default = "default_true")]
    pub active: bool,
    pub joined_at: Timestamp,
    #[serde(default)]
    pub trees: Vec<OwnedTree>,
    #[serde(default)]
    pub trees_adopted: u32,
    #[serde(default)]
    pub credits_spent: f64,
}

fn default_true() -> bool {
    true
}

fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl UserRecord {
    pub fn trees_planted(&self) -> u32 {
        saturating_count(self.trees.len())
    }

    pub fn total_growth_updates(&self) -> u64 {
        self.trees.iter().map(|t| u64::from(t.growth_updates)).sum()
    }

    pub fn carbon_offset_centikg(&self) -> u64 {
        self.trees.iter().map(OwnedTree::carbon_offset_centikg).sum()
    }

    fn tie_break(&self) -> (Timestamp, u64) {
        (self.joined_at, self.user_id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanterEntry {
    pub user_id: u64,
    pub username: String,
    pub total_trees_planted: u32,
    pub total_growth_updates: u64,
    pub rank: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdopterEntry {
    pub user_id: u64,
    pub username: String,
    pub total_trees_adopted: u32,
    pub total_credits_spent: f64,
    pub adoption_score: f64,
    pub rank: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonEntry {
    pub user_id: u64,
    pub username: String,
    pub total_trees: u32,
    /// Summed offset in kg.
    pub total_carbon_offset: f64,
    pub rank: usize,
}

/// Users ranked by trees planted, then growth updates.
pub fn planters(users: &[UserRecord], limit: usize) -> Vec<PlanterEntry> {
    let mut eligible: Vec<&UserRecord> = users
        .iter()
        .filter(|u| u.active && !u.trees.is_empty())
        .collect();
    eligible.sort_by_key(|u| {
        (
            Reverse(u.trees_planted()),
            Reverse(u.total_growth_updates()),
            u.tie_break(),
        )
    });
    eligible
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, u)| PlanterEntry {
            user_id: u.user_id,
            username: u.username.clone(),
            total_trees_planted: u.trees_planted(),
            total_growth_updates: u.total_growth_updates(),
            rank: idx + 1,
        })
        .collect()
}

/// Users ranked by trees adopted.
///
/// The score combines adoptions with Tredits spent; rank order follows the
/// adoption count.
pub fn adopters(users: &[UserRecord], limit: usize) -> Result<Vec<AdopterEntry>, CarbonError> {
    let mut eligible: Vec<&UserRecord> = users
        .iter()
        .filter(|u| u.active && u.trees_adopted > 0)
        .collect();
    for u in &eligible {
        if !u.credits_spent.is_finite() || u.credits_spent < 0.0 {
            return Err(CarbonError::InvalidCredits {
                user_id: u.user_id,
                value: u.credits_spent.to_string(),
            });
        }
    }
    eligible.sort_by_key(|u| (Reverse(u.trees_adopted), u.tie_break()));
    Ok(eligible
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, u)| AdopterEntry {
            user_id: u.user_id,
            username: u.username.clone(),
            total_trees_adopted: u.trees_adopted,
            total_credits_spent: u.credits_spent,
            adoption_score: round2(
                f64::from(u.trees_adopted) * ADOPTION_POINTS_PER_TREE
                    + u.credits_spent * ADOPTION_POINTS_PER_CREDIT,
            ),
            rank: idx + 1,
        })
        .collect())
}

/// Users ranked by summed per-tree carbon offset.
pub fn carbon(users: &[UserRecord], limit: usize) -> Vec<CarbonEntry> {
    let mut eligible: Vec<&UserRecord> = users
        .iter()
        .filter(|u| u.active && !u.trees.is_empty())
        .collect();
    eligible.sort_by_key(|u| {
        (
            Reverse(u.carbon_offset_centikg()),
            Reverse(u.trees_planted()),
            u.tie_break(),
        )
    });
    eligible
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, u)| CarbonEntry {
            user_id: u.user_id,
            username: u.username.clone(),
            total_trees: u.trees_planted(),
            total_carbon_offset: u.carbon_offset_centikg() as f64 / 100.0,
            rank: idx + 1,
        })
        .collect()
}

//! The computed Tredits breakdown.

use crate::constants::{
    CO2_KG_PER_UNIT, TREDITS_PER_CO2_UNIT, TREDITS_PER_TREE, TREDITS_PER_WATER_UNIT,
    WATER_KG_PER_UNIT,
};
use serde::{Deserialize, Serialize};

/// Decomposition of a user's Tredits into their sources.
///
/// The three mass totals are produced by the same accrual and are always
/// equal. O2 is tracked for display only: `from_o2` is always zero and
/// `total` never includes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreditsBreakdown {
    pub from_trees: u64,
    #[serde(rename = "fromCO2")]
    pub from_co2: u64,
    pub from_water: u64,
    pub from_o2: u64,
    pub total: u64,
    pub trees_planted: u64,
    pub co2_absorbed_kg: u64,
    pub water_filtered_kg: u64,
    pub o2_released_kg: u64,
}

impl TreditsBreakdown {
    /// Build a breakdown from a (clamped) tree count and the accrued mass.
    pub fn from_parts(trees_planted: u64, accrued_kg: u64) -> Self {
        let from_trees = trees_planted.saturating_mul(TREDITS_PER_TREE);
        let from_co2 = reward_for_mass(accrued_kg, CO2_KG_PER_UNIT, TREDITS_PER_CO2_UNIT);
        let from_water = reward_for_mass(accrued_kg, WATER_KG_PER_UNIT, TREDITS_PER_WATER_UNIT);

        Self {
            from_trees,
            from_co2,
            from_water,
            from_o2: 0,
            total: from_trees.saturating_add(from_co2).saturating_add(from_water),
            trees_planted,
            co2_absorbed_kg: accrued_kg,
            water_filtered_kg: accrued_kg,
            o2_released_kg: accrued_kg,
        }
    }

    /// Complete CO2 reward units behind `from_co2`.
    pub fn co2_units(&self) -> u64 {
        self.co2_absorbed_kg / CO2_KG_PER_UNIT
    }

    /// Complete water reward units behind `from_water`.
    pub fn water_units(&self) -> u64 {
        self.water_filtered_kg / WATER_KG_PER_UNIT
    }
}

/// Tredits for `kg` of a tracked substance: whole units only.
pub fn reward_for_mass(kg: u64, kg_per_unit: u64, tredits_per_unit: u64) -> u64 {
    (kg / kg_per_unit).saturating_mul(tredits_per_unit)
}

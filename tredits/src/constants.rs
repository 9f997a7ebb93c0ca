//! Fixed Tredits conversion table.
//!
//! These values are part of the reward contract shown to users and are not
//! tunable at runtime.

/// Flat Tredits per tree planted, independent of age.
pub const TREDITS_PER_TREE: u64 = 50;

/// Tredits granted per complete CO2 reward unit.
pub const TREDITS_PER_CO2_UNIT: u64 = 10;
/// Kilograms of CO2 absorbed per reward unit.
pub const CO2_KG_PER_UNIT: u64 = 10;

/// Tredits granted per complete water reward unit.
pub const TREDITS_PER_WATER_UNIT: u64 = 10;
/// Kilograms of water filtered per reward unit.
pub const WATER_KG_PER_UNIT: u64 = 10;

/// Kilograms accrued per tree per complete cycle (CO2, water and O2 alike).
pub const KG_PER_CYCLE_PER_TREE: u64 = 1;
/// Length of one accrual cycle in days.
pub const DAYS_PER_CYCLE: i64 = 7;

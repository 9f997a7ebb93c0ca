//! Tredits — the tree-age reward computation engine.
//!
//! Tredits are a deterministic function of a tree portfolio and the
//! current instant; nothing is stored.
//!
//! `Tredits = 50 × trees + 10 × ⌊CO2 kg / 10⌋ + 10 × ⌊water kg / 10⌋`
//!
//! where each dated tree accrues 1 kg of CO2 absorbed, water filtered and O2
//! released per complete week since planting. O2 is tracked but not rewarded.
//!
//! This crate handles:
//! - Per-tree step accrual from planting dates
//! - Aggregation into a [`TreditsBreakdown`]
//! - Compact magnitude formatting for display

pub mod accrual;
pub mod breakdown;
pub mod constants;
pub mod engine;
pub mod format;

pub use accrual::{age_accrued_mass, total_accrued_mass, TreeAccrual};
pub use breakdown::TreditsBreakdown;
pub use engine::TreditsEngine;
pub use format::{format_magnitude, format_tredits};

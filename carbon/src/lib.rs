//! Carbon accounting for TreeKin.
//!
//! - Per-tree annual CO2 estimate by species, age and height (`formula_v1`)
//! - Community leaderboards for planters, adopters and carbon offset

pub mod error;
pub mod estimate;
pub mod leaderboard;

pub use error::CarbonError;
pub use estimate::{estimate, CarbonEstimate, Species, TreeMeasurements};
pub use leaderboard::{AdopterEntry, CarbonEntry, OwnedTree, PlanterEntry, UserRecord};

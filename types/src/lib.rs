//! Fundamental types for TreeKin.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: timestamps, planting-date samples, and the common error type.

pub mod error;
pub mod sample;
pub mod time;

pub use error::TreekinError;
pub use sample::{parse_planted_at, TreeAgeSample};
pub use time::{Timestamp, MILLIS_PER_DAY};

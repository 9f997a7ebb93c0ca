//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for TreeKin.
#[derive(Debug, Error)]
pub enum TreekinError {
    #[error("invalid planting date: {0:?}")]
    InvalidDate(String),
}

//! Error types for argument validation failures.
//!
//! Only invalid arguments are errors. A missing key, an out-of-range index or
//! an unparseable path is an expected outcome and is reported through the
//! return value (a default, an empty collection, or `false`).

use thiserror::Error;

/// Errors returned when a helper is called with arguments it cannot honor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LodashError {
    /// `chunk` was asked for chunks of size zero.
    #[error("Invalid chunk size {0}: size must be greater than 0")]
    InvalidChunkSize(usize),

    /// A lower bound was greater than its upper bound (`clamp`, `random`), or
    /// a float range was too wide to sample (`random`).
    #[error("Invalid bounds [{lower}, {upper}]: lower must not exceed upper and the span must be finite")]
    InvalidBounds { lower: String, upper: String },

    /// `range_step` was called with a step of zero.
    #[error("Invalid step: step must not be zero")]
    ZeroStep,
}

/// Convenience alias used throughout lodash-core.
pub type Result<T> = std::result::Result<T, LodashError>;

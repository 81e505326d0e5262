//! Error taxonomy for statistical computations.

use thiserror::Error;

/// Errors raised when a function's domain preconditions are violated.
///
/// Every fallible entry point validates its input before performing any
/// arithmetic, so callers never observe a NaN or infinity born from a
/// division by zero inside this crate. These are pure computations with no
/// transient failure modes; an error is final, never retried.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The input sequence was empty but the statistic requires n ≥ 1.
    #[error("empty input: at least one value is required")]
    EmptyInput,

    /// The input had fewer elements than the statistic's minimum.
    #[error("insufficient samples: need at least {needed}, got {got}")]
    InsufficientSamples { needed: usize, got: usize },

    /// The two regression sequences differ in length.
    #[error("mismatched lengths: x has {x_len} elements but y has {y_len}")]
    MismatchedLengths { x_len: usize, y_len: usize },

    /// The predictor sequence has zero spread, so the slope denominator
    /// vanishes and no line can be fit.
    #[error("degenerate fit: predictor sequence has zero spread")]
    DegenerateFit,

    /// A scale parameter (standard deviation) was zero or negative.
    #[error("non-positive scale: standard deviation must be > 0, got {0}")]
    NonPositiveScale(f64),

    /// The inverse error function is unbounded outside (-1, 1).
    #[error("out of domain: inverse error function requires |y| < 1, got {0}")]
    OutOfDomain(f64),
}

/// Result type for statistical operations.
pub type StatsResult<T> = Result<T, DomainError>;

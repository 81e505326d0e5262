//! Normal cumulative distribution function.

use crate::error::{DomainError, StatsResult};
use statrs::function::erf::erf;
use std::f64::consts::SQRT_2;

/// Probability that a normally distributed variable with the given mean and
/// standard deviation is ≤ `x`.
///
/// Evaluates the closed form `Φ(x) = 0.5·(1 + erf((x − μ)/(σ·√2)))`.
///
/// # Errors
///
/// [`DomainError::NonPositiveScale`] if `std_dev` is not strictly positive.
///
/// # Example
///
/// ```
/// use descriptive_stats::normal_cdf;
/// let p = normal_cdf(0.0, 1.0, 0.0).unwrap();
/// assert!((p - 0.5).abs() < 1e-12);
/// ```
pub fn normal_cdf(mean: f64, std_dev: f64, x: f64) -> StatsResult<f64> {
    if !(std_dev > 0.0) {
        return Err(DomainError::NonPositiveScale(std_dev));
    }
    let z = (x - mean) / (std_dev * SQRT_2);
    Ok(0.5 * (1.0 + erf(z)))
}

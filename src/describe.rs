//! Descriptive statistics over `f64` sequences.
//!
//! All functions take a borrowed slice and leave it untouched; `median`
//! sorts an internal copy. Each statistic is computed from a single
//! aggregation pass except `median`, which is dominated by its O(n log n)
//! sort.

use crate::aggregate::Aggregate;
use crate::error::{DomainError, StatsResult};

/// Sum of the elements, Σxᵢ.
///
/// An empty sequence sums to 0.
pub fn sum(data: &[f64]) -> f64 {
    Aggregate::over(data).sum
}

/// Sum of the squared elements, Σxᵢ².
///
/// An empty sequence sums to 0.
pub fn sum_of_squares(data: &[f64]) -> f64 {
    Aggregate::over(data).sum_sq
}

/// Arithmetic mean, Σxᵢ / n.
///
/// # Errors
///
/// [`DomainError::EmptyInput`] if `data` is empty.
///
/// # Example
///
/// ```
/// use descriptive_stats::mean;
/// let m = mean(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert!((m - 2.5).abs() < 1e-12);
/// ```
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    Ok(Aggregate::over(data).mean())
}

/// Population standard deviation, `sqrt(Σx²/n − mean²)`.
///
/// Uses the uncentered "sum of squares minus mean squared" form. For inputs
/// of very large magnitude this form loses more precision than a two-pass
/// centered sum, but agrees with it to standard floating-point tolerance
/// over ordinary data.
///
/// # Errors
///
/// [`DomainError::EmptyInput`] if `data` is empty.
pub fn population_std_dev(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let agg = Aggregate::over(data);
    let n = agg.count as f64;
    let mean = agg.mean();
    // Rounding can leave a tiny negative residue for near-constant data.
    let variance = (agg.sum_sq / n - mean * mean).max(0.0);
    Ok(variance.sqrt())
}

/// Sample standard deviation, `sqrt((Σx² − (Σx)²/n) / (n − 1))`.
///
/// Applies Bessel's correction (n − 1 denominator), treating the sequence
/// as a sample from a larger population.
///
/// # Errors
///
/// [`DomainError::InsufficientSamples`] if `data` has fewer than 2 elements.
pub fn sample_std_dev(data: &[f64]) -> StatsResult<f64> {
    let n = data.len();
    if n < 2 {
        return Err(DomainError::InsufficientSamples { needed: 2, got: n });
    }
    let agg = Aggregate::over(data);
    let nf = n as f64;
    let variance = ((agg.sum_sq - agg.sum * agg.sum / nf) / (nf - 1.0)).max(0.0);
    Ok(variance.sqrt())
}

/// Geometric mean, `(Πxᵢ)^(1/n)`.
///
/// The product accumulates across one pass, starting from 1. A sequence
/// whose product is negative has no real n-th root in general, so the
/// result is defined as NaN rather than an error. A zero element makes the
/// result 0.
///
/// # Errors
///
/// [`DomainError::EmptyInput`] if `data` is empty.
///
/// # Example
///
/// ```
/// use descriptive_stats::geometric_mean;
/// let g = geometric_mean(&[1.0, 2.0, 4.0, 8.0]).unwrap();
/// assert!((g - 64.0_f64.powf(0.25)).abs() < 1e-12);
/// ```
pub fn geometric_mean(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let agg = Aggregate::over(data);
    if agg.product < 0.0 {
        return Ok(f64::NAN);
    }
    Ok(agg.product.powf(1.0 / agg.count as f64))
}

/// Statistical median.
///
/// Sorts an ascending copy of the input (the caller's slice is never
/// reordered, so concurrent readers of the same sequence are safe), then
/// takes the middle element, or the average of the two middle elements for
/// even-length input.
///
/// # Errors
///
/// [`DomainError::EmptyInput`] if `data` is empty.
///
/// # Example
///
/// ```
/// use descriptive_stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

//! Descriptive statistics, simple linear regression, and Gaussian special
//! functions over `f64` sequences.
//!
//! The host program supplies a finite numeric sequence as a slice and
//! receives scalar or small-record results. Every function is pure, borrows
//! its input read-only, and validates its domain preconditions before any
//! arithmetic, reporting violations as [`DomainError`] values instead of
//! silently propagating NaN.
//!
//! # Example
//!
//! ```
//! use descriptive_stats::{linear_regression, mean, median, population_std_dev};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&data).unwrap(), 5.0);
//! assert_eq!(population_std_dev(&data).unwrap(), 2.0);
//! assert_eq!(median(&data).unwrap(), 4.5);
//!
//! let fit = linear_regression(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! ```

mod aggregate;
pub mod describe;
pub mod distribution;
pub mod error;
pub mod regression;
pub mod special;

pub use describe::{
    geometric_mean, mean, median, population_std_dev, sample_std_dev, sum, sum_of_squares,
};
pub use distribution::normal_cdf;
pub use error::{DomainError, StatsResult};
pub use regression::{linear_regression, LinearFit};
pub use special::inverse_erf;

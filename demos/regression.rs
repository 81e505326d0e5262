//! # Linear Regression and Gaussian Functions
//!
//! Fits a least-squares line through noisy data, then evaluates the normal
//! CDF and the inverse error function around it.
//!
//! Run with: `cargo run --example regression`

use descriptive_stats::{inverse_erf, linear_regression, normal_cdf};

fn main() {
    println!("=== Linear Regression ===\n");

    simple_fit();
    gaussian_functions();
}

/// Fit y = 2 + 3*x + noise and recover the parameters
fn simple_fit() {
    println!("--- Simple Fit ---\n");

    let noise = [
        0.5, -0.3, 0.8, -0.2, 0.1, -0.6, 0.4, -0.1, 0.3, -0.5, 0.2, -0.4, 0.6, -0.3, 0.1, -0.2,
        0.4, -0.5, 0.3, -0.1,
    ];

    let x: Vec<f64> = (0..noise.len()).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x
        .iter()
        .zip(&noise)
        .map(|(&xi, &e)| 2.0 + 3.0 * xi + e)
        .collect();

    let fit = linear_regression(&x, &y).expect("fit should succeed");

    println!("True model: y = 2 + 3*x + noise");
    println!("Estimated slope:     {:.4}", fit.slope);
    println!("Estimated intercept: {:.4}", fit.intercept);
    println!("Correlation proxy:   {:.4}", fit.correlation);
    println!();
}

/// Normal CDF probabilities and the matching quantiles via erfinv
fn gaussian_functions() {
    println!("--- Gaussian Functions ---\n");

    let mu = 100.0;
    let sigma = 15.0;

    for x in [70.0, 85.0, 100.0, 115.0, 130.0] {
        let p = normal_cdf(mu, sigma, x).expect("sigma is positive");
        println!("P(X <= {x:>5.1}) = {p:.4}   (mu = {mu}, sigma = {sigma})");
    }
    println!();

    // Recover the standard-normal 97.5% critical value from erfinv.
    let z = std::f64::consts::SQRT_2 * inverse_erf(0.95).expect("0.95 is in (-1, 1)");
    println!("sqrt(2) * erfinv(0.95) = {z:.6}  (the 1.96 critical value)");
}

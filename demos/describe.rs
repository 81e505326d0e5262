//! # Descriptive Statistics
//!
//! Walks through the summary statistics the library computes from a single
//! sequence: sums, mean, both standard deviations, median, and the
//! geometric mean, including the documented edge cases.
//!
//! Run with: `cargo run --example describe`

use descriptive_stats::{
    geometric_mean, mean, median, population_std_dev, sample_std_dev, sum, sum_of_squares,
};

fn main() {
    println!("=== Descriptive Statistics ===\n");

    summary_statistics();
    spread_measures();
    edge_cases();
}

/// Sums, mean, and median of a small sample
fn summary_statistics() {
    println!("--- Summary ---\n");

    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    println!("data: {data:?}");
    println!("sum:            {:.4}", sum(&data));
    println!("sum of squares: {:.4}", sum_of_squares(&data));
    println!("mean:           {:.4}", mean(&data).expect("non-empty"));
    println!("median:         {:.4}", median(&data).expect("non-empty"));
    println!();
}

/// Population vs. sample standard deviation, and the geometric mean
fn spread_measures() {
    println!("--- Spread ---\n");

    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    println!(
        "population std dev (n):     {:.6}",
        population_std_dev(&data).expect("non-empty")
    );
    println!(
        "sample std dev (n-1):       {:.6}",
        sample_std_dev(&data).expect("needs two values")
    );

    let growth = [1.0, 2.0, 4.0, 8.0];
    println!(
        "geometric mean of {growth:?}: {:.6}",
        geometric_mean(&growth).expect("non-empty")
    );
    println!();
}

/// Preconditions are reported as errors, not NaN
fn edge_cases() {
    println!("--- Edge Cases ---\n");

    println!("mean of []:           {:?}", mean(&[]));
    println!("sample std dev of [x]: {:?}", sample_std_dev(&[1.0]));
    println!(
        "geometric mean with negative product: {:?}",
        geometric_mean(&[-2.0, 2.0, 3.0, 3.0])
    );
}

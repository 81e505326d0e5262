//! Common test utilities and data generators.

/// Generate a reproducible pseudo-random sequence in [-1, 1].
#[allow(dead_code)]
pub fn generate_sequence(n: usize, seed: u64) -> Vec<f64> {
    // Simple deterministic "random" for reproducibility
    let mut state = seed;
    let mut next_rand = || -> f64 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };
    (0..n).map(|_| next_rand()).collect()
}

/// Generate noisy points along y = slope*x + intercept.
#[allow(dead_code)]
pub fn generate_line(
    n: usize,
    slope: f64,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    let noise = generate_sequence(n, seed);
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x
        .iter()
        .zip(&noise)
        .map(|(&xi, &e)| intercept + slope * xi + noise_std * e)
        .collect();
    (x, y)
}

/// Two-pass centered population variance, used as an independent check
/// against the library's uncentered formula.
#[allow(dead_code)]
pub fn centered_population_variance(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n
}

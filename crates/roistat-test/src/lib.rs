//! roistat-test - Regression test helpers for roistat
//!
//! Provides synthetic pixel buffers and a small value-comparison harness
//! modelled on a regression-test parameter block:
//!
//! ```ignore
//! use roistat_test::{RegParams, TestImage};
//!
//! let img = TestImage::uniform(8, 8, Bgra::rgb(10, 20, 30));
//! let mut rp = RegParams::new("uniform");
//! rp.compare_values(10.0, stats.red.mean, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::TestImage;
pub use params::RegParams;

/// Sample variance `(1/(n-1)) * sum((v - mean)^2)`.
///
/// Not used by the library; tests use it to show that the population form
/// gives a different answer. Returns 0 for fewer than two values.
pub fn sample_variance(values: &[u8]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_variance() {
        let v = [10, 20, 30, 40];
        assert!((sample_variance(&v) - 500.0 / 3.0).abs() < 1e-12);
        assert_eq!(sample_variance(&[7]), 0.0);
    }
}

//! Regression test parameters and comparisons

use roistat_core::{ChannelStats, RgbStats};

/// Regression test parameters
///
/// Tracks the test name, a running comparison index and every failure, so
/// one test can check many values and report them all at the end.
pub struct RegParams {
    /// Name of the test (e.g., "extract")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////   {}_reg   ///////////////", test_name);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if `|expected - actual| <= delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never satisfies the bound
        if diff.is_nan() || diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare all four statistics of one channel.
    pub fn compare_channel(
        &mut self,
        expected: &ChannelStats,
        actual: &ChannelStats,
        delta: f64,
    ) -> bool {
        let checks = [
            self.compare_values(expected.mean, actual.mean, delta),
            self.compare_values(expected.variance, actual.variance, delta),
            self.compare_values(expected.std_dev, actual.std_dev, delta),
            self.compare_values(expected.median, actual.median, delta),
        ];
        checks.iter().all(|&ok| ok)
    }

    /// Compare every channel of two results.
    pub fn compare_stats(&mut self, expected: &RgbStats, actual: &RgbStats, delta: f64) -> bool {
        let r = self.compare_channel(&expected.red, &actual.red, delta);
        let g = self.compare_channel(&expected.green, &actual.green, delta);
        let b = self.compare_channel(&expected.blue, &actual.blue, delta);
        r && g && b
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

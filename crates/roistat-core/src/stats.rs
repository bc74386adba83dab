//! Region colour statistics
//!
//! This module computes descriptive statistics per colour channel:
//!
//! - Mean (real-valued, no integer truncation)
//! - Population variance (divides by `n`, not `n - 1`)
//! - Standard deviation (square root of the population variance)
//! - Median (average of the two middle values for even counts)
//!
//! All routines are pure functions over sample slices. Empty input yields
//! zeros rather than an error, which is how "no selection yet" is shown.

use crate::buffer::PixelBuffer;
use crate::color::Channel;
use crate::error::Result;
use crate::extract::{ChannelSamples, extract};
use crate::region::Region;
use std::fmt;

/// Arithmetic mean of `values`, or 0 if empty.
pub fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u64 = values.iter().map(|&v| v as u64).sum();
    sum as f64 / values.len() as f64
}

/// Population variance `(1/n) * sum((v - mean)^2)`, or 0 if empty.
///
/// `mean` must be the mean of `values`; it is taken as a parameter so
/// callers that already have it do not rescan.
pub fn population_variance(values: &[u8], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let ss: f64 = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    ss / values.len() as f64
}

/// Median of an ascending slice, or 0 if empty.
///
/// Odd counts return the middle element; even counts return the mean of
/// the two middle elements, so the result may end in `.5`.
pub fn median_of_sorted(sorted: &[u8]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    }
}

/// Median of `values` in any order. Sorts a copy; the input is untouched.
pub fn median(values: &[u8]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    median_of_sorted(&sorted)
}

/// Mean and population variance without the sort needed for a median.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
}

impl Moments {
    /// Two-pass mean then variance.
    pub fn from_samples(values: &[u8]) -> Self {
        let mean = mean(values);
        Self {
            mean,
            variance: population_variance(values, mean),
        }
    }

    /// Standard deviation
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Statistics of one colour channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelStats {
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    pub std_dev: f64,
    pub median: f64,
}

impl ChannelStats {
    /// Compute all four statistics for one channel.
    pub fn from_samples(values: &[u8]) -> Self {
        let moments = Moments::from_samples(values);
        Self {
            mean: moments.mean,
            variance: moments.variance,
            std_dev: moments.std_dev(),
            median: median(values),
        }
    }
}

/// Statistics for the red, green and blue channels of a region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RgbStats {
    pub red: ChannelStats,
    pub green: ChannelStats,
    pub blue: ChannelStats,
}

impl RgbStats {
    /// Statistics of one channel.
    pub fn channel(&self, channel: Channel) -> &ChannelStats {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}

/// Compute per-channel statistics from extracted samples.
///
/// With no samples every field is zero.
///
/// # Examples
///
/// ```
/// use roistat_core::{ChannelSamples, compute_stats};
///
/// let samples = ChannelSamples::from_channels(
///     vec![10, 20, 30, 40],
///     vec![1, 2, 3, 4],
///     vec![5, 5, 5, 5],
/// ).unwrap();
/// let stats = compute_stats(&samples);
/// assert_eq!(stats.red.mean, 25.0);
/// assert_eq!(stats.red.median, 25.0);
/// assert_eq!(stats.red.variance, 125.0);
/// assert_eq!(stats.blue.std_dev, 0.0);
/// ```
pub fn compute_stats(samples: &ChannelSamples) -> RgbStats {
    if samples.is_empty() {
        return RgbStats::default();
    }
    RgbStats {
        red: ChannelStats::from_samples(samples.red()),
        green: ChannelStats::from_samples(samples.green()),
        blue: ChannelStats::from_samples(samples.blue()),
    }
}

/// Extract `region` from `buffer` and compute its statistics.
///
/// # Errors
///
/// Propagates the region errors of [`extract`].
pub fn region_stats(buffer: &PixelBuffer<'_>, region: Region) -> Result<RgbStats> {
    let samples = extract(buffer, region)?;
    let stats = compute_stats(&samples);
    tracing::debug!(
        region = %region,
        pixels = samples.len(),
        mean_r = stats.red.mean,
        mean_g = stats.green.mean,
        mean_b = stats.blue.mean,
        "computed region statistics"
    );
    Ok(stats)
}

impl fmt::Display for RgbStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, Some(self))
    }
}

/// Printable read-out of a selection and its statistics.
///
/// Mean, standard deviation and variance are shown with two decimals, the
/// median with one so an even-count `.5` stays visible. With nothing
/// selected every cell shows `-`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatsReport {
    pub region: Option<Region>,
    pub stats: Option<RgbStats>,
}

impl StatsReport {
    /// Report for a computed selection.
    pub fn new(region: Region, stats: RgbStats) -> Self {
        Self {
            region: Some(region),
            stats: Some(stats),
        }
    }

    /// Report with nothing selected.
    pub fn none() -> Self {
        Self::default()
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.region {
            Some(region) => writeln!(f, "Selection: {region}")?,
            None => writeln!(f, "No selection")?,
        }
        write_table(f, self.stats.as_ref())
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, stats: Option<&RgbStats>) -> fmt::Result {
    write!(f, "{:<8}", "")?;
    for ch in Channel::ALL {
        write!(f, "{:>10}", ch.label())?;
    }
    writeln!(f)?;

    let rows: [(&str, fn(&ChannelStats) -> f64, usize); 4] = [
        ("Mean", |c: &ChannelStats| c.mean, 2),
        ("Median", |c: &ChannelStats| c.median, 1),
        ("StdDev", |c: &ChannelStats| c.std_dev, 2),
        ("Variance", |c: &ChannelStats| c.variance, 2),
    ];
    for (i, (name, field, prec)) in rows.iter().enumerate() {
        write!(f, "{name:<8}")?;
        for ch in Channel::ALL {
            match stats {
                Some(s) => write!(f, "{:>10.*}", *prec, field(s.channel(ch)))?,
                None => write!(f, "{:>10}", "-")?,
            }
        }
        if i + 1 < rows.len() {
            writeln!(f)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_is_real_valued() {
        assert_eq!(mean(&[1, 2]), 1.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_no_overflow() {
        let values = vec![255u8; 100_000];
        assert_eq!(mean(&values), 255.0);
    }

    #[test]
    fn test_population_variance() {
        let v = [10, 20, 30, 40];
        assert_eq!(population_variance(&v, mean(&v)), 125.0);
        assert_eq!(population_variance(&[], 0.0), 0.0);
    }

    #[test]
    fn test_median_odd_even() {
        assert_eq!(median(&[3, 1, 2]), 2.0);
        assert_eq!(median(&[40, 10, 30, 20]), 25.0);
        assert_eq!(median(&[1, 2]), 1.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_with_ties() {
        assert_eq!(median(&[5, 5, 5, 9]), 5.0);
        assert_eq!(median(&[9, 5, 9, 5]), 7.0);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let v = [9u8, 1, 5];
        let _ = median(&v);
        assert_eq!(v, [9, 1, 5]);
    }

    #[test]
    fn test_moments_std_dev() {
        let m = Moments::from_samples(&[10, 20, 30, 40]);
        assert_eq!(m.mean, 25.0);
        assert!((m.std_dev() - 125f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_compute_stats_empty_is_zero() {
        let stats = compute_stats(&ChannelSamples::new());
        assert_eq!(stats, RgbStats::default());
        assert_eq!(stats.green.std_dev, 0.0);
    }

    #[test]
    fn test_channels_independent() {
        let s = ChannelSamples::from_channels(vec![0, 255], vec![7, 7], vec![1, 2]).unwrap();
        let stats = compute_stats(&s);
        assert_eq!(stats.red.mean, 127.5);
        assert_eq!(stats.green.variance, 0.0);
        assert_eq!(stats.blue.median, 1.5);
        assert_eq!(stats.channel(Channel::Blue), &stats.blue);
    }

    #[test]
    fn test_report_without_selection() {
        let text = StatsReport::none().to_string();
        assert!(text.starts_with("No selection\n"));
        assert!(text.contains('-'));
        assert!(!text.contains("0.00"));
    }

    #[test]
    fn test_report_formatting() {
        let s = ChannelSamples::from_channels(vec![1, 2], vec![4, 4], vec![0, 0]).unwrap();
        let report = StatsReport::new(Region::new(0, 0, 2, 1), compute_stats(&s));
        let text = report.to_string();
        assert!(text.starts_with("Selection: X=0, Y=0, W=2, H=1\n"));
        let mean_line = text.lines().find(|l| l.starts_with("Mean")).unwrap();
        assert!(mean_line.contains("1.50"));
        assert!(mean_line.contains("4.00"));
        let median_line = text.lines().find(|l| l.starts_with("Median")).unwrap();
        assert!(median_line.contains("1.5"));
    }
}

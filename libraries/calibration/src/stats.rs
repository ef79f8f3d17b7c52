use crate::error::{StatsError, StatsResult};

/// Arithmetic mean
pub fn mean(samples: &[f64]) -> StatsResult<f64> {
    if samples.is_empty() {
        return Err(StatsError::Empty);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Median; an even-sized set yields the mean of its two middle values
pub fn median(samples: &[f64]) -> StatsResult<f64> {
    if samples.is_empty() {
        return Err(StatsError::Empty);
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Sample standard deviation (Bessel-corrected, divides by n - 1)
pub fn sample_stdev(samples: &[f64]) -> StatsResult<f64> {
    if samples.len() < 2 {
        return Err(StatsError::InsufficientSamples {
            needed: 2,
            got: samples.len(),
        });
    }
    let avg = mean(samples)?;
    let sum_sq: f64 = samples.iter().map(|v| (v - avg) * (v - avg)).sum();
    Ok((sum_sq / (samples.len() - 1) as f64).sqrt())
}

/// Summary statistics of one axis
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AxisStats {
    pub mean: f64,
    pub median: f64,
    pub stdev: f64,
}

impl AxisStats {
    /// Summarise a sample set, substituting zero for undefined statistics
    ///
    /// Returns the summary together with a flag telling whether any
    /// statistic had to be substituted.
    pub fn summarise(samples: &[f64]) -> (Self, bool) {
        let mut degenerate = false;
        let mut or_zero = |value: StatsResult<f64>| {
            value.unwrap_or_else(|_| {
                degenerate = true;
                0.0
            })
        };

        let stats = AxisStats {
            mean: or_zero(mean(samples)),
            median: or_zero(median(samples)),
            stdev: or_zero(sample_stdev(samples)),
        };
        (stats, degenerate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(median(&[5.0, 1.0, 4.0, 2.0, 3.0]), Ok(3.0), "input order must not matter");
        assert_eq!(median(&[7.0]), Ok(7.0));
    }

    #[test]
    fn test_constant_set() {
        let samples = [-321.0; 64];
        assert_eq!(mean(&samples), Ok(-321.0));
        assert_eq!(median(&samples), Ok(-321.0));
        assert_eq!(sample_stdev(&samples), Ok(0.0));
    }

    #[test]
    fn test_sample_stdev_uses_n_minus_one() {
        // Sum of squared deviations is 32; 32 / 7 under the sample convention
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stdev = sample_stdev(&samples).unwrap();
        assert!((stdev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12, "got {}", stdev);
    }

    #[test]
    fn test_degenerate_inputs_are_errors() {
        assert_eq!(mean(&[]), Err(StatsError::Empty));
        assert_eq!(median(&[]), Err(StatsError::Empty));
        assert_eq!(
            sample_stdev(&[1.0]),
            Err(StatsError::InsufficientSamples { needed: 2, got: 1 })
        );
    }

    #[test]
    fn test_summarise_substitutes_zero() {
        let (single, degenerate) = AxisStats::summarise(&[42.0]);
        assert!(degenerate);
        assert_eq!(single, AxisStats { mean: 42.0, median: 42.0, stdev: 0.0 });

        let (empty, degenerate) = AxisStats::summarise(&[]);
        assert!(degenerate);
        assert_eq!(empty, AxisStats::default());

        let (_, degenerate) = AxisStats::summarise(&[1.0, 2.0]);
        assert!(!degenerate);
    }
}

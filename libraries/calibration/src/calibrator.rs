use core::fmt;

use hal::{RawSample, Vector3d};
use log::warn;

use crate::offset::CalibrationOffset;
use crate::stats::AxisStats;

/// Default number of accelerometer samples collected for calibration
pub const CAL_MAX_SAMPLES: usize = 1024;

/// Collects stationary accelerometer samples and derives the bias offset
#[derive(Debug, Clone)]
pub struct Calibrator {
    target: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Calibrator {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            x: Vec::with_capacity(target),
            y: Vec::with_capacity(target),
            z: Vec::with_capacity(target),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.len() >= self.target
    }

    /// Record one sample; ignored once the target count is reached
    pub fn push(&mut self, sample: RawSample) -> bool {
        if self.is_complete() {
            return false;
        }
        self.x.push(sample.x.into());
        self.y.push(sample.y.into());
        self.z.push(sample.z.into());
        true
    }

    /// Compute statistics and the median-centred offset
    pub fn finish(self) -> CalibrationReport {
        let (x, dx) = AxisStats::summarise(&self.x);
        let (y, dy) = AxisStats::summarise(&self.y);
        let (z, dz) = AxisStats::summarise(&self.z);
        let degenerate = dx || dy || dz;
        if degenerate {
            warn!(
                "calibration used {} samples; undefined statistics reported as 0",
                self.x.len()
            );
        }

        CalibrationReport {
            samples: self.x.len(),
            x,
            y,
            z,
            offset: CalibrationOffset::from_centre(Vector3d::new(x.median, y.median, z.median)),
            degenerate,
        }
    }
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new(CAL_MAX_SAMPLES)
    }
}

/// Outcome of a calibration pass
///
/// Mean and standard deviation are diagnostics for the operator; only the
/// median feeds into the offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationReport {
    pub samples: usize,
    pub x: AxisStats,
    pub y: AxisStats,
    pub z: AxisStats,
    pub offset: CalibrationOffset,
    /// Too few samples for at least one statistic
    pub degenerate: bool,
}

impl fmt::Display for CalibrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calibrated results: ")?;
        writeln!(f, "Mean:   {:.3}, {:.3}, {:.3}", self.x.mean, self.y.mean, self.z.mean)?;
        writeln!(f, "Median: {:.3}, {:.3}, {:.3}", self.x.median, self.y.median, self.z.median)?;
        writeln!(f, "Stdev:  {:.3}, {:.3}, {:.3}", self.x.stdev, self.y.stdev, self.z.stdev)?;
        write!(f, "Offsets: {}", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_samples() {
        let mut calibrator = Calibrator::new(16);
        while !calibrator.is_complete() {
            calibrator.push(RawSample::new(512, -40, 16384));
        }
        let report = calibrator.finish();

        assert_eq!(report.samples, 16);
        assert!(!report.degenerate);
        assert_eq!(report.x, AxisStats { mean: 512.0, median: 512.0, stdev: 0.0 });
        assert_eq!(report.y.median, -40.0);
        assert_eq!(report.offset.counts(), Vector3d::new(-512.0, 40.0, -16384.0));
    }

    #[test]
    fn test_axes_are_independent() {
        let mut calibrator = Calibrator::new(4);
        let samples = [(1, 10, 0), (2, 20, 0), (3, 30, 0), (100, 40, 0)];
        for (i, (x, y, z)) in samples.into_iter().enumerate() {
            assert!(calibrator.push(RawSample::new(x, y, z)), "sample {}", i);
        }
        let report = calibrator.finish();

        // Outlier moves the mean but not the median used for the offset
        assert_eq!(report.x.mean, 26.5);
        assert_eq!(report.x.median, 2.5);
        assert_eq!(report.y.median, 25.0);
        assert_eq!(report.offset.counts(), Vector3d::new(-2.5, -25.0, 0.0));
    }

    #[test]
    fn test_push_stops_at_target() {
        let mut calibrator = Calibrator::new(2);
        assert!(calibrator.push(RawSample::default()));
        assert!(calibrator.push(RawSample::default()));
        assert!(!calibrator.push(RawSample::new(9, 9, 9)));
        assert_eq!(calibrator.len(), 2);
    }

    #[test]
    fn test_degenerate_counts_do_not_panic() {
        let report = Calibrator::new(0).finish();
        assert!(report.degenerate);
        assert_eq!(report.samples, 0);
        assert_eq!(report.offset, CalibrationOffset::zero());
        assert!(report.offset.is_finite());

        let mut single = Calibrator::new(1);
        single.push(RawSample::new(7, 8, 9));
        let report = single.finish();
        assert!(report.degenerate);
        assert_eq!(report.x.stdev, 0.0);
        assert_eq!(report.offset.counts(), Vector3d::new(-7.0, -8.0, -9.0));
    }

    #[test]
    fn test_report_text() {
        let mut calibrator = Calibrator::new(2);
        calibrator.push(RawSample::new(1, 0, 0));
        calibrator.push(RawSample::new(3, 0, 0));
        let text = calibrator.finish().to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Mean:   2.000, 0.000, 0.000");
        assert_eq!(lines[3], "Stdev:  1.414, 0.000, 0.000");
        assert_eq!(lines[4], "Offsets: (-2.000, 0.000, 0.000)");
    }
}

//! # Calibration - static accelerometer bias estimation
//!
//! Samples taken while the sensor rests are summarised per axis (mean,
//! median, sample standard deviation). The negated median becomes the
//! offset added to every later raw reading.
//!
//! Statistics that are undefined for the collected sample count never fail
//! the calibration: they are reported as zero and the report is flagged
//! as degenerate.

mod calibrator;
mod error;
mod offset;
pub mod stats;

pub use calibrator::{CalibrationReport, Calibrator, CAL_MAX_SAMPLES};
pub use error::{StatsError, StatsResult};
pub use offset::CalibrationOffset;
pub use stats::AxisStats;

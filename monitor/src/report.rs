use core::fmt;

use calibration::CalibrationReport;
use driver::imu::{AccelRange, GyroRange};

use crate::sample::LiveSample;

/// Operator-facing event produced by the engine
#[derive(Clone, Copy)]
pub enum Report<'a> {
    /// About to clear the sleep bit
    Waking { address: u8 },
    /// About to write the range selectors
    Configuring { accel: AccelRange, gyro: GyroRange },
    CalibrationStarted { samples: usize },
    Calibrated(&'a CalibrationReport),
    SamplingStarted,
    Sample(&'a LiveSample),
    /// Terminal failure; nothing follows it
    Failed(&'a dyn fmt::Display),
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Waking { address } => write!(f, "Waking up MPU 6050 @{:#04x}", address),
            Report::Configuring { accel, gyro } => {
                write!(
                    f,
                    "Configuring: ACCEL={:08b} GYRO={:08b}",
                    accel.selector(),
                    gyro.selector()
                )
            }
            Report::CalibrationStarted { .. } => {
                write!(f, "Start collecting data for calibration..")
            }
            Report::Calibrated(report) => write!(f, "{}", report),
            Report::SamplingStarted => write!(f, "Reading data.."),
            Report::Sample(sample) => {
                writeln!(f, "=== === === ===")?;
                writeln!(
                    f,
                    "ACCEL({:.3}, {:.3}, {:.3})",
                    sample.accel_g.x, sample.accel_g.y, sample.accel_g.z
                )?;
                write!(f, "TEMP: {:.2} deg C", sample.temperature_c)
            }
            Report::Failed(error) => write!(f, "Exiting: {}", error),
        }
    }
}

/// Destination for engine reports
pub trait Sink {
    fn report(&mut self, report: &Report<'_>);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn report(&mut self, report: &Report<'_>) {
        (**self).report(report)
    }
}

/// Prints every report to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn report(&mut self, report: &Report<'_>) {
        println!("{}", report);
    }
}

use core::time::Duration;

use calibration::CAL_MAX_SAMPLES;
use driver::imu::{AccelRange, GyroRange};

/// Device ranges plus timing of the calibration pass and the live loop
#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    /// Accelerometer full-scale range written by `configure`
    pub accel_range: AccelRange,
    /// Gyroscope full-scale range written by `configure`
    pub gyro_range: GyroRange,
    /// Accelerometer samples collected for calibration
    pub calibration_samples: usize,
    /// Pause after each calibration sample
    pub calibration_interval: Duration,
    /// Pause after waking the device
    pub wake_settle: Duration,
    /// Pause after writing the range selectors
    pub configure_settle: Duration,
    /// Pause between calibration and the first live sample
    pub pre_sampling_delay: Duration,
    /// Pause between live samples
    pub live_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            accel_range: AccelRange::G2,
            gyro_range: GyroRange::Dps250,
            calibration_samples: CAL_MAX_SAMPLES,
            calibration_interval: Duration::from_millis(1),
            wake_settle: Duration::from_millis(100),
            configure_settle: Duration::from_millis(100),
            pre_sampling_delay: Duration::from_secs(5),
            live_interval: Duration::from_millis(500),
        }
    }
}

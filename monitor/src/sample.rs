use hal::{RawSample, Vector3d};

/// One corrected and converted live reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveSample {
    /// Accelerometer reading as decoded from the registers
    pub raw: RawSample,
    /// Raw reading plus calibration offset, still in sensor counts
    pub corrected: Vector3d,
    /// Corrected reading in g
    pub accel_g: Vector3d,
    /// Die temperature in degrees Celsius
    pub temperature_c: f64,
}

use core::time::Duration;

use clap::Parser;
use driver::imu::{AccelRange, GyroRange};
use monitor::MonitorConfig;

/// Calibrated MPU6050 accelerometer and temperature monitor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// I2C bus device
    #[arg(short, long, default_value = "/dev/i2c-1")]
    pub bus: String,

    /// Device address, decimal or 0x-prefixed hex
    #[arg(short, long, default_value = "0x68", value_parser = parse_address)]
    pub address: u8,

    /// Accelerometer full-scale range in g (2, 4, 8 or 16)
    #[arg(long, default_value = "2", value_parser = parse_accel_range)]
    pub accel_range: AccelRange,

    /// Gyroscope full-scale range in degrees/s (250, 500, 1000 or 2000)
    #[arg(long, default_value = "250", value_parser = parse_gyro_range)]
    pub gyro_range: GyroRange,

    /// Samples collected while calibrating
    #[arg(long, default_value_t = calibration::CAL_MAX_SAMPLES)]
    pub calibration_samples: usize,

    /// Milliseconds between live samples
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Stop after this many live samples instead of running forever
    #[arg(short, long)]
    pub samples: Option<u64>,
}

impl Args {
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            accel_range: self.accel_range,
            gyro_range: self.gyro_range,
            calibration_samples: self.calibration_samples,
            live_interval: Duration::from_millis(self.interval_ms),
            ..MonitorConfig::default()
        }
    }
}

fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    let addr = parsed.map_err(|e| format!("invalid address {:?}: {}", s, e))?;
    if addr > 0x7F {
        return Err(format!("address {:#04x} is outside the 7-bit range", addr));
    }
    Ok(addr)
}

fn parse_accel_range(s: &str) -> Result<AccelRange, String> {
    let g: u16 = s.parse().map_err(|e| format!("invalid range {:?}: {}", s, e))?;
    AccelRange::try_from(g).map_err(|g| format!("unsupported accelerometer range ±{}g", g))
}

fn parse_gyro_range(s: &str) -> Result<GyroRange, String> {
    let dps: u16 = s.parse().map_err(|e| format!("invalid range {:?}: {}", s, e))?;
    GyroRange::try_from(dps).map_err(|dps| format!("unsupported gyroscope range ±{}°/s", dps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arguments() {
        let args = Args::parse_from(["mpu6050-monitor"]);
        assert_eq!(args.address, 0x68);
        assert_eq!(args.accel_range, AccelRange::G2);
        assert_eq!(args.gyro_range, GyroRange::Dps250);
        assert_eq!(args.samples, None);

        let config = args.monitor_config();
        assert_eq!(config.accel_range, AccelRange::G2);
        assert_eq!(config.gyro_range, GyroRange::Dps250);
        assert_eq!(config.calibration_samples, 1024);
        assert_eq!(config.live_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x69"), Ok(0x69));
        assert_eq!(parse_address("104"), Ok(0x68));
        assert!(parse_address("0x80").is_err());
        assert!(parse_address("zz").is_err());
    }

    #[test]
    fn test_ranges_from_flags() {
        let args = Args::parse_from([
            "mpu6050-monitor",
            "--accel-range",
            "16",
            "--gyro-range",
            "2000",
            "-s",
            "10",
        ]);
        let config = args.monitor_config();
        assert_eq!(config.accel_range, AccelRange::G16);
        assert_eq!(config.gyro_range, GyroRange::Dps2000);
        assert_eq!(args.samples, Some(10));

        assert!(Args::try_parse_from(["mpu6050-monitor", "--accel-range", "3"]).is_err());
    }
}

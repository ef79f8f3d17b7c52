use anyhow::{Context, Result};
use driver::imu::Mpu6050;
use hal::HalBus;
use linux_embedded_hal::I2cdev;

/// MPU6050 behind a Linux i2c-dev character device
pub type LinuxImu = Mpu6050<HalBus<I2cdev>>;

pub fn open_imu(bus: &str, addr: u8) -> Result<LinuxImu> {
    let i2c = I2cdev::new(bus).with_context(|| format!("Failed to open I2C device: {}", bus))?;
    Ok(Mpu6050::new(HalBus::new(i2c), addr))
}

use core::fmt;

use hal::{I2cDevice, RawSample, Vector3d};
use log::debug;

use crate::imu::{to_signed16, RegisterPair, Registers};

// MPU6050 I2C address with AD0 pulled low
pub const MPU6050_I2C_ADDR_PRIMARY: u8 = 0x68;

// Register addresses
pub const MPU6050_REG_GYRO_CONFIG: u8 = 0x1B;
pub const MPU6050_REG_ACCEL_CONFIG: u8 = 0x1C;
pub const MPU6050_REG_PWR_MGMT_1: u8 = 0x6B;

// Measurement output pairs
pub const MPU6050_ACCEL_XOUT: RegisterPair = RegisterPair::new(0x3B, 0x3C);
pub const MPU6050_ACCEL_YOUT: RegisterPair = RegisterPair::new(0x3D, 0x3E);
pub const MPU6050_ACCEL_ZOUT: RegisterPair = RegisterPair::new(0x3F, 0x40);
pub const MPU6050_TEMP_OUT: RegisterPair = RegisterPair::new(0x41, 0x42);
pub const MPU6050_GYRO_XOUT: RegisterPair = RegisterPair::new(0x43, 0x44);
pub const MPU6050_GYRO_YOUT: RegisterPair = RegisterPair::new(0x45, 0x46);
pub const MPU6050_GYRO_ZOUT: RegisterPair = RegisterPair::new(0x47, 0x48);

// Clearing PWR_MGMT_1 drops the sleep bit and selects the internal oscillator
pub const MPU6050_WAKE: u8 = 0x00;

// Temperature sensor linear calibration (datasheet section 4.18)
pub const MPU6050_TEMP_SENSITIVITY: f64 = 340.0;
pub const MPU6050_TEMP_OFFSET_C: f64 = 36.53;

/// Accelerometer full-scale range (AFS_SEL)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccelRange {
    #[default]
    G2,
    G4,
    G8,
    G16,
}

impl AccelRange {
    pub const ALL: [AccelRange; 4] = [
        AccelRange::G2,
        AccelRange::G4,
        AccelRange::G8,
        AccelRange::G16,
    ];

    /// ACCEL_CONFIG byte selecting this range
    pub fn selector(self) -> u8 {
        match self {
            AccelRange::G2 => 0b0000_0000,
            AccelRange::G4 => 0b0000_1000,
            AccelRange::G8 => 0b0001_0000,
            AccelRange::G16 => 0b0001_1000,
        }
    }

    /// Sensitivity in LSB per g
    pub fn sensitivity(self) -> f64 {
        match self {
            AccelRange::G2 => 16384.0,
            AccelRange::G4 => 8192.0,
            AccelRange::G8 => 4096.0,
            AccelRange::G16 => 2048.0,
        }
    }

    pub fn full_scale_g(self) -> u16 {
        match self {
            AccelRange::G2 => 2,
            AccelRange::G4 => 4,
            AccelRange::G8 => 8,
            AccelRange::G16 => 16,
        }
    }
}

impl TryFrom<u16> for AccelRange {
    type Error = u16;

    /// Range from its span in g
    fn try_from(g: u16) -> Result<Self, Self::Error> {
        AccelRange::ALL.into_iter().find(|range| range.full_scale_g() == g).ok_or(g)
    }
}

impl fmt::Display for AccelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "±{}g", self.full_scale_g())
    }
}

/// Gyroscope full-scale range (FS_SEL)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GyroRange {
    #[default]
    Dps250,
    Dps500,
    Dps1000,
    Dps2000,
}

impl GyroRange {
    pub const ALL: [GyroRange; 4] = [
        GyroRange::Dps250,
        GyroRange::Dps500,
        GyroRange::Dps1000,
        GyroRange::Dps2000,
    ];

    /// GYRO_CONFIG byte selecting this range
    pub fn selector(self) -> u8 {
        match self {
            GyroRange::Dps250 => 0b0000_0000,
            GyroRange::Dps500 => 0b0000_1000,
            GyroRange::Dps1000 => 0b0001_0000,
            GyroRange::Dps2000 => 0b0001_1000,
        }
    }

    /// Sensitivity in LSB per degree/s
    pub fn sensitivity(self) -> f64 {
        match self {
            GyroRange::Dps250 => 131.0,
            GyroRange::Dps500 => 65.5,
            GyroRange::Dps1000 => 32.8,
            GyroRange::Dps2000 => 16.4,
        }
    }

    pub fn full_scale_dps(self) -> u16 {
        match self {
            GyroRange::Dps250 => 250,
            GyroRange::Dps500 => 500,
            GyroRange::Dps1000 => 1000,
            GyroRange::Dps2000 => 2000,
        }
    }
}

impl TryFrom<u16> for GyroRange {
    type Error = u16;

    /// Range from its span in degree/s
    fn try_from(dps: u16) -> Result<Self, Self::Error> {
        GyroRange::ALL.into_iter().find(|range| range.full_scale_dps() == dps).ok_or(dps)
    }
}

impl fmt::Display for GyroRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "±{}°/s", self.full_scale_dps())
    }
}

/// MPU6050 accelerometer/gyroscope driver
///
/// The ranges are only recorded once the device acknowledged the matching
/// register write, so `accel_range()` and `gyro_range()` always describe
/// what the hardware is using. Before `configure` they are `None`.
pub struct Mpu6050<I: I2cDevice> {
    regs: Registers<I>,
    accel_range: Option<AccelRange>,
    gyro_range: Option<GyroRange>,
}

impl<I: I2cDevice> Mpu6050<I> {
    /// Create a new MPU6050 driver with the specified I2C address
    pub fn new(i2c: I, addr: u8) -> Self {
        Self {
            regs: Registers::new(i2c, addr),
            accel_range: None,
            gyro_range: None,
        }
    }

    /// Create a new MPU6050 driver with the primary I2C address (0x68)
    pub fn new_primary(i2c: I) -> Self {
        Self::new(i2c, MPU6050_I2C_ADDR_PRIMARY)
    }

    pub fn address(&self) -> u8 {
        self.regs.address()
    }

    /// Clear the sleep bit; safe to repeat
    pub fn wake(&mut self) -> Result<(), I::Error> {
        debug!("waking MPU6050 at {:#04x}", self.address());
        self.regs.write_register(MPU6050_REG_PWR_MGMT_1, MPU6050_WAKE)
    }

    /// Write both full-scale range selectors, accelerometer first
    pub fn configure(
        &mut self,
        accel_range: AccelRange,
        gyro_range: GyroRange,
    ) -> Result<(), I::Error> {
        self.regs.write_register(MPU6050_REG_ACCEL_CONFIG, accel_range.selector())?;
        self.accel_range = Some(accel_range);
        debug!("accelerometer range set to {}", accel_range);

        self.regs.write_register(MPU6050_REG_GYRO_CONFIG, gyro_range.selector())?;
        self.gyro_range = Some(gyro_range);
        debug!("gyroscope range set to {}", gyro_range);

        Ok(())
    }

    pub fn accel_range(&self) -> Option<AccelRange> {
        self.accel_range
    }

    pub fn gyro_range(&self) -> Option<GyroRange> {
        self.gyro_range
    }

    /// LSB per g for the range currently active on the device
    pub fn accel_sensitivity(&self) -> Option<f64> {
        self.accel_range.map(AccelRange::sensitivity)
    }

    /// Raw accelerometer reading, x then y then z
    ///
    /// The three axes are separate transfers, so a sample may straddle an
    /// internal update of the device.
    pub fn read_acceleration(&mut self) -> Result<RawSample, I::Error> {
        self.read_triple([MPU6050_ACCEL_XOUT, MPU6050_ACCEL_YOUT, MPU6050_ACCEL_ZOUT])
    }

    /// Raw gyroscope reading, x then y then z
    pub fn read_angular_rate(&mut self) -> Result<RawSample, I::Error> {
        self.read_triple([MPU6050_GYRO_XOUT, MPU6050_GYRO_YOUT, MPU6050_GYRO_ZOUT])
    }

    /// Angular rate in degree/s, `None` while the gyroscope range is unknown
    pub fn read_angular_rate_dps(&mut self) -> Result<Option<Vector3d>, I::Error> {
        let Some(range) = self.gyro_range else {
            return Ok(None);
        };
        let raw = self.read_angular_rate()?;
        Ok(Some(raw.to_vector() / range.sensitivity()))
    }

    /// Die temperature in degrees Celsius
    pub fn read_temperature(&mut self) -> Result<f64, I::Error> {
        let word = self.regs.read_word(MPU6050_TEMP_OUT)?;
        Ok(temperature_celsius(to_signed16(word)))
    }

    fn read_triple(&mut self, pairs: [RegisterPair; 3]) -> Result<RawSample, I::Error> {
        let x = self.regs.read_signed(pairs[0])?;
        let y = self.regs.read_signed(pairs[1])?;
        let z = self.regs.read_signed(pairs[2])?;
        Ok(RawSample::new(x, y, z))
    }
}

/// Convert a signed TEMP_OUT reading to degrees Celsius
pub fn temperature_celsius(raw: i16) -> f64 {
    f64::from(raw) / MPU6050_TEMP_SENSITIVITY + MPU6050_TEMP_OFFSET_C
}

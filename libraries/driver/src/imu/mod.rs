// Register-level access shared by the IMU drivers
//
// Sensors in this family expose each 16-bit measurement as two 8-bit
// registers, most significant byte first. `Registers` owns the bus and the
// device address and composes those pairs into words.

use hal::I2cDevice;
use log::trace;

pub mod mpu6050;

pub use self::mpu6050::{AccelRange, GyroRange, Mpu6050};

/// High and low byte registers holding one 16-bit measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterPair {
    pub high: u8,
    pub low: u8,
}

impl RegisterPair {
    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    /// Pair whose low byte sits directly after the high byte
    ///
    /// The register address space wraps, so 0xFF pairs with 0x00.
    pub const fn contiguous(high: u8) -> Self {
        Self {
            high,
            low: high.wrapping_add(1),
        }
    }
}

/// Reinterpret a 16-bit pattern as two's-complement
pub fn to_signed16(word: u16) -> i16 {
    word as i16
}

/// Single device on an owned bus
pub struct Registers<I: I2cDevice> {
    /// I2C device for communication
    i2c: I,
    /// I2C address of the device
    addr: u8,
}

impl<I: I2cDevice> Registers<I> {
    pub fn new(i2c: I, addr: u8) -> Self {
        Self { i2c, addr }
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Read a register
    pub fn read_register(&mut self, reg: u8) -> Result<u8, I::Error> {
        self.i2c.read_reg(self.addr, reg)
    }

    /// Write to a register
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), I::Error> {
        self.i2c.write_reg(self.addr, reg, value)
    }

    /// Read both halves of a pair, high byte first, and join them
    pub fn read_word(&mut self, pair: RegisterPair) -> Result<u16, I::Error> {
        let high = self.read_register(pair.high)?;
        let low = self.read_register(pair.low)?;
        let word = u16::from_be_bytes([high, low]);
        trace!("read {:#04x}/{:#04x} -> {:#06x}", pair.high, pair.low, word);
        Ok(word)
    }

    pub fn read_signed(&mut self, pair: RegisterPair) -> Result<i16, I::Error> {
        self.read_word(pair).map(to_signed16)
    }
}

/// Two-wire bus transport interface
use core::fmt::Debug;

/// Common interface for I2C device operations
///
/// Implementors only provide the raw transfers; the single-register helpers
/// are built on top of them. Every call blocks until the transfer finished
/// or failed.
pub trait I2cDevice {
    /// Transport-level failure reported by the bus
    type Error: Debug;

    /// Write data to a device at the specified address
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write data to a device and then read from it (combined operation)
    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_data: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Read a single register from a device
    fn read_reg(&mut self, addr: u8, reg: u8) -> Result<u8, Self::Error> {
        let mut buffer = [0u8; 1];
        self.write_read(addr, &[reg], &mut buffer)?;
        Ok(buffer[0])
    }

    /// Write to a single register on a device
    fn write_reg(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.write(addr, &[reg, value])
    }
}

impl<T: I2cDevice + ?Sized> I2cDevice for &mut T {
    type Error = T::Error;

    fn write(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(addr, data)
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).write_read(addr, write_data, read_data)
    }
}

/// Adapter exposing any blocking `embedded-hal` I2C bus as an [`I2cDevice`]
pub struct HalBus<T> {
    i2c: T,
}

impl<T> HalBus<T> {
    pub fn new(i2c: T) -> Self {
        Self { i2c }
    }

    /// Give back the wrapped bus
    pub fn into_inner(self) -> T {
        self.i2c
    }
}

impl<T: embedded_hal::i2c::I2c> I2cDevice for HalBus<T> {
    type Error = T::Error;

    fn write(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(addr, data)
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(addr, write_data, read_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

    /// Records written bytes and answers every read with a fixed byte
    #[derive(Default)]
    struct FakeI2c {
        written: Vec<(u8, Vec<u8>)>,
        response: u8,
        fail: bool,
    }

    impl ErrorType for FakeI2c {
        type Error = ErrorKind;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.written.push((address, bytes.to_vec())),
                    Operation::Read(buffer) => buffer.fill(self.response),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_reg_sends_register_then_value() {
        let mut bus = HalBus::new(FakeI2c::default());
        bus.write_reg(0x68, 0x1C, 0x18).unwrap();

        let fake = bus.into_inner();
        assert_eq!(fake.written, vec![(0x68, vec![0x1C, 0x18])]);
    }

    #[test]
    fn test_read_reg_selects_register_before_reading() {
        let mut bus = HalBus::new(FakeI2c {
            response: 0x68,
            ..FakeI2c::default()
        });
        assert_eq!(bus.read_reg(0x68, 0x75), Ok(0x68), "WHO_AM_I answer should pass through");

        let fake = bus.into_inner();
        assert_eq!(fake.written, vec![(0x68, vec![0x75])]);
    }

    #[test]
    fn test_bus_error_passes_through_unchanged() {
        let mut bus = HalBus::new(FakeI2c {
            fail: true,
            ..FakeI2c::default()
        });
        assert_eq!(bus.write_reg(0x68, 0x6B, 0x00), Err(ErrorKind::Other));
        assert_eq!(bus.read_reg(0x68, 0x3B), Err(ErrorKind::Other));
    }
}

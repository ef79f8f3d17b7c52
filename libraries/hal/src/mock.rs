//! In-memory I2C bus for driver tests
//!
//! Clones share the same register file, so a test can keep a handle while
//! the driver owns the bus and change register contents between phases.

use core::fmt;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::bus::I2cDevice;

/// Failure injected by [`MockI2c::fail_after`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError {
    /// Zero-based index of the transaction that failed
    pub transaction: usize,
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I2C transaction {} was not acknowledged", self.transaction)
    }
}

impl std::error::Error for MockError {}

#[derive(Default)]
struct MockState {
    registers: HashMap<(u8, u8), u8>,
    writes: Vec<(u8, u8, u8)>,
    reads: Vec<(u8, u8)>,
    transactions: usize,
    fail_after: Option<usize>,
}

impl MockState {
    fn begin(&mut self) -> Result<(), MockError> {
        let index = self.transactions;
        self.transactions += 1;
        match self.fail_after {
            Some(limit) if index >= limit => Err(MockError { transaction: index }),
            _ => Ok(()),
        }
    }
}

/// Register-file backed bus; unset registers read as zero
#[derive(Clone, Default)]
pub struct MockI2c {
    state: Rc<RefCell<MockState>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_register(&self, addr: u8, reg: u8, value: u8) {
        self.state.borrow_mut().registers.insert((addr, reg), value);
    }

    /// Store a 16-bit value big-endian across two registers
    pub fn set_word(&self, addr: u8, high: u8, low: u8, value: u16) {
        let [msb, lsb] = value.to_be_bytes();
        self.set_register(addr, high, msb);
        self.set_register(addr, low, lsb);
    }

    pub fn register(&self, addr: u8, reg: u8) -> u8 {
        self.state.borrow().registers.get(&(addr, reg)).copied().unwrap_or(0)
    }

    /// Every register write as (device, register, value), oldest first
    pub fn writes(&self) -> Vec<(u8, u8, u8)> {
        self.state.borrow().writes.clone()
    }

    /// Start register of every read as (device, register), oldest first
    pub fn reads(&self) -> Vec<(u8, u8)> {
        self.state.borrow().reads.clone()
    }

    /// Number of transfers attempted so far, failed ones included
    pub fn transactions(&self) -> usize {
        self.state.borrow().transactions
    }

    /// Let the next `count` transfers succeed and fail every one after that
    pub fn fail_after(&self, count: usize) {
        let mut state = self.state.borrow_mut();
        let limit = state.transactions + count;
        state.fail_after = Some(limit);
    }

    pub fn clear_failure(&self) {
        self.state.borrow_mut().fail_after = None;
    }
}

impl I2cDevice for MockI2c {
    type Error = MockError;

    fn write(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.begin()?;
        if let Some((&reg, values)) = data.split_first() {
            for (offset, &value) in values.iter().enumerate() {
                let target = reg.wrapping_add(offset as u8);
                state.registers.insert((addr, target), value);
                state.writes.push((addr, target, value));
            }
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.begin()?;
        let reg = write_data.first().copied().unwrap_or(0);
        state.reads.push((addr, reg));
        for (offset, slot) in read_data.iter_mut().enumerate() {
            let source = reg.wrapping_add(offset as u8);
            *slot = state.registers.get(&(addr, source)).copied().unwrap_or(0);
        }
        Ok(())
    }
}

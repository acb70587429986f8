//! Register transport.
//!
//! The driver only ever needs "read N bytes starting at a register" and
//! "write one byte to a register". [`I2cInterface`] provides both on top of
//! the `embedded-hal` blocking I2C traits; tests and other transports can
//! implement [`Bus`] directly.

use hal::blocking::i2c::{Write, WriteRead};

use crate::mag::{self, Register};

/// Byte-oriented register access
pub trait Bus {
    /// Transport error
    type Error;

    /// Reads `buffer.len()` consecutive registers starting at `reg`.
    fn read_registers(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes a single register.
    fn write_register(&mut self, reg: Register, byte: u8) -> Result<(), Self::Error>;
}

/// [`Bus`] over a blocking I2C peripheral
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wraps `i2c`, talking to the device at [`ADDRESS`](crate::ADDRESS).
    pub fn new(i2c: I2C) -> Self {
        I2cInterface { i2c,
                       address: mag::ADDRESS }
    }

    /// Returns the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Bus for I2cInterface<I2C> where I2C: WriteRead<Error = E> + Write<Error = E>
{
    type Error = E;

    fn read_registers(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), E> {
        // sub-address MSB enables auto increment
        const MULTI: u8 = 1 << 7;
        let sub = if buffer.len() > 1 {
            reg.addr() | MULTI
        } else {
            reg.addr()
        };

        self.i2c.write_read(self.address, &[sub], buffer)
    }

    fn write_register(&mut self, reg: Register, byte: u8) -> Result<(), E> {
        self.i2c.write(self.address, &[reg.addr(), byte])
    }
}

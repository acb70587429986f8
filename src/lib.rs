//! A platform agnostic driver to interface with the LIS3MDL (3-axis
//! magnetometer)
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! Every operation goes straight to the device: nothing is cached, so the
//! registers are always the source of truth. Setters only touch the bits
//! they own and preserve the rest of the register.
//!
//! The driver needs exclusive access to the device. Read-modify-write
//! sequences are not atomic, so callers sharing one sensor between contexts
//! must serialize access themselves.
//!
//! # Example
//!
//! ```ignore
//! use lis3mdl::{Axis, DataRate, Lis3mdl, Magnetometer};
//!
//! let mut lis3mdl = Lis3mdl::new(i2c);
//! lis3mdl.set_data_rate(DataRate::_155_Hz)?;
//! let x = lis3mdl.read_axis(Axis::X)?;
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal

#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

extern crate cast;
extern crate embedded_hal as hal;
extern crate generic_array;
extern crate nalgebra;

mod bits;
pub mod bus;
mod conf;
pub mod error;
mod mag;

use core::convert::TryFrom;

use cast::{f32, u16};
use generic_array::typenum::consts::*;
use generic_array::{ArrayLength, GenericArray};

pub use nalgebra::Vector3;

use hal::blocking::i2c::{Write, WriteRead};

pub use crate::bus::{Bus, I2cInterface};
pub use crate::conf::{Axis, DataRate, FullScale, OperativeMode};
pub use crate::error::{Error, InvalidArgument, InvalidRegisterField, Status};
pub use crate::mag::{Register, ADDRESS, WHO_AM_I_VALUE};

use crate::conf::{InterruptControl, RegisterBits};

const TEMP_SENSITIVITY: f32 = 8.0;
const TEMP_ZERO_OFFSET: f32 = 25.0;

/// Device independent view of a magnetometer.
///
/// Callers written against this trait never see the register layout, and
/// tests can swap the transport underneath.
pub trait Magnetometer {
    /// Transport error
    type BusError;

    /// Currently configured full scale
    fn full_scale(&mut self) -> Result<FullScale, Error<Self::BusError>>;

    /// Sets the output data rate, preserving unrelated configuration bits
    fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<Self::BusError>>;

    /// Currently configured output data rate
    fn data_rate(&mut self) -> Result<DataRate, Error<Self::BusError>>;

    /// Enables or disables the global interrupt
    fn set_interrupt_enable(&mut self, enable: bool) -> Result<(), Error<Self::BusError>>;

    /// Raw two's complement sample of one axis
    fn read_axis(&mut self, axis: Axis) -> Result<i16, Error<Self::BusError>>;

    /// Like [`set_data_rate`](Magnetometer::set_data_rate), from an ordinal
    /// code (0 = 0.625 Hz ... 11 = 1000 Hz).
    ///
    /// Invalid codes fail before any bus access.
    fn set_data_rate_code(&mut self, code: u8) -> Result<(), Error<Self::BusError>> {
        self.set_data_rate(DataRate::try_from(code)?)
    }

    /// Like [`set_interrupt_enable`](Magnetometer::set_interrupt_enable);
    /// only 0 and 1 are accepted.
    fn set_interrupt_enable_flag(&mut self, flag: u8) -> Result<(), Error<Self::BusError>> {
        self.set_interrupt_enable(conf::flag(flag)?)
    }

    /// Like [`read_axis`](Magnetometer::read_axis), from an axis code
    /// (0 = X, 1 = Y, 2 = Z).
    fn read_axis_code(&mut self, code: u8) -> Result<i16, Error<Self::BusError>> {
        self.read_axis(Axis::try_from(code)?)
    }
}

/// LIS3MDL driver
pub struct Lis3mdl<BUS> {
    bus: BUS,
}

impl<I2C, E> Lis3mdl<I2cInterface<I2C>> where I2C: WriteRead<Error = E> + Write<Error = E>
{
    /// Creates a new driver from a I2C peripheral
    ///
    /// Does not touch the device.
    pub fn new(i2c: I2C) -> Self {
        Lis3mdl::with_bus(I2cInterface::new(i2c))
    }
}

impl<BUS> Lis3mdl<BUS> where BUS: Bus
{
    /// Creates a new driver on top of any register transport
    pub fn with_bus(bus: BUS) -> Self {
        Lis3mdl { bus }
    }

    /// Destroys the driver, returning the transport
    pub fn release(self) -> BUS {
        self.bus
    }

    /// Device identification, [`WHO_AM_I_VALUE`] for a LIS3MDL
    pub fn who_am_i(&mut self) -> Result<u8, Error<BUS::Error>> {
        self.read_register(Register::WHO_AM_I)
    }

    /// Sets the full scale
    pub fn set_full_scale(&mut self, scale: FullScale) -> Result<(), Error<BUS::Error>> {
        self.write_register_with_mask(Register::CTRL_REG2, scale)
    }

    /// Whether the global interrupt is enabled
    pub fn interrupt_enabled(&mut self) -> Result<bool, Error<BUS::Error>> {
        let r = self.read_register(Register::INT_CFG)?;
        Ok(mag::IEN.get(r) == 1)
    }

    /// Magnetometer measurements, all three axes in one transaction
    pub fn mag(&mut self) -> Result<Vector3<i16>, Error<BUS::Error>> {
        let buffer: GenericArray<u8, U6> = self.read_registers(Register::OUT_X_L)?;

        Ok(Vector3::new(sample(buffer[0], buffer[1]),
                        sample(buffer[2], buffer[3]),
                        sample(buffer[4], buffer[5])))
    }

    /// Magnetometer measurements in gauss
    ///
    /// Reads the full scale first, so it costs two transactions.
    pub fn mag_gauss(&mut self) -> Result<Vector3<f32>, Error<BUS::Error>> {
        let sensitivity = self.full_scale()?.sensitivity();
        let m = self.mag()?;

        Ok(Vector3::new(f32(m.x) / sensitivity,
                        f32(m.y) / sensitivity,
                        f32(m.z) / sensitivity))
    }

    /// Temperature sensor measurement in Celcius
    ///
    /// The sensor must be enabled in `CTRL_REG1` for this to change.
    pub fn temp(&mut self) -> Result<f32, Error<BUS::Error>> {
        let rt = self.raw_temp()?;
        Ok(f32(rt) / TEMP_SENSITIVITY + TEMP_ZERO_OFFSET)
    }

    /// Raw temperature sensor measurement
    ///
    /// - Resolution: 8 LSB/C, 0 at 25 C
    pub fn raw_temp(&mut self) -> Result<i16, Error<BUS::Error>> {
        let buffer = self.read_registers::<U2>(Register::TEMP_OUT_L)?;
        Ok(sample(buffer[0], buffer[1]))
    }

    fn write_register_with_mask<RB>(&mut self,
                                    reg: Register,
                                    v: RB)
                                    -> Result<(), Error<BUS::Error>>
        where RB: RegisterBits
    {
        self.modify_register(reg, |r| bits::modify(r, v.mask(), v.value()))
    }

    fn modify_register<F>(&mut self,
                          reg: Register,
                          f: F)
                          -> Result<(), Error<BUS::Error>>
        where F: FnOnce(u8) -> u8
    {
        let r = self.read_register(reg)?;
        self.write_register(reg, f(r))?;
        Ok(())
    }

    fn read_register(&mut self, reg: Register) -> Result<u8, Error<BUS::Error>> {
        let buffer: GenericArray<u8, U1> = self.read_registers(reg)?;
        Ok(buffer[0])
    }

    fn read_registers<N>(&mut self,
                         reg: Register)
                         -> Result<GenericArray<u8, N>, Error<BUS::Error>>
        where N: ArrayLength<u8>
    {
        let mut buffer: GenericArray<u8, N> = GenericArray::default();
        self.bus
            .read_registers(reg, &mut buffer)
            .map_err(Error::Bus)?;

        Ok(buffer)
    }

    fn write_register(&mut self,
                      reg: Register,
                      byte: u8)
                      -> Result<(), Error<BUS::Error>> {
        #[cfg(feature = "defmt-03")]
        defmt::trace!("LIS3MDL 0x{:02x} <- 0x{:02x}", reg.addr(), byte);

        self.bus.write_register(reg, byte).map_err(Error::Bus)
    }
}

impl<BUS> Magnetometer for Lis3mdl<BUS> where BUS: Bus
{
    type BusError = BUS::Error;

    fn full_scale(&mut self) -> Result<FullScale, Error<BUS::Error>> {
        let r = self.read_register(Register::CTRL_REG2)?;
        FullScale::decode(r).map_err(unexpected)
    }

    fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<BUS::Error>> {
        self.write_register_with_mask(Register::CTRL_REG1, rate)
    }

    fn data_rate(&mut self) -> Result<DataRate, Error<BUS::Error>> {
        let r = self.read_register(Register::CTRL_REG1)?;
        DataRate::decode(r).map_err(unexpected)
    }

    fn set_interrupt_enable(&mut self, enable: bool) -> Result<(), Error<BUS::Error>> {
        self.write_register_with_mask(Register::INT_CFG, InterruptControl::from(enable))
    }

    fn read_axis(&mut self, axis: Axis) -> Result<i16, Error<BUS::Error>> {
        let buffer = self.read_registers::<U2>(axis.low_register())?;
        Ok(sample(buffer[0], buffer[1]))
    }
}

/// Low byte comes first on the wire
fn sample(low: u8, high: u8) -> i16 {
    ((u16(high) << 8) | u16(low)) as i16
}

fn unexpected<E>(field: InvalidRegisterField) -> Error<E> {
    #[cfg(feature = "defmt-03")]
    defmt::debug!("LIS3MDL unexpected 0x{:02x} in register 0x{:02x}",
                  field.value,
                  field.register);

    Error::UnexpectedRegisterData(field)
}

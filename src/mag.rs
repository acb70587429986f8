use crate::bits::Field;

/// I2C address of the device (SDO/SA1 tied low)
pub const ADDRESS: u8 = 0x1C;

/// Expected `WHO_AM_I` content
pub const WHO_AM_I_VALUE: u8 = 0x3D;

/// Register map
#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Device identification
    WHO_AM_I = 0x0F,
    /// Temperature enable, XY operative mode, data rate, fast ODR, self test
    CTRL_REG1 = 0x20,
    /// Full scale, reboot, soft reset
    CTRL_REG2 = 0x21,
    /// Low power, SPI mode, system operating mode
    CTRL_REG3 = 0x22,
    /// Z operative mode, endianness
    CTRL_REG4 = 0x23,
    /// Fast read, block data update
    CTRL_REG5 = 0x24,
    /// Data status
    STATUS_REG = 0x27,
    /// X axis, low byte
    OUT_X_L = 0x28,
    /// X axis, high byte
    OUT_X_H = 0x29,
    /// Y axis, low byte
    OUT_Y_L = 0x2A,
    /// Y axis, high byte
    OUT_Y_H = 0x2B,
    /// Z axis, low byte
    OUT_Z_L = 0x2C,
    /// Z axis, high byte
    OUT_Z_H = 0x2D,
    /// Temperature, low byte
    TEMP_OUT_L = 0x2E,
    /// Temperature, high byte
    TEMP_OUT_H = 0x2F,
    /// Interrupt configuration
    INT_CFG = 0x30,
    /// Interrupt source
    INT_SRC = 0x31,
    /// Interrupt threshold, low byte
    INT_THS_L = 0x32,
    /// Interrupt threshold, high byte
    INT_THS_H = 0x33,
}

impl Register {
    /// Register address
    pub fn addr(&self) -> u8 {
        *self as u8
    }
}

// CTRL_REG1
pub(crate) const FAST_ODR: Field = Field::new(0x02, 1);
pub(crate) const DO: Field = Field::new(0x1C, 2);
pub(crate) const OM: Field = Field::new(0x60, 5);

// CTRL_REG2
pub(crate) const FS: Field = Field::new(0x60, 5);

// INT_CFG
pub(crate) const IEN: Field = Field::new(0x01, 0);

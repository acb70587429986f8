use core::convert::TryFrom;

use crate::error::{InvalidArgument, InvalidRegisterField};
use crate::mag::{Register, DO, FAST_ODR, FS, IEN, OM};

/// Value that occupies a group of bits in one register.
pub(crate) trait RegisterBits {
    /// Bits owned by this value; everything else is preserved on write.
    fn mask(&self) -> u8;
    /// Register bits, already in position.
    fn value(&self) -> u8;
}

/// Magnetometer full scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum FullScale {
    /// +/- 4 gauss
    _4_Ga = 0,
    /// +/- 8 gauss
    _8_Ga = 1,
    /// +/- 12 gauss
    _12_Ga = 2,
    /// +/- 16 gauss
    _16_Ga = 3,
}

impl Default for FullScale {
    fn default() -> Self {
        FullScale::_4_Ga
    }
}

impl FullScale {
    /// Ordinal code, 0..=3
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// LSB per gauss
    pub fn sensitivity(&self) -> f32 {
        match self {
            FullScale::_4_Ga => 6842.0,
            FullScale::_8_Ga => 3421.0,
            FullScale::_12_Ga => 2281.0,
            FullScale::_16_Ga => 1711.0,
        }
    }

    pub(crate) fn decode(reg: u8) -> Result<Self, InvalidRegisterField> {
        let code = FS.get(reg);
        FullScale::try_from(code).map_err(|_| InvalidRegisterField {
            register: Register::CTRL_REG2.addr(),
            value: code,
        })
    }
}

impl TryFrom<u8> for FullScale {
    type Error = InvalidArgument;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FullScale::_4_Ga),
            1 => Ok(FullScale::_8_Ga),
            2 => Ok(FullScale::_12_Ga),
            3 => Ok(FullScale::_16_Ga),
            _ => Err(InvalidArgument),
        }
    }
}

impl RegisterBits for FullScale {
    fn mask(&self) -> u8 {
        FS.mask()
    }

    fn value(&self) -> u8 {
        FS.set(self.code())
    }
}

/// X and Y axes operative mode.
///
/// Only selects the data rate while fast ODR is enabled, see
/// [`DataRate::operative_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum OperativeMode {
    /// Low power
    LowPower = 0,
    /// Medium performance
    MediumPerformance = 1,
    /// High performance
    HighPerformance = 2,
    /// Ultra high performance
    UltraHighPerformance = 3,
}

impl TryFrom<u8> for OperativeMode {
    type Error = InvalidArgument;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OperativeMode::LowPower),
            1 => Ok(OperativeMode::MediumPerformance),
            2 => Ok(OperativeMode::HighPerformance),
            3 => Ok(OperativeMode::UltraHighPerformance),
            _ => Err(InvalidArgument),
        }
    }
}

/// Magnetometer output data rate
///
/// Rates up to 80 Hz are selected by the `DO` field of `CTRL_REG1`. Faster
/// rates set `FAST_ODR` and are then chosen by the operative mode, in
/// reverse order: the lower the power, the higher the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum DataRate {
    /// 0.625 Hz
    _0_625_Hz = 0,
    /// 1.25 Hz
    _1_25_Hz = 1,
    /// 2.5 Hz
    _2_5_Hz = 2,
    /// 5 Hz
    _5_Hz = 3,
    /// 10 Hz
    _10_Hz = 4,
    /// 20 Hz
    _20_Hz = 5,
    /// 40 Hz
    _40_Hz = 6,
    /// 80 Hz
    _80_Hz = 7,
    /// 155 Hz
    _155_Hz = 8,
    /// 300 Hz
    _300_Hz = 9,
    /// 560 Hz
    _560_Hz = 10,
    /// 1000 Hz
    _1000_Hz = 11,
}

impl Default for DataRate {
    fn default() -> Self {
        DataRate::_10_Hz
    }
}

impl DataRate {
    /// Ordinal code, 0..=11
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Nominal rate in Hz
    pub fn hz(&self) -> f32 {
        match self {
            DataRate::_0_625_Hz => 0.625,
            DataRate::_1_25_Hz => 1.25,
            DataRate::_2_5_Hz => 2.5,
            DataRate::_5_Hz => 5.0,
            DataRate::_10_Hz => 10.0,
            DataRate::_20_Hz => 20.0,
            DataRate::_40_Hz => 40.0,
            DataRate::_80_Hz => 80.0,
            DataRate::_155_Hz => 155.0,
            DataRate::_300_Hz => 300.0,
            DataRate::_560_Hz => 560.0,
            DataRate::_1000_Hz => 1000.0,
        }
    }

    /// Whether this rate needs `FAST_ODR`
    pub fn is_fast(&self) -> bool {
        self.operative_mode().is_some()
    }

    /// Operative mode that selects this rate under `FAST_ODR`, `None` for the
    /// linear rates.
    pub fn operative_mode(&self) -> Option<OperativeMode> {
        match self {
            DataRate::_155_Hz => Some(OperativeMode::UltraHighPerformance),
            DataRate::_300_Hz => Some(OperativeMode::HighPerformance),
            DataRate::_560_Hz => Some(OperativeMode::MediumPerformance),
            DataRate::_1000_Hz => Some(OperativeMode::LowPower),
            _ => None,
        }
    }

    /// Rate produced by `mode` when `FAST_ODR` is set.
    pub fn from_operative_mode(mode: OperativeMode) -> Self {
        match mode {
            OperativeMode::UltraHighPerformance => DataRate::_155_Hz,
            OperativeMode::HighPerformance => DataRate::_300_Hz,
            OperativeMode::MediumPerformance => DataRate::_560_Hz,
            OperativeMode::LowPower => DataRate::_1000_Hz,
        }
    }

    pub(crate) fn decode(reg: u8) -> Result<Self, InvalidRegisterField> {
        if FAST_ODR.get(reg) == 0 {
            let code = DO.get(reg);
            return DataRate::try_from(code).map_err(|_| InvalidRegisterField {
                register: Register::CTRL_REG1.addr(),
                value: code,
            });
        }

        let om = OM.get(reg);
        OperativeMode::try_from(om)
            .map(DataRate::from_operative_mode)
            .map_err(|_| InvalidRegisterField {
                register: Register::CTRL_REG1.addr(),
                value: om,
            })
    }
}

impl TryFrom<u8> for DataRate {
    type Error = InvalidArgument;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DataRate::_0_625_Hz),
            1 => Ok(DataRate::_1_25_Hz),
            2 => Ok(DataRate::_2_5_Hz),
            3 => Ok(DataRate::_5_Hz),
            4 => Ok(DataRate::_10_Hz),
            5 => Ok(DataRate::_20_Hz),
            6 => Ok(DataRate::_40_Hz),
            7 => Ok(DataRate::_80_Hz),
            8 => Ok(DataRate::_155_Hz),
            9 => Ok(DataRate::_300_Hz),
            10 => Ok(DataRate::_560_Hz),
            11 => Ok(DataRate::_1000_Hz),
            _ => Err(InvalidArgument),
        }
    }
}

impl RegisterBits for DataRate {
    // linear rates leave the operative mode alone, fast rates leave DO alone
    fn mask(&self) -> u8 {
        if self.is_fast() {
            FAST_ODR.mask() | OM.mask()
        } else {
            FAST_ODR.mask() | DO.mask()
        }
    }

    fn value(&self) -> u8 {
        match self.operative_mode() {
            Some(mode) => FAST_ODR.set(1) | OM.set(mode as u8),
            None => DO.set(self.code()),
        }
    }
}

/// Global interrupt enable (`IEN`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InterruptControl {
    Enable = 1,
    Disable = 0,
}

impl From<bool> for InterruptControl {
    fn from(enable: bool) -> Self {
        if enable {
            InterruptControl::Enable
        } else {
            InterruptControl::Disable
        }
    }
}

impl RegisterBits for InterruptControl {
    fn mask(&self) -> u8 {
        IEN.mask()
    }

    fn value(&self) -> u8 {
        IEN.set(*self as u8)
    }
}

/// Measurement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Axis {
    /// X axis
    X = 0,
    /// Y axis
    Y = 1,
    /// Z axis
    Z = 2,
}

impl Axis {
    /// Low byte register; the high byte follows at the next address.
    pub fn low_register(&self) -> Register {
        match self {
            Axis::X => Register::OUT_X_L,
            Axis::Y => Register::OUT_Y_L,
            Axis::Z => Register::OUT_Z_L,
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = InvalidArgument;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(InvalidArgument),
        }
    }
}

/// Parses a boolean flag that must be exactly 0 or 1.
pub(crate) fn flag(value: u8) -> Result<bool, InvalidArgument> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(InvalidArgument),
    }
}

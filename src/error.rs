//! Errors returned by the driver.
//!
//! Every failure is one of two kinds: the transport failed ([`Error::Bus`]),
//! or the device/caller produced a value outside its legal domain. Nothing is
//! retried internally.

/// All possible errors, generic over the transport error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying I2C (or other) bus reported a failure.
    Bus(E),

    /// A code, selector or flag passed by the caller is out of range.
    InvalidArgument,

    /// A register held a value the driver cannot decode.
    ///
    /// Should not happen with a healthy device; may indicate garbage on the
    /// bus.
    UnexpectedRegisterData(InvalidRegisterField),
}

impl<E> Error<E> {
    /// Classifies the error into the device/bus taxonomy.
    pub fn status(&self) -> Status {
        match self {
            Error::Bus(_) => Status::BusError,
            Error::InvalidArgument | Error::UnexpectedRegisterData(_) => Status::DeviceError,
        }
    }
}

impl<E> From<InvalidArgument> for Error<E> {
    fn from(_: InvalidArgument) -> Self {
        Error::InvalidArgument
    }
}

/// Outcome of an operation, collapsed to three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Status {
    /// Completed successfully
    Ok,
    /// Invalid argument or undecodable register content
    DeviceError,
    /// Transport failure
    BusError,
}

impl Status {
    /// Status of a finished operation.
    pub fn of<T, E>(result: &Result<T, Error<E>>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

/// Returned when a raw code does not map to any variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InvalidArgument;

/// Register and raw value that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InvalidRegisterField {
    /// Register address
    pub register: u8,
    /// Extracted field value
    pub value: u8,
}

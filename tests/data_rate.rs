mod common;

use std::convert::TryFrom;

use common::{create_driver, FakeError};
use lis3mdl::{DataRate, Error, Magnetometer, Register, Status};

const CTRL_REG1: u8 = 0x20;

#[test]
fn every_rate_round_trips() {
    let (mut lis3mdl, _device) = create_driver();

    for code in 0..12u8 {
        let rate = DataRate::try_from(code).unwrap();
        lis3mdl.set_data_rate(rate).unwrap();
        assert_eq!(lis3mdl.data_rate().unwrap(), rate, "code {}", code);
        assert_eq!(lis3mdl.data_rate().unwrap().code(), code);
    }
}

#[test]
fn every_rate_round_trips_in_reverse_order() {
    let (mut lis3mdl, _device) = create_driver();

    for code in (0..12u8).rev() {
        lis3mdl.set_data_rate_code(code).unwrap();
        assert_eq!(lis3mdl.data_rate().unwrap().code(), code);
    }
}

#[test]
fn fastest_rate_from_zeroed_register() {
    let (mut lis3mdl, device) = create_driver();
    assert_eq!(Register::CTRL_REG1.addr(), CTRL_REG1);

    lis3mdl.set_data_rate(DataRate::_1000_Hz).unwrap();

    assert_eq!(device.written(), vec![(CTRL_REG1, 0x02)]);
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_1000_Hz);
}

#[test]
fn boundary_between_linear_and_fast() {
    let (mut lis3mdl, device) = create_driver();

    lis3mdl.set_data_rate(DataRate::_80_Hz).unwrap();
    assert_eq!(device.get(CTRL_REG1), 0x1C);
    assert_eq!(device.get(CTRL_REG1) & 0x02, 0);
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_80_Hz);

    lis3mdl.set_data_rate(DataRate::_155_Hz).unwrap();
    // OM = 3 and FAST_ODR, DO keeps its last value
    assert_eq!(device.get(CTRL_REG1), 0x7E);
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_155_Hz);

    lis3mdl.set_data_rate(DataRate::_80_Hz).unwrap();
    assert_eq!(device.get(CTRL_REG1) & 0x02, 0);
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_80_Hz);
}

#[test]
fn unrelated_bits_survive() {
    let (mut lis3mdl, device) = create_driver();
    // TEMP_EN and ST
    device.set(CTRL_REG1, 0x81);

    lis3mdl.set_data_rate(DataRate::_20_Hz).unwrap();
    assert_eq!(device.get(CTRL_REG1), 0x81 | 0x14);

    lis3mdl.set_data_rate(DataRate::_300_Hz).unwrap();
    assert_eq!(device.get(CTRL_REG1) & 0x81, 0x81);
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_300_Hz);
}

#[test]
fn linear_rate_keeps_operative_mode() {
    let (mut lis3mdl, device) = create_driver();
    // ultra high performance, 10 Hz
    device.set(CTRL_REG1, 0x70);

    lis3mdl.set_data_rate(DataRate::_5_Hz).unwrap();

    assert_eq!(device.get(CTRL_REG1), 0x6C);
}

#[test]
fn invalid_code_never_touches_the_bus() {
    let (mut lis3mdl, device) = create_driver();

    let result = lis3mdl.set_data_rate_code(12);

    assert_eq!(result, Err(Error::InvalidArgument));
    assert_eq!(Status::of(&result), Status::DeviceError);
    assert_eq!(device.transactions(), 0);

    assert_eq!(lis3mdl.set_data_rate_code(0xFF), Err(Error::InvalidArgument));
    assert_eq!(device.transactions(), 0);
}

#[test]
fn read_failure_aborts_before_write() {
    let (mut lis3mdl, device) = create_driver();
    device.fail_next_read();

    let result = lis3mdl.set_data_rate(DataRate::_40_Hz);

    assert_eq!(result, Err(Error::Bus(FakeError)));
    assert_eq!(Status::of(&result), Status::BusError);
    assert_eq!(device.writes(), 0);
}

#[test]
fn write_failure_is_reported() {
    let (mut lis3mdl, device) = create_driver();
    device.set(CTRL_REG1, 0x10);
    device.fail_next_write();

    assert_eq!(lis3mdl.set_data_rate(DataRate::_40_Hz),
               Err(Error::Bus(FakeError)));
    assert_eq!(device.get(CTRL_REG1), 0x10);

    // the failure is not sticky
    lis3mdl.set_data_rate(DataRate::_40_Hz).unwrap();
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_40_Hz);
}

#[test]
fn get_reports_bus_error() {
    let (mut lis3mdl, device) = create_driver();
    device.fail_next_read();

    assert_eq!(lis3mdl.data_rate(), Err(Error::Bus(FakeError)));
}

#[test]
fn get_decodes_preset_registers() {
    let (mut lis3mdl, device) = create_driver();

    device.set(CTRL_REG1, 0x22);
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_560_Hz);

    device.set(CTRL_REG1, 0x42);
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_300_Hz);

    device.set(CTRL_REG1, 0x60);
    assert_eq!(lis3mdl.data_rate().unwrap(), DataRate::_0_625_Hz);
}

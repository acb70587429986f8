//! Register file fake shared by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use lis3mdl::{Bus, Lis3mdl, Register};

/// Error produced by [`FakeBus`] when a failure was injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

#[derive(Debug)]
struct State {
    regs: [u8; 256],
    reads: usize,
    writes: usize,
    fail_next_read: bool,
    fail_next_write: bool,
    written: Vec<(u8, u8)>,
}

/// A device model that echoes writes back on read.
///
/// Clones share state, so a test can keep one handle while the driver owns
/// another.
#[derive(Debug, Clone)]
pub struct FakeBus {
    state: Rc<RefCell<State>>,
}

impl FakeBus {
    pub fn new() -> Self {
        FakeBus { state: Rc::new(RefCell::new(State { regs: [0; 256],
                                                      reads: 0,
                                                      writes: 0,
                                                      fail_next_read: false,
                                                      fail_next_write: false,
                                                      written: Vec::new() })) }
    }

    pub fn set(&self, reg: u8, value: u8) {
        self.state.borrow_mut().regs[reg as usize] = value;
    }

    pub fn get(&self, reg: u8) -> u8 {
        self.state.borrow().regs[reg as usize]
    }

    pub fn reads(&self) -> usize {
        self.state.borrow().reads
    }

    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    /// All bus transactions attempted so far, failed ones included
    pub fn transactions(&self) -> usize {
        self.reads() + self.writes()
    }

    /// Every `(register, value)` written, in order
    pub fn written(&self) -> Vec<(u8, u8)> {
        self.state.borrow().written.clone()
    }

    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }
}

impl Bus for FakeBus {
    type Error = FakeError;

    fn read_registers(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), FakeError> {
        let mut state = self.state.borrow_mut();
        state.reads += 1;
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(FakeError);
        }

        let start = reg.addr() as usize;
        buffer.copy_from_slice(&state.regs[start..start + buffer.len()]);
        Ok(())
    }

    fn write_register(&mut self, reg: Register, byte: u8) -> Result<(), FakeError> {
        let mut state = self.state.borrow_mut();
        state.writes += 1;
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(FakeError);
        }

        state.regs[reg.addr() as usize] = byte;
        state.written.push((reg.addr(), byte));
        Ok(())
    }
}

/// Returns a driver and a handle to the device it talks to
pub fn create_driver() -> (Lis3mdl<FakeBus>, FakeBus) {
    let bus = FakeBus::new();
    let handle = bus.clone();
    (Lis3mdl::with_bus(bus), handle)
}

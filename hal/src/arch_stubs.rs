//! # Stub Hardware Access
//!
//! No-op implementations so the workspace compiles on targets without x86
//! port I/O. Writes are discarded and reads return zero; `halt_loop` spins.

use crate::port::PortBus;

/// Stub port-space handle for unsupported targets.
#[derive(Debug)]
pub struct IoPorts {
    _private: (),
}

impl IoPorts {
    /// Claim the (nonexistent) port space.
    ///
    /// # Safety
    /// Trivially safe on stub targets; the signature matches the real
    /// implementation so callers are portable.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl PortBus for IoPorts {
    fn write(&mut self, _port: u16, _value: u8) {}

    fn read(&mut self, _port: u16) -> u8 {
        0
    }
}

/// Spin forever; stub for targets without a halt instruction binding.
pub fn halt_loop() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

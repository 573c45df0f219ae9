//! # x86_64 Hardware Access
//!
//! Raw port I/O instructions and the CPU halt loop.

use core::arch::asm;

use crate::port::PortBus;

/// Write to an I/O port.
///
/// # Safety
/// Writing to invalid ports can cause undefined behavior.
#[inline]
pub unsafe fn outb(port: u16, value: u8) {
    unsafe {
        asm!("out dx, al", in("dx") port, in("al") value, options(nomem, nostack, preserves_flags));
    }
}

/// Read from an I/O port.
///
/// # Safety
/// Reading from invalid ports can cause undefined behavior.
#[inline]
pub unsafe fn inb(port: u16) -> u8 {
    let value: u8;
    unsafe {
        asm!("in al, dx", out("al") value, in("dx") port, options(nomem, nostack, preserves_flags));
    }
    value
}

/// Exclusive handle over the machine's I/O port space.
///
/// Zero-sized; the value exists so port access flows through an owned
/// capability rather than free functions, letting drivers stay generic over
/// [`PortBus`].
#[derive(Debug)]
pub struct IoPorts {
    _private: (),
}

impl IoPorts {
    /// Claim the port space.
    ///
    /// # Safety
    /// The caller must be running with I/O privilege (ring 0 on bare metal)
    /// and must ensure no other code accesses the ports this handle drives
    /// while a programming sequence is in progress.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl PortBus for IoPorts {
    fn write(&mut self, port: u16, value: u8) {
        // SAFETY: constructing IoPorts asserts I/O privilege and exclusivity.
        unsafe { outb(port, value) }
    }

    fn read(&mut self, port: u16) -> u8 {
        // SAFETY: as above.
        unsafe { inb(port) }
    }
}

/// Halt the CPU forever.
///
/// Used as the terminal state of the demo entry points; `hlt` idles the
/// core between (masked) interrupts.
pub fn halt_loop() -> ! {
    loop {
        // SAFETY: hlt is always safe to execute at ring 0.
        unsafe {
            asm!("hlt", options(nomem, nostack, preserves_flags));
        }
    }
}

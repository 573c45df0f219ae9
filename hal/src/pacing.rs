//! # Pacing
//!
//! Animation code needs a delay between frames, but this environment has no
//! timer service: the only available mechanism is a fixed-iteration spin
//! loop with no calibration guarantee. The loop sits behind the [`Pacer`]
//! trait so drawing logic never touches timing directly and tests can
//! substitute a no-op.

/// A source of coarse delays between animation steps.
pub trait Pacer {
    /// Block for roughly `units` delay units. The unit has no defined
    /// real-time meaning; it only scales the delay.
    fn pause(&mut self, units: u32);
}

/// Busy-wait pacer: spins a fixed number of iterations per unit.
#[derive(Debug, Clone, Copy)]
pub struct SpinPacer {
    spins_per_unit: u32,
}

impl SpinPacer {
    /// Pacer spinning `spins_per_unit` iterations per delay unit.
    pub const fn new(spins_per_unit: u32) -> Self {
        Self { spins_per_unit }
    }
}

impl Pacer for SpinPacer {
    fn pause(&mut self, units: u32) {
        let total = (self.spins_per_unit as u64) * (units as u64);
        let mut elapsed = 0u64;
        while elapsed < total {
            core::hint::spin_loop();
            elapsed += 1;
        }
    }
}

/// Pacer that does not wait at all; test double.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPacer;

impl Pacer for NullPacer {
    fn pause(&mut self, _units: u32) {}
}

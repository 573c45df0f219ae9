//! # vgakit VGA Core
//!
//! Driver-less control of VGA-compatible display hardware: programming the
//! adapter's register banks into a documented display mode, loading the DAC
//! color table, and encoding pixel/character data into the memory-mapped
//! surface of the active mode.
//!
//! ## Layering
//!
//! - [`registers`]: the index/data bank protocol and the mode programming
//!   sequencer. Runs once at startup.
//! - [`modes`]: the immutable register tables for the two supported modes.
//! - [`dac`]: the RGB332 palette derivation and the auto-incrementing
//!   768-byte DAC load (pixel mode only; runs after the sequencer).
//! - [`pixel`] / [`text`]: the memory layout contracts of the two surfaces,
//!   with write primitives. Valid for the rest of the program's lifetime
//!   once the matching mode is active.
//!
//! The hardware offers no status readback for any of this: a wrong value or
//! a reordered write produces silent visual corruption, not an error. The
//! tables and sequences here reproduce the documented programming exactly.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod dac;
pub mod modes;
pub mod pixel;
pub mod registers;
pub mod text;

pub use modes::{MODE_03H, MODE_13H};
pub use registers::{activate_mode, Bank, ModeDescriptor, RegisterWrite};

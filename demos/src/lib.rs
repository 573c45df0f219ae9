//! # vgakit Demos
//!
//! Two self-contained demonstration scenes, one per supported mode:
//!
//! - [`mode13h`]: programs mode 13h, loads the RGB332 palette and displays
//!   the embedded test-card image with a border.
//! - [`textmode`]: programs mode 03h and renders a guided tour of the text
//!   buffer (memory layout, color table) with a scrolling marquee.
//!
//! Each scene exposes a non-returning `run()` entry point, invoked once by
//! the external bootstrap collaborator after the machine is otherwise
//! quiescent, plus pure composition functions that draw onto any injected
//! surface and are exercised directly by the unit tests.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod image;
pub mod mode13h;
pub mod textmode;

use spin::Mutex;
use vgakit_hal::IoPorts;

/// The machine's port space, held behind a lock so a programming sequence
/// owns the register banks exclusively for its duration.
//
// SAFETY: the bootstrap contract hands these demos ring-0 control of an
// otherwise quiescent machine; nothing else touches the VGA ports.
static VGA_BUS: Mutex<IoPorts> = Mutex::new(unsafe { IoPorts::new() });

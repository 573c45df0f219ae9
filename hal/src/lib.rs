//! # vgakit HAL - Hardware Capability Layer
//!
//! This crate defines the small set of hardware capabilities the VGA layer
//! consumes: byte-wide I/O port access, a pacing (busy-wait) interface, and
//! a halt primitive.
//!
//! ## Design Philosophy
//!
//! - **Injected, not ambient**: the port space is handed to drivers as a
//!   value implementing [`port::PortBus`], so an in-memory recording double
//!   can stand in for real hardware in tests.
//! - **Minimal**: only exposes what the register and framebuffer layers need.
//! - **Safe at the seam**: the `unsafe` surface is confined to constructing
//!   the real-hardware handles; everything above them is safe code.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod pacing;
pub mod port;

// Architecture-specific implementations
pub mod arch;

// Stub implementations (for fallback)
pub mod arch_stubs;

pub use arch::current::{halt_loop, IoPorts};
pub use pacing::{NullPacer, Pacer, SpinPacer};
pub use port::{PortBus, PortOp, TraceBus};

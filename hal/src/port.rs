//! # Port I/O Capability
//!
//! The register layer consumes exactly two hardware primitives: write a byte
//! to an I/O port and read a byte back. Both are modeled as one trait,
//! [`PortBus`], implemented by the real port space
//! ([`crate::IoPorts`]) and by an in-memory recording double ([`TraceBus`]).
//!
//! Port writes expose no success/failure signal on this hardware family, so
//! the trait is deliberately infallible.

use heapless::Vec;

/// Capacity of the trace buffer: enough for a full mode programming sequence
/// plus a complete 256-entry palette load, with headroom.
const TRACE_CAPACITY: usize = 4096;

/// Byte-wide access to the I/O port space.
///
/// Implementations are synchronous. Drivers own the bus value exclusively
/// for the duration of a programming sequence; the hardware's index/data
/// protocol is stateful and must not be interleaved with other accesses.
pub trait PortBus {
    /// Write one byte to `port`.
    fn write(&mut self, port: u16, value: u8);

    /// Read one byte from `port`.
    fn read(&mut self, port: u16) -> u8;
}

/// A single recorded port operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortOp {
    /// A byte written to a port.
    Write {
        /// Target port.
        port: u16,
        /// Byte written.
        value: u8,
    },
    /// A byte read from a port.
    Read {
        /// Source port.
        port: u16,
    },
}

/// Recording double for [`PortBus`].
///
/// Captures every operation in issue order so tests can assert on the exact
/// write sequence a programming routine produces. Reads return a fixed,
/// configurable value (hardware state is not modeled).
#[derive(Debug, Default)]
pub struct TraceBus {
    ops: Vec<PortOp, TRACE_CAPACITY>,
    read_value: u8,
}

impl TraceBus {
    /// New trace bus; reads return 0.
    pub const fn new() -> Self {
        Self {
            ops: Vec::new(),
            read_value: 0,
        }
    }

    /// New trace bus whose reads all return `value`.
    pub const fn with_read_value(value: u8) -> Self {
        Self {
            ops: Vec::new(),
            read_value: value,
        }
    }

    /// Every operation performed so far, in issue order.
    pub fn ops(&self) -> &[PortOp] {
        &self.ops
    }

    /// The values written to `port`, in issue order.
    pub fn writes_to(&self, port: u16) -> impl Iterator<Item = u8> + '_ {
        self.ops.iter().filter_map(move |op| match *op {
            PortOp::Write { port: p, value } if p == port => Some(value),
            _ => None,
        })
    }

    fn record(&mut self, op: PortOp) {
        assert!(self.ops.push(op).is_ok(), "trace capacity exceeded");
    }
}

impl PortBus for TraceBus {
    fn write(&mut self, port: u16, value: u8) {
        self.record(PortOp::Write { port, value });
    }

    fn read(&mut self, port: u16) -> u8 {
        self.record(PortOp::Read { port });
        self.read_value
    }
}

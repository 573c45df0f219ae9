//! # Register Bank Protocol & Mode Sequencer
//!
//! A VGA adapter is configured through fixed groups ("banks") of registers,
//! each addressed through an index/data port pair: write the register index
//! to the bank's index port, then transfer the value through its data port.
//! The selected index persists in hardware, which makes the protocol an
//! implicit state machine; [`RegisterWrite::apply`] keeps the two steps
//! explicit so ordering dependencies stay visible.
//!
//! ## Ordering
//!
//! Mode programming is order-sensitive:
//!
//! - clocking/memory-plane changes happen under sequencer reset (assert
//!   before, release after),
//! - the CRT controller write-protects its timing registers behind bit 7 of
//!   register 0x11, which must be cleared before the bank is written,
//! - the attribute controller multiplexes index and data on one port, gated
//!   by a flip-flop that a read of Input Status #1 resets,
//! - video output is re-enabled by the final write of the sequence.
//!
//! [`activate_mode`] replays all of this in the documented order with no
//! reordering or batching.

use vgakit_hal::port::PortBus;

use bitflags::bitflags;

/// Fixed external register ports.
mod ports {
    /// Miscellaneous Output register (write address).
    pub const MISC_OUTPUT: u16 = 0x3C2;
    /// Input Status #1; reading it resets the attribute flip-flop.
    pub const INPUT_STATUS: u16 = 0x3DA;
    /// Sequencer bank.
    pub const SEQ_INDEX: u16 = 0x3C4;
    pub const SEQ_DATA: u16 = 0x3C5;
    /// CRT controller bank (color adapter addresses).
    pub const CRT_INDEX: u16 = 0x3D4;
    pub const CRT_DATA: u16 = 0x3D5;
    /// Graphics controller bank.
    pub const GRAPHICS_INDEX: u16 = 0x3CE;
    pub const GRAPHICS_DATA: u16 = 0x3CF;
    /// Attribute controller: one port carries both index and data.
    pub const ATTRIBUTE: u16 = 0x3C0;
}

/// Sequencer reset register (index 0) values.
mod seq_reset {
    /// Hold the sequencer in synchronous reset while clocking changes.
    pub const ASSERT: u8 = 0x01;
    /// Release both reset bits; normal operation.
    pub const RELEASE: u8 = 0x03;
}

/// Sequencer register index of the reset register.
const SEQ_RESET_INDEX: u8 = 0x00;
/// CRT controller register whose bit 7 write-protects registers 0-7.
const CRT_PROTECT_INDEX: u8 = 0x11;
/// The protect bit itself.
const CRT_PROTECT_BIT: u8 = 0x80;
/// Attribute index-port value that re-enables video output (bit 5 set).
const ATTRIBUTE_ENABLE_VIDEO: u8 = 0x20;

bitflags! {
    /// Memory planes addressed by the sequencer map-mask register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Planes: u8 {
        /// Memory plane 0.
        const PLANE_0 = 1 << 0;
        /// Memory plane 1.
        const PLANE_1 = 1 << 1;
        /// Memory plane 2.
        const PLANE_2 = 1 << 2;
        /// Memory plane 3.
        const PLANE_3 = 1 << 3;
    }
}

/// A named register bank, addressed through an index/data port pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    /// Clocking and memory-plane control.
    Sequencer,
    /// CRT timing and scan-out addressing.
    CrtController,
    /// Graphics mode and memory mapping.
    Graphics,
    /// Per-index display attributes and mode flags. Index and data share
    /// one port, alternated by the status flip-flop.
    Attribute,
}

impl Bank {
    /// Port selecting which register of the bank is addressed.
    pub const fn index_port(self) -> u16 {
        match self {
            Bank::Sequencer => ports::SEQ_INDEX,
            Bank::CrtController => ports::CRT_INDEX,
            Bank::Graphics => ports::GRAPHICS_INDEX,
            Bank::Attribute => ports::ATTRIBUTE,
        }
    }

    /// Port transferring the selected register's value.
    pub const fn data_port(self) -> u16 {
        match self {
            Bank::Sequencer => ports::SEQ_DATA,
            Bank::CrtController => ports::CRT_DATA,
            Bank::Graphics => ports::GRAPHICS_DATA,
            Bank::Attribute => ports::ATTRIBUTE,
        }
    }
}

/// One unit of mode programming: a value destined for one register of one
/// bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWrite {
    /// Target bank.
    pub bank: Bank,
    /// Register index within the bank.
    pub index: u8,
    /// Value to program.
    pub value: u8,
}

impl RegisterWrite {
    /// Perform the two-step indexed write: select the register, then
    /// transfer the value.
    pub fn apply<B: PortBus>(&self, bus: &mut B) {
        bus.write(self.bank.index_port(), self.index);
        bus.write(self.bank.data_port(), self.value);
    }
}

/// The complete, immutable register programming for one display mode.
///
/// Pure constant data; referenced once during [`activate_mode`] and never
/// mutated.
#[derive(Debug, Clone, Copy)]
pub struct ModeDescriptor {
    /// Human-readable mode name, for logging only.
    pub name: &'static str,
    /// Miscellaneous Output value, written first and unindexed.
    pub misc_output: u8,
    /// Sequencer registers 0..=4. Index 0 is owned by the reset bracket and
    /// is not replayed from this table.
    pub sequencer: &'static [u8],
    /// CRT controller registers 0..=24.
    pub crt: &'static [u8],
    /// Graphics controller registers 0..=8.
    pub graphics: &'static [u8],
    /// Attribute controller registers 0..=20.
    pub attribute: &'static [u8],
}

/// Drive the adapter from any prior state into the mode `descriptor`
/// describes.
///
/// Every write is issued in protocol order with no reordering or batching.
/// Failure is not observable at this layer: the hardware exposes no status
/// for register writes, so correctness rests entirely on replaying the
/// documented tables exactly.
///
/// Takes the bus exclusively for its whole duration; interleaving any other
/// register access would desynchronize the index/data state machine.
pub fn activate_mode<B: PortBus>(bus: &mut B, descriptor: &ModeDescriptor) {
    bus.write(ports::MISC_OUTPUT, descriptor.misc_output);

    // Clocking and memory-plane registers change under sequencer reset.
    RegisterWrite {
        bank: Bank::Sequencer,
        index: SEQ_RESET_INDEX,
        value: seq_reset::ASSERT,
    }
    .apply(bus);
    for (index, &value) in descriptor.sequencer.iter().enumerate().skip(1) {
        RegisterWrite {
            bank: Bank::Sequencer,
            index: index as u8,
            value,
        }
        .apply(bus);
    }
    RegisterWrite {
        bank: Bank::Sequencer,
        index: SEQ_RESET_INDEX,
        value: seq_reset::RELEASE,
    }
    .apply(bus);

    // Clear the CRT protect bit before any other write touches the bank.
    // Read-modify-write so the remaining bits of register 0x11 survive.
    bus.write(Bank::CrtController.index_port(), CRT_PROTECT_INDEX);
    let protect = bus.read(Bank::CrtController.data_port());
    bus.write(Bank::CrtController.data_port(), protect & !CRT_PROTECT_BIT);

    for (index, &value) in descriptor.crt.iter().enumerate() {
        RegisterWrite {
            bank: Bank::CrtController,
            index: index as u8,
            value,
        }
        .apply(bus);
    }

    for (index, &value) in descriptor.graphics.iter().enumerate() {
        RegisterWrite {
            bank: Bank::Graphics,
            index: index as u8,
            value,
        }
        .apply(bus);
    }

    // Reading Input Status #1 resets the attribute controller's index/data
    // flip-flop; required before the bank is addressed.
    let _ = bus.read(ports::INPUT_STATUS);
    for (index, &value) in descriptor.attribute.iter().enumerate() {
        RegisterWrite {
            bank: Bank::Attribute,
            index: index as u8,
            value,
        }
        .apply(bus);
    }

    // Re-enable video output. Must be the last write of the sequence.
    let _ = bus.read(ports::INPUT_STATUS);
    bus.write(ports::ATTRIBUTE, ATTRIBUTE_ENABLE_VIDEO);

    log::info!("vga: mode {} programmed", descriptor.name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::{MODE_03H, MODE_13H};
    use std::vec::Vec;
    use vgakit_hal::port::{PortOp, TraceBus};

    fn write(port: u16, value: u8) -> PortOp {
        PortOp::Write { port, value }
    }

    /// The full expected operation stream for a descriptor, spelled out
    /// phase by phase as the hardware documentation orders it.
    fn expected_ops(descriptor: &ModeDescriptor, crt_protect_read: u8) -> Vec<PortOp> {
        let mut ops = Vec::new();
        ops.push(write(0x3C2, descriptor.misc_output));

        ops.push(write(0x3C4, 0x00));
        ops.push(write(0x3C5, 0x01));
        for (index, &value) in descriptor.sequencer.iter().enumerate().skip(1) {
            ops.push(write(0x3C4, index as u8));
            ops.push(write(0x3C5, value));
        }
        ops.push(write(0x3C4, 0x00));
        ops.push(write(0x3C5, 0x03));

        ops.push(write(0x3D4, 0x11));
        ops.push(PortOp::Read { port: 0x3D5 });
        ops.push(write(0x3D5, crt_protect_read & 0x7F));
        for (index, &value) in descriptor.crt.iter().enumerate() {
            ops.push(write(0x3D4, index as u8));
            ops.push(write(0x3D5, value));
        }

        for (index, &value) in descriptor.graphics.iter().enumerate() {
            ops.push(write(0x3CE, index as u8));
            ops.push(write(0x3CF, value));
        }

        ops.push(PortOp::Read { port: 0x3DA });
        for (index, &value) in descriptor.attribute.iter().enumerate() {
            ops.push(write(0x3C0, index as u8));
            ops.push(write(0x3C0, value));
        }

        ops.push(PortOp::Read { port: 0x3DA });
        ops.push(write(0x3C0, 0x20));
        ops
    }

    #[test]
    fn indexed_write_selects_then_transfers() {
        let mut bus = TraceBus::new();
        RegisterWrite {
            bank: Bank::Graphics,
            index: 0x05,
            value: 0x40,
        }
        .apply(&mut bus);

        assert_eq!(bus.ops(), &[write(0x3CE, 0x05), write(0x3CF, 0x40)]);
    }

    #[test]
    fn attribute_bank_shares_one_port() {
        assert_eq!(Bank::Attribute.index_port(), Bank::Attribute.data_port());
        assert_ne!(Bank::Sequencer.index_port(), Bank::Sequencer.data_port());
    }

    #[test]
    fn mode_13h_replays_descriptor_exactly() {
        let mut bus = TraceBus::with_read_value(0x8E);
        activate_mode(&mut bus, &MODE_13H);

        assert_eq!(bus.ops(), &expected_ops(&MODE_13H, 0x8E)[..]);
    }

    #[test]
    fn mode_03h_replays_descriptor_exactly() {
        let mut bus = TraceBus::with_read_value(0x80);
        activate_mode(&mut bus, &MODE_03H);

        assert_eq!(bus.ops(), &expected_ops(&MODE_03H, 0x80)[..]);
    }

    #[test]
    fn misc_output_is_the_first_write() {
        let mut bus = TraceBus::new();
        activate_mode(&mut bus, &MODE_13H);

        assert_eq!(bus.ops()[0], write(0x3C2, MODE_13H.misc_output));
    }

    #[test]
    fn crt_unlock_precedes_all_other_crt_writes() {
        let mut bus = TraceBus::with_read_value(0x8E);
        activate_mode(&mut bus, &MODE_13H);

        let first_crt = bus
            .ops()
            .iter()
            .position(|op| matches!(op, PortOp::Write { port: 0x3D4 | 0x3D5, .. }))
            .unwrap();
        // The first touch of the bank selects the protect register; the
        // protect bit is clear in the value written back.
        assert_eq!(bus.ops()[first_crt], write(0x3D4, 0x11));
        assert_eq!(bus.ops()[first_crt + 1], PortOp::Read { port: 0x3D5 });
        assert_eq!(bus.ops()[first_crt + 2], write(0x3D5, 0x0E));
    }

    #[test]
    fn video_enable_is_the_final_write() {
        let mut bus = TraceBus::new();
        activate_mode(&mut bus, &MODE_13H);

        assert_eq!(*bus.ops().last().unwrap(), write(0x3C0, 0x20));
    }

    #[test]
    fn sequencer_reset_brackets_the_clocking_writes() {
        let mut bus = TraceBus::new();
        activate_mode(&mut bus, &MODE_13H);

        let seq_data: Vec<u8> = bus.writes_to(0x3C5).collect();
        assert_eq!(seq_data.first(), Some(&0x01));
        assert_eq!(seq_data.last(), Some(&0x03));
        assert_eq!(seq_data.len(), MODE_13H.sequencer.len() + 1);
    }
}

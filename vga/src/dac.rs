//! # DAC Color Table Programming
//!
//! The adapter's DAC holds 256 palette entries of three 6-bit channels. In
//! mode 13h each framebuffer byte indexes this table, so a deterministic
//! palette makes pixel bytes directly meaningful: the RGB332 layout packs
//! 3 bits of red, 3 of green and 2 of blue into the index itself.
//!
//! Loading runs once after [`crate::activate_mode`] (the mode programming
//! leaves the DAC path addressable) and is never read back; the hardware
//! retains the table.

use static_assertions::const_assert_eq;

use vgakit_hal::port::PortBus;

/// DAC register ports.
mod ports {
    /// PEL mask; 0xFF leaves every palette index addressable.
    pub const PEL_MASK: u16 = 0x3C6;
    /// Write index; selects the first entry of an auto-incrementing run.
    pub const WRITE_INDEX: u16 = 0x3C8;
    /// Data port; three consecutive writes load one entry's R, G, B.
    pub const DATA: u16 = 0x3C9;
}

/// Number of palette entries.
pub const ENTRIES: usize = 256;
/// Maximum value of one 6-bit DAC channel.
pub const CHANNEL_MAX: u8 = 63;

// Integer rescale factors, chosen so each field's maximum lands exactly on
// the channel maximum: 7 * 9 = 63 for the 3-bit fields, 3 * 21 = 63 for the
// 2-bit field.
const SCALE_3BIT: u8 = 9;
const SCALE_2BIT: u8 = 21;
const_assert_eq!(7 * SCALE_3BIT, CHANNEL_MAX);
const_assert_eq!(3 * SCALE_2BIT, CHANNEL_MAX);

/// One palette entry; every channel is a 6-bit DAC value (0-63).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

/// Derive the palette entry for `index` from its RGB332 decomposition:
/// bits 7-5 red, bits 4-2 green, bits 1-0 blue, each rescaled to the DAC
/// range.
pub const fn rgb332(index: u8) -> PaletteEntry {
    let red = (index >> 5) & 0x07;
    let green = (index >> 2) & 0x07;
    let blue = index & 0x03;
    PaletteEntry {
        red: red * SCALE_3BIT,
        green: green * SCALE_3BIT,
        blue: blue * SCALE_2BIT,
    }
}

/// Load the full RGB332 palette into the DAC.
///
/// Opens the run with a PEL mask of 0xFF and a write index of 0, then
/// streams 256 x 3 channel bytes to the data port in ascending index order.
/// The hardware auto-increments the entry index after every third data
/// write, so no index write is issued between entries. No failure path:
/// the DAC reports nothing back.
pub fn load_palette<B: PortBus>(bus: &mut B) {
    bus.write(ports::PEL_MASK, 0xFF);
    bus.write(ports::WRITE_INDEX, 0);

    for index in 0..ENTRIES {
        let entry = rgb332(index as u8);
        bus.write(ports::DATA, entry.red);
        bus.write(ports::DATA, entry.green);
        bus.write(ports::DATA, entry.blue);
    }

    log::debug!("vga: {} DAC entries loaded (RGB332)", ENTRIES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;
    use vgakit_hal::port::{PortOp, TraceBus};

    #[test]
    fn channels_stay_within_dac_range() {
        for index in 0..=255u8 {
            let entry = rgb332(index);
            assert!(entry.red <= CHANNEL_MAX);
            assert!(entry.green <= CHANNEL_MAX);
            assert!(entry.blue <= CHANNEL_MAX);
        }
    }

    #[test]
    fn field_maxima_rescale_exactly_to_channel_max() {
        let white = rgb332(0xFF);
        assert_eq!(
            white,
            PaletteEntry {
                red: CHANNEL_MAX,
                green: CHANNEL_MAX,
                blue: CHANNEL_MAX
            }
        );

        // Isolated maxima: red 7, green 7, blue 3.
        assert_eq!(rgb332(0b111_000_00).red, CHANNEL_MAX);
        assert_eq!(rgb332(0b000_111_00).green, CHANNEL_MAX);
        assert_eq!(rgb332(0b000_000_11).blue, CHANNEL_MAX);
        assert_eq!(rgb332(0).red, 0);
    }

    #[test]
    fn load_streams_768_bytes_in_ascending_index_order() {
        let mut bus = TraceBus::new();
        load_palette(&mut bus);

        assert_eq!(bus.ops()[0], PortOp::Write { port: 0x3C6, value: 0xFF });
        assert_eq!(bus.ops()[1], PortOp::Write { port: 0x3C8, value: 0x00 });

        let data: Vec<u8> = bus.writes_to(0x3C9).collect();
        assert_eq!(data.len(), ENTRIES * 3);

        for index in 0..ENTRIES {
            let entry = rgb332(index as u8);
            assert_eq!(data[index * 3], entry.red);
            assert_eq!(data[index * 3 + 1], entry.green);
            assert_eq!(data[index * 3 + 2], entry.blue);
        }

        // Nothing but the two setup writes and the data stream.
        assert_eq!(bus.ops().len(), 2 + ENTRIES * 3);
    }
}

//! # Mode Descriptor Tables
//!
//! The two supported modes as immutable register tables. Values are the
//! standard, documented VGA programming for each mode; they must be
//! reproduced exactly — the hardware gives no feedback, and a "simplified"
//! or reordered table shows up only as a dead or corrupted display.

use static_assertions::const_assert_eq;

use crate::registers::{ModeDescriptor, Planes};

/// Number of sequencer registers a descriptor covers.
pub const SEQUENCER_REGS: usize = 5;
/// Number of CRT controller registers a descriptor covers.
pub const CRT_REGS: usize = 25;
/// Number of graphics controller registers a descriptor covers.
pub const GRAPHICS_REGS: usize = 9;
/// Number of attribute controller registers a descriptor covers.
pub const ATTRIBUTE_REGS: usize = 21;

/// Mode 13h: 320x200 pixels, 256 colors, one linear byte per pixel at
/// 0xA0000. Chain-4 addressing, no planar interleaving.
pub const MODE_13H: ModeDescriptor = ModeDescriptor {
    name: "13h (320x200, 256 colors)",
    misc_output: 0x63,
    sequencer: &[
        0x03,                 // 0: reset (owned by the reset bracket)
        0x01,                 // 1: clocking mode, 8-dot characters
        Planes::all().bits(), // 2: map mask, all four planes writable
        0x00,                 // 3: character map select
        0x0E,                 // 4: memory mode - chain-4, extended memory
    ],
    crt: &[
        0x5F, // 0x00: horizontal total
        0x4F, // 0x01: horizontal display end
        0x50, // 0x02: start horizontal blanking
        0x82, // 0x03: end horizontal blanking
        0x54, // 0x04: start horizontal retrace
        0x80, // 0x05: end horizontal retrace
        0xBF, // 0x06: vertical total
        0x1F, // 0x07: overflow
        0x00, // 0x08: preset row scan
        0x41, // 0x09: maximum scan line (doubled scanlines)
        0x00, // 0x0A: cursor start
        0x00, // 0x0B: cursor end
        0x00, // 0x0C: start address high
        0x00, // 0x0D: start address low
        0x00, // 0x0E: cursor location high
        0x00, // 0x0F: cursor location low
        0x9C, // 0x10: vertical retrace start
        0x0E, // 0x11: vertical retrace end
        0x8F, // 0x12: vertical display end
        0x28, // 0x13: offset (row pitch)
        0x40, // 0x14: underline location (doubleword addressing)
        0x96, // 0x15: start vertical blanking
        0xB9, // 0x16: end vertical blanking
        0xA3, // 0x17: CRTC mode control
        0xFF, // 0x18: line compare
    ],
    graphics: &[
        0x00, // 0: set/reset
        0x00, // 1: enable set/reset
        0x00, // 2: color compare
        0x00, // 3: data rotate
        0x00, // 4: read map select
        0x40, // 5: graphics mode - 256-color shift
        0x05, // 6: miscellaneous - map at A0000, graphics mode
        0x0F, // 7: color don't care
        0xFF, // 8: bit mask
    ],
    attribute: &[
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, // palette 0-7: identity
        0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, // palette 8-15: identity
        0x41, // 0x10: mode control - graphics, 8-bit color
        0x00, // 0x11: overscan color
        0x0F, // 0x12: color plane enable
        0x00, // 0x13: horizontal pixel panning
        0x00, // 0x14: color select
    ],
};

/// Mode 03h: 80x25 text cells, 16 colors, 16-bit cells at 0xB8000.
///
/// Firmware normally leaves this mode active at handoff, but a complete
/// driver cannot rely on the prior state and programs it explicitly.
pub const MODE_03H: ModeDescriptor = ModeDescriptor {
    name: "03h (80x25 text)",
    misc_output: 0x67,
    sequencer: &[
        0x03, // 0: reset (owned by the reset bracket)
        0x00, // 1: clocking mode, 9-dot characters
        0x03, // 2: map mask - planes 0 and 1 (characters + attributes)
        0x00, // 3: character map select
        0x02, // 4: memory mode - odd/even addressing
    ],
    crt: &[
        0x5F, // 0x00: horizontal total
        0x4F, // 0x01: horizontal display end
        0x50, // 0x02: start horizontal blanking
        0x82, // 0x03: end horizontal blanking
        0x55, // 0x04: start horizontal retrace
        0x81, // 0x05: end horizontal retrace
        0xBF, // 0x06: vertical total
        0x1F, // 0x07: overflow
        0x00, // 0x08: preset row scan
        0x4F, // 0x09: maximum scan line (16-line character cell)
        0x0D, // 0x0A: cursor start
        0x0E, // 0x0B: cursor end
        0x00, // 0x0C: start address high
        0x00, // 0x0D: start address low
        0x00, // 0x0E: cursor location high
        0x50, // 0x0F: cursor location low
        0x9C, // 0x10: vertical retrace start
        0x0E, // 0x11: vertical retrace end
        0x8F, // 0x12: vertical display end
        0x28, // 0x13: offset (row pitch)
        0x1F, // 0x14: underline location
        0x96, // 0x15: start vertical blanking
        0xB9, // 0x16: end vertical blanking
        0xA3, // 0x17: CRTC mode control
        0xFF, // 0x18: line compare
    ],
    graphics: &[
        0x00, // 0: set/reset
        0x00, // 1: enable set/reset
        0x00, // 2: color compare
        0x00, // 3: data rotate
        0x00, // 4: read map select
        0x10, // 5: graphics mode - odd/even host access
        0x0E, // 6: miscellaneous - map at B8000, text mode
        0x00, // 7: color don't care
        0xFF, // 8: bit mask
    ],
    attribute: &[
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x14, 0x07, // palette 0-7: EGA ordering
        0x38, 0x39, 0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x3F, // palette 8-15: bright set
        0x0C, // 0x10: mode control - text, blink enable
        0x00, // 0x11: overscan color
        0x0F, // 0x12: color plane enable
        0x08, // 0x13: horizontal pixel panning
        0x00, // 0x14: color select
    ],
};

const_assert_eq!(MODE_13H.sequencer.len(), SEQUENCER_REGS);
const_assert_eq!(MODE_13H.crt.len(), CRT_REGS);
const_assert_eq!(MODE_13H.graphics.len(), GRAPHICS_REGS);
const_assert_eq!(MODE_13H.attribute.len(), ATTRIBUTE_REGS);
const_assert_eq!(MODE_03H.sequencer.len(), SEQUENCER_REGS);
const_assert_eq!(MODE_03H.crt.len(), CRT_REGS);
const_assert_eq!(MODE_03H.graphics.len(), GRAPHICS_REGS);
const_assert_eq!(MODE_03H.attribute.len(), ATTRIBUTE_REGS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_13h_maps_the_graphics_window_at_a0000() {
        // Graphics miscellaneous register: 0x05 = graphics mode, A0000 map.
        assert_eq!(MODE_13H.graphics[6], 0x05);
        assert_eq!(MODE_13H.misc_output, 0x63);
    }

    #[test]
    fn mode_13h_enables_all_planes_and_chain_4() {
        assert_eq!(MODE_13H.sequencer[2], 0x0F);
        assert_eq!(MODE_13H.sequencer[4], 0x0E);
    }

    #[test]
    fn mode_03h_maps_the_text_window_at_b8000() {
        // Graphics miscellaneous register: 0x0E = text mode, B8000 map.
        assert_eq!(MODE_03H.graphics[6], 0x0E);
        assert_eq!(MODE_03H.misc_output, 0x67);
    }

    #[test]
    fn descriptors_keep_the_protect_register_unlocked() {
        // Bit 7 of CRT register 0x11 clear in both tables, or the replay
        // would re-lock the bank midway through.
        assert_eq!(MODE_13H.crt[0x11] & 0x80, 0);
        assert_eq!(MODE_03H.crt[0x11] & 0x80, 0);
    }
}

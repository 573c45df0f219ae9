//! # Text Mode Framebuffer Encoding
//!
//! With mode 03h active the adapter exposes an 80x25 grid of 16-bit cells
//! at 0xB8000. Each cell packs the character code in its low byte and the
//! attribute in its high byte; cell (x, y) lives at offset `y * 80 + x`.
//!
//! The attribute byte is itself packed: bits 0-3 foreground color, bits 4-6
//! background color, bit 7 the blink flag.
//!
//! ## Bounds contract
//!
//! Unlike the pixel encoder, [`TextFrame::write_cell`] does not validate
//! coordinates: text-mode callers own coordinate validity, and every caller
//! in this workspace computes in-range positions. This asymmetry with pixel
//! mode is deliberate and part of the contract, not an oversight. An
//! out-of-range coordinate here is a caller bug and fails hard (slice
//! indexing) rather than silently corrupting neighbouring memory.

use core::ptr;

use static_assertions::const_assert_eq;

/// Cells per row.
pub const COLUMNS: usize = 80;
/// Rows on screen.
pub const ROWS: usize = 25;
/// Total cell count of the surface.
pub const CELL_COUNT: usize = COLUMNS * ROWS;
/// Physical base address of the hardware window.
pub const TEXT_BASE: usize = 0xB8000;

const_assert_eq!(CELL_COUNT, 2_000);

/// The sixteen standard text-mode colors.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Palette index 0.
    Black = 0,
    /// Palette index 1.
    Blue = 1,
    /// Palette index 2.
    Green = 2,
    /// Palette index 3.
    Cyan = 3,
    /// Palette index 4.
    Red = 4,
    /// Palette index 5.
    Magenta = 5,
    /// Palette index 6.
    Brown = 6,
    /// Palette index 7.
    LightGrey = 7,
    /// Palette index 8.
    DarkGrey = 8,
    /// Palette index 9.
    LightBlue = 9,
    /// Palette index 10.
    LightGreen = 10,
    /// Palette index 11.
    LightCyan = 11,
    /// Palette index 12.
    LightRed = 12,
    /// Palette index 13.
    Pink = 13,
    /// Palette index 14; also known as light brown.
    Yellow = 14,
    /// Palette index 15.
    White = 15,
}

impl Color {
    /// All sixteen colors in palette order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGrey,
        Color::DarkGrey,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::Pink,
        Color::Yellow,
        Color::White,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Brown => "Brown",
            Color::LightGrey => "Light Grey",
            Color::DarkGrey => "Dark Grey",
            Color::LightBlue => "Light Blue",
            Color::LightGreen => "Light Green",
            Color::LightCyan => "Light Cyan",
            Color::LightRed => "Light Red",
            Color::Pink => "Pink",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }
}

/// Packed per-cell attribute: foreground bits 0-3, background bits 4-6,
/// blink flag bit 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Attribute(u8);

impl Attribute {
    /// Build from foreground and background colors.
    ///
    /// The background field is three bits wide; bright backgrounds lose
    /// their intensity bit (bit 7 is the blink flag, not background
    /// intensity, in the mode programmed here).
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self((foreground as u8) | ((background as u8 & 0x07) << 4))
    }

    /// The same attribute with the blink flag raised.
    pub const fn blinking(self) -> Self {
        Self(self.0 | 0x80)
    }

    /// Raw byte exactly as stored in a cell's high byte.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Pack a character and attribute into the 16-bit cell encoding.
pub const fn cell(character: u8, attribute: Attribute) -> u16 {
    (character as u16) | ((attribute.bits() as u16) << 8)
}

/// Character half of a packed cell.
pub const fn cell_character(cell: u16) -> u8 {
    cell as u8
}

/// Attribute half of a packed cell.
pub const fn cell_attribute(cell: u16) -> u8 {
    (cell >> 8) as u8
}

/// Encoder over the 80x25 text surface.
///
/// Injected like the pixel surface so scene code runs against an in-memory
/// array in tests. Stores are volatile for the same scan-out reason.
#[derive(Debug)]
pub struct TextFrame<'a> {
    cells: &'a mut [u16; CELL_COUNT],
}

impl<'a> TextFrame<'a> {
    /// Wrap an existing full-size surface.
    pub fn new(cells: &'a mut [u16; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Map the hardware window at [`TEXT_BASE`].
    ///
    /// # Safety
    /// Mode 03h must be active, the physical range
    /// `0xB8000..0xB8000 + 4000` must be accessible at that address, and no
    /// other live reference may alias the window.
    pub unsafe fn map_hardware() -> TextFrame<'static> {
        // SAFETY: per the contract above the region is valid, writable and
        // exclusively ours.
        let cells = unsafe { &mut *(TEXT_BASE as *mut [u16; CELL_COUNT]) };
        TextFrame { cells }
    }

    /// Write one cell at (x, y).
    ///
    /// Performs no bounds check (see the module-level contract); the caller
    /// guarantees `x < COLUMNS && y < ROWS`.
    pub fn write_cell(&mut self, x: usize, y: usize, character: u8, attribute: Attribute) {
        let slot = &mut self.cells[y * COLUMNS + x];
        // SAFETY: slot is a live reference into the surface.
        unsafe { ptr::write_volatile(slot, cell(character, attribute)) }
    }

    /// Read back the packed cell at (x, y). Diagnostic/test aid; same
    /// caller-owned bounds contract as [`Self::write_cell`].
    pub fn cell_at(&self, x: usize, y: usize) -> u16 {
        let slot = &self.cells[y * COLUMNS + x];
        // SAFETY: slot is a live reference into the surface.
        unsafe { ptr::read_volatile(slot) }
    }

    /// Fill the whole surface with blanks carrying `attribute`.
    pub fn clear(&mut self, attribute: Attribute) {
        let blank = cell(b' ', attribute);
        let base = self.cells.as_mut_ptr();
        for offset in 0..CELL_COUNT {
            // SAFETY: offset iterates exactly the surface.
            unsafe { ptr::write_volatile(base.add(offset), blank) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_the_documented_example() {
        // 'A' in yellow on blue: character 0x41, attribute 0x1E.
        let attr = Attribute::new(Color::Yellow, Color::Blue);
        assert_eq!(attr.bits(), 0x1E);
        assert_eq!(cell(b'A', attr), 0x1E41);
    }

    #[test]
    fn unpacking_recovers_both_halves() {
        let packed = cell(b'A', Attribute::new(Color::Yellow, Color::Blue));
        assert_eq!(cell_character(packed), 0x41);
        assert_eq!(cell_attribute(packed), 0x1E);
    }

    #[test]
    fn background_field_is_three_bits() {
        // A bright background drops its intensity bit.
        let attr = Attribute::new(Color::White, Color::DarkGrey);
        assert_eq!(attr.bits(), 0x0F);
    }

    #[test]
    fn blink_sets_the_top_bit_only() {
        let attr = Attribute::new(Color::LightGreen, Color::Black);
        assert_eq!(attr.blinking().bits(), attr.bits() | 0x80);
    }

    #[test]
    fn write_cell_lands_at_the_linear_offset() {
        let mut buf = [0u16; CELL_COUNT];
        let mut frame = TextFrame::new(&mut buf);

        let attr = Attribute::new(Color::White, Color::Black);
        frame.write_cell(2, 1, b'X', attr);

        assert_eq!(frame.cell_at(2, 1), cell(b'X', attr));
        assert_eq!(buf[COLUMNS + 2], cell(b'X', attr));
    }

    #[test]
    fn clear_blanks_every_cell() {
        let mut buf = [0xFFFFu16; CELL_COUNT];
        let mut frame = TextFrame::new(&mut buf);

        let attr = Attribute::new(Color::LightGrey, Color::Black);
        frame.clear(attr);

        assert!(buf.iter().all(|&c| c == cell(b' ', attr)));
    }
}

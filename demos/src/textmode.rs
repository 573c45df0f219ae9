//! # Text Mode Demo
//!
//! Programs the 80x25 text mode and renders a guided tour of the cell
//! encoding: a title bar, the memory-layout panel with a worked attribute
//! example, the sixteen-color table with swatches, and a scrolling marquee
//! along the bottom that loops until the machine halts.

use vgakit_hal::{halt_loop, Pacer, SpinPacer};
use vgakit_vga::text::{Attribute, Color, TextFrame, COLUMNS};
use vgakit_vga::{activate_mode, MODE_03H};

/// Single horizontal line rune in codepage 437.
const BOX_HLINE: u8 = 0xC4;

/// Spin iterations per marquee step; uncalibrated, tuned for visibility.
const MARQUEE_SPINS_PER_STEP: u32 = 4_000_000;

/// Marquee text scrolled along the bottom row.
const MARQUEE_TEXT: &str =
    ">>> VGA text mode: 80x25 cells, 16 colors, memory-mapped at 0xB8000 <<<   ";

/// Write a string's bytes left to right starting at (x, y).
///
/// Caller owns bounds, as everywhere in text mode: the string must fit on
/// the row.
pub fn put_str(frame: &mut TextFrame<'_>, x: usize, y: usize, text: &str, attribute: Attribute) {
    for (i, byte) in text.bytes().enumerate() {
        frame.write_cell(x + i, y, byte, attribute);
    }
}

/// Horizontal rule of box-drawing characters.
pub fn draw_hline(frame: &mut TextFrame<'_>, x: usize, y: usize, width: usize, attribute: Attribute) {
    for i in 0..width {
        frame.write_cell(x + i, y, BOX_HLINE, attribute);
    }
}

fn draw_title(frame: &mut TextFrame<'_>) {
    let title = Attribute::new(Color::White, Color::Blue);
    for x in 0..COLUMNS {
        frame.write_cell(x, 0, b' ', title);
    }
    put_str(frame, 2, 0, "VGA Text Mode Demonstration", title);
}

fn draw_memory_panel(frame: &mut TextFrame<'_>, start_y: usize) {
    let heading = Attribute::new(Color::White, Color::Black);
    let normal = Attribute::new(Color::LightGrey, Color::Black);

    put_str(frame, 2, start_y, "Memory Layout at 0xB8000:", heading);
    put_str(
        frame,
        2,
        start_y + 1,
        "Each cell = 2 bytes: [character] [attribute]",
        normal,
    );
    put_str(
        frame,
        2,
        start_y + 2,
        "Attribute byte: bits 0-3 = FG color, bits 4-6 = BG color",
        normal,
    );

    put_str(frame, 2, start_y + 4, "Example: 'A' in yellow on blue:", heading);
    put_str(frame, 4, start_y + 5, "Character byte: 0x41 (ASCII 'A')", normal);
    put_str(
        frame,
        4,
        start_y + 6,
        "Attribute byte: 0x1E (FG=14/yellow, BG=1/blue)",
        normal,
    );
    put_str(frame, 4, start_y + 7, "Result: ", normal);
    frame.write_cell(12, start_y + 7, b'A', Attribute::new(Color::Yellow, Color::Blue));
}

fn draw_color_table(frame: &mut TextFrame<'_>, start_y: usize) {
    put_str(
        frame,
        2,
        start_y,
        "Color Palette:",
        Attribute::new(Color::White, Color::Black),
    );

    for (i, color) in Color::ALL.iter().enumerate() {
        let row = start_y + 1 + i / 4;
        let col = 2 + (i % 4) * 19;

        // Swatch: spaces on the color's own background.
        let swatch = Attribute::new(Color::White, *color);
        put_str(frame, col, row, "   ", swatch);

        let label = Attribute::new(*color, Color::Black);
        put_str(frame, col + 4, row, color.name(), label);
    }
}

/// Compose the full static scene onto any text surface. The marquee row is
/// left blank; [`animate_marquee`] owns it.
pub fn render(frame: &mut TextFrame<'_>) {
    let rule = Attribute::new(Color::LightCyan, Color::Black);
    let info = Attribute::new(Color::DarkGrey, Color::Black);

    frame.clear(Attribute::new(Color::LightGrey, Color::Black));
    draw_title(frame);
    draw_hline(frame, 0, 1, COLUMNS, rule);

    draw_memory_panel(frame, 3);
    draw_hline(frame, 0, 11, COLUMNS, rule);
    draw_color_table(frame, 12);
    draw_hline(frame, 0, 17, COLUMNS, rule);

    put_str(
        frame,
        2,
        18,
        "This program writes directly to video memory at physical address",
        info,
    );
    put_str(
        frame,
        2,
        19,
        "0xB8000. No OS, no drivers - just raw hardware access.",
        info,
    );
}

/// Scroll `text` once across row `y`, right edge to left edge, pausing one
/// pacer unit per step. The row is blanked first; on return the last
/// character rests in column 0.
pub fn animate_marquee<P: Pacer>(
    frame: &mut TextFrame<'_>,
    pacer: &mut P,
    y: usize,
    text: &str,
    attribute: Attribute,
) {
    let len = text.len() as i32;

    for x in 0..COLUMNS {
        frame.write_cell(x, y, b' ', attribute);
    }

    let mut offset = COLUMNS as i32;
    while offset > -len {
        for (i, byte) in text.bytes().enumerate() {
            let x = offset + i as i32;
            if x >= 0 && (x as usize) < COLUMNS {
                frame.write_cell(x as usize, y, byte, attribute);
            }
        }
        // Blank the cell the tail just vacated.
        let trailing = offset + len;
        if trailing >= 0 && (trailing as usize) < COLUMNS {
            frame.write_cell(trailing as usize, y, b' ', attribute);
        }
        pacer.pause(1);
        offset -= 1;
    }
}

/// Demo entry point. Invoked once by the bootstrap collaborator; never
/// returns.
pub fn run() -> ! {
    {
        let mut bus = crate::VGA_BUS.lock();
        activate_mode(&mut *bus, &MODE_03H);
    }

    // SAFETY: mode 03h is active and nothing else maps the window.
    let mut frame = unsafe { TextFrame::map_hardware() };
    render(&mut frame);
    log::info!("text mode scene composed; starting marquee");

    let marquee = Attribute::new(Color::LightGreen, Color::Black);
    let mut pacer = SpinPacer::new(MARQUEE_SPINS_PER_STEP);
    loop {
        animate_marquee(&mut frame, &mut pacer, 23, MARQUEE_TEXT, marquee);
    }
}

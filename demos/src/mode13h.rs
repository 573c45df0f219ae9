//! # Mode 13h Demo
//!
//! Programs the 320x200, 256-color mode, loads the RGB332 palette, clears
//! the surface, blits the embedded test card and frames it with a white
//! border, then halts. The composition runs once; the image persists in
//! video memory for as long as the machine displays it.

use vgakit_hal::halt_loop;
use vgakit_vga::pixel::{PixelFrame, HEIGHT, WIDTH};
use vgakit_vga::{activate_mode, dac, MODE_13H};

use crate::image::TEST_CARD;

/// White in RGB332: every field at its maximum.
const WHITE: u8 = 0xFF;

/// Single-pixel border along all four surface edges.
pub fn draw_border(frame: &mut PixelFrame<'_>, color: u8) {
    for x in 0..WIDTH as i32 {
        frame.write_pixel(x, 0, color);
        frame.write_pixel(x, HEIGHT as i32 - 1, color);
    }
    for y in 0..HEIGHT as i32 {
        frame.write_pixel(0, y, color);
        frame.write_pixel(WIDTH as i32 - 1, y, color);
    }
}

/// Compose the full scene onto any mode 13h surface.
pub fn render(frame: &mut PixelFrame<'_>) {
    frame.clear(0);
    frame.blit(&TEST_CARD);
    draw_border(frame, WHITE);
}

/// Demo entry point. Invoked once by the bootstrap collaborator; never
/// returns.
pub fn run() -> ! {
    {
        let mut bus = crate::VGA_BUS.lock();
        activate_mode(&mut *bus, &MODE_13H);
        dac::load_palette(&mut *bus);
    }

    // SAFETY: mode 13h is active and nothing else maps the window.
    let mut frame = unsafe { PixelFrame::map_hardware() };
    render(&mut frame);

    log::info!("mode 13h scene composed; idling");
    halt_loop()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgakit_vga::pixel::FRAME_LEN;

    #[test]
    fn border_writes_every_edge_pixel() {
        let mut buf = [0u8; FRAME_LEN];
        let mut frame = PixelFrame::new(&mut buf);
        draw_border(&mut frame, WHITE);

        for x in 0..WIDTH {
            assert_eq!(buf[x], WHITE);
            assert_eq!(buf[(HEIGHT - 1) * WIDTH + x], WHITE);
        }
        for y in 0..HEIGHT {
            assert_eq!(buf[y * WIDTH], WHITE);
            assert_eq!(buf[y * WIDTH + WIDTH - 1], WHITE);
        }
    }

    #[test]
    fn render_leaves_the_interior_equal_to_the_image() {
        let mut buf = [0x55u8; FRAME_LEN];
        let mut frame = PixelFrame::new(&mut buf);
        render(&mut frame);

        for y in 1..HEIGHT - 1 {
            for x in 1..WIDTH - 1 {
                assert_eq!(buf[y * WIDTH + x], TEST_CARD[y * WIDTH + x]);
            }
        }
        assert_eq!(buf[0], WHITE);
    }

    #[test]
    fn surface_equals_image_after_clear_and_blit() {
        // The end-to-end framebuffer property: activate + palette happen on
        // the port side and never touch the surface, so after clear + blit
        // the surface is the image byte for byte.
        let mut bus = vgakit_hal::TraceBus::new();
        activate_mode(&mut bus, &MODE_13H);
        dac::load_palette(&mut bus);

        let mut buf = [0xEEu8; FRAME_LEN];
        let mut frame = PixelFrame::new(&mut buf);
        frame.clear(0);
        frame.blit(&TEST_CARD);

        assert_eq!(buf, TEST_CARD);
    }
}

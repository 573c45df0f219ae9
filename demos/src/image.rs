//! # Embedded Test-Card Image
//!
//! The mode 13h demo displays a precomputed array of palette indices,
//! exactly one byte per pixel. Production imagery would come from an
//! offline quantization tool; that tool is an external collaborator, so
//! this crate embeds a procedurally built test card with the same shape:
//! a full-frame RGB332 gradient field with diagonal blue striping, which
//! also makes palette-loading mistakes immediately visible.

use vgakit_vga::pixel::{FRAME_LEN, HEIGHT, WIDTH};

/// Full-frame test card, one RGB332 palette index per pixel.
pub static TEST_CARD: [u8; FRAME_LEN] = build_test_card();

const fn build_test_card() -> [u8; FRAME_LEN] {
    let mut image = [0u8; FRAME_LEN];
    let mut y = 0;
    while y < HEIGHT {
        let mut x = 0;
        while x < WIDTH {
            let red = (x * 8 / WIDTH) as u8; // 0..=7 left to right
            let green = (y * 8 / HEIGHT) as u8; // 0..=7 top to bottom
            let blue = (((x + y) / 16) & 0x03) as u8; // diagonal stripes
            image[y * WIDTH + x] = (red << 5) | (green << 2) | blue;
            x += 1;
        }
        y += 1;
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgakit_vga::dac::{rgb332, CHANNEL_MAX};

    #[test]
    fn test_card_fills_the_frame_exactly() {
        assert_eq!(TEST_CARD.len(), WIDTH * HEIGHT);
    }

    #[test]
    fn corners_span_the_gradient() {
        // Top-left: darkest corner; bottom-right: full red and green.
        assert_eq!(TEST_CARD[0] & 0b1110_0000, 0);
        let bottom_right = TEST_CARD[(HEIGHT - 1) * WIDTH + (WIDTH - 1)];
        assert_eq!(rgb332(bottom_right).red, CHANNEL_MAX);
        assert_eq!(rgb332(bottom_right).green, CHANNEL_MAX);
    }
}

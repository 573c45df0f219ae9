//! # Mode 13h Framebuffer Encoding
//!
//! With mode 13h active the adapter exposes a 64,000-byte linear window:
//! one byte per pixel, one palette index per byte, rows laid out
//! consecutively so pixel (x, y) lives at offset `y * 320 + x`.
//!
//! The window is ordinary addressable memory with **no** hardware bounds
//! protection; a stray write lands in whatever is mapped next. The per-pixel
//! primitive therefore bounds-checks and silently drops out-of-range writes,
//! while the bulk paths ([`PixelFrame::clear`], [`PixelFrame::blit`]) cover
//! exactly the fixed surface size and skip per-cell checks.

use core::ptr;

use static_assertions::const_assert_eq;

/// Horizontal resolution in pixels.
pub const WIDTH: usize = 320;
/// Vertical resolution in pixels.
pub const HEIGHT: usize = 200;
/// Surface size in bytes (one palette index per pixel).
pub const FRAME_LEN: usize = WIDTH * HEIGHT;
/// Physical base address of the hardware window.
pub const FRAME_BASE: usize = 0xA0000;

const_assert_eq!(FRAME_LEN, 64_000);

/// Bounds-checked encoder over a mode 13h surface.
///
/// The surface is injected at construction, so an ordinary in-memory array
/// can stand in for the hardware window when testing drawing code. All
/// stores are volatile: on hardware the window's contents are observed by
/// the scan-out engine, not by program reads.
#[derive(Debug)]
pub struct PixelFrame<'a> {
    surface: &'a mut [u8; FRAME_LEN],
}

impl<'a> PixelFrame<'a> {
    /// Wrap an existing full-size surface.
    pub fn new(surface: &'a mut [u8; FRAME_LEN]) -> Self {
        Self { surface }
    }

    /// Map the hardware window at [`FRAME_BASE`].
    ///
    /// # Safety
    /// Mode 13h must be active, the physical range
    /// `0xA0000..0xA0000 + 64000` must be accessible at that address, and
    /// no other live reference may alias the window.
    pub unsafe fn map_hardware() -> PixelFrame<'static> {
        // SAFETY: per the contract above the region is valid, writable and
        // exclusively ours.
        let surface = unsafe { &mut *(FRAME_BASE as *mut [u8; FRAME_LEN]) };
        PixelFrame { surface }
    }

    /// Write one pixel's palette index.
    ///
    /// Out-of-range coordinates (negative or past the edge) are dropped
    /// without touching memory. No error is signaled; there is nothing a
    /// caller could do with one.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: u8) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let offset = y as usize * WIDTH + x as usize;
        // SAFETY: offset < FRAME_LEN by the check above.
        unsafe { ptr::write_volatile(self.surface.as_mut_ptr().add(offset), color) }
    }

    /// Read back one pixel; `None` outside the surface.
    ///
    /// Diagnostic/test aid. The hardware never requires reading the window.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let offset = y as usize * WIDTH + x as usize;
        // SAFETY: offset < FRAME_LEN by the check above.
        Some(unsafe { ptr::read_volatile(self.surface.as_ptr().add(offset)) })
    }

    /// Fill the whole surface with one palette index, in ascending offset
    /// order. Fixed-size bulk path; no per-cell checks.
    pub fn clear(&mut self, value: u8) {
        let base = self.surface.as_mut_ptr();
        for offset in 0..FRAME_LEN {
            // SAFETY: offset iterates exactly the surface.
            unsafe { ptr::write_volatile(base.add(offset), value) }
        }
    }

    /// Copy a full-frame image onto the surface in ascending offset order.
    ///
    /// The source size is fixed at compile time to exactly the surface
    /// size, so the per-pixel bounds check is skipped.
    pub fn blit(&mut self, source: &[u8; FRAME_LEN]) {
        let base = self.surface.as_mut_ptr();
        for (offset, &value) in source.iter().enumerate() {
            // SAFETY: source and surface have identical fixed lengths.
            unsafe { ptr::write_volatile(base.add(offset), value) }
        }
    }
}

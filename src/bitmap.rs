//! In-memory monochrome bitmap.
//!
//! A page-organized 1-bit buffer: each byte holds 8 vertically stacked
//! pixels, bytes run left to right across a page, and pages run top to
//! bottom. Pixel (x, y) lives in byte `x + (y / 8) * width`, bit `y % 8`.
//! This is the layout page-addressed monochrome display controllers expect,
//! so the buffer can be streamed to such a device unchanged.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::debug;
use thiserror::Error;

use crate::pixel_surface::PixelSurface;

/// Pixels stacked in one buffer byte.
pub const PAGE_HEIGHT: u16 = 8;

/// Errors from constructing a [`Bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitmapError {
    #[error("invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
}

// ============================================================================
// Bitmap
// ============================================================================

/// Monochrome pixel surface backed by a page-organized byte buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    buffer: Vec<u8>,
}

impl Bitmap {
    /// Create a cleared bitmap. Both dimensions must be non-zero and fit the
    /// `i16` coordinate space of [`PixelSurface`].
    pub fn new(width: u16, height: u16) -> Result<Self, BitmapError> {
        let max = i16::MAX as u16;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(BitmapError::InvalidDimensions { width, height });
        }

        let pages = height.div_ceil(PAGE_HEIGHT) as usize;
        let size = width as usize * pages;
        debug!("bitmap {}x{}: {} pages, {} bytes", width, height, pages, size);

        Ok(Self {
            width,
            height,
            buffer: vec![0u8; size],
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Size of the backing buffer in bytes.
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Number of pixels that are on.
    pub fn count_on(&self) -> usize {
        self.buffer.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Coordinates of every pixel that is on, row by row.
    pub fn iter_on(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        let (w, h) = (self.width as i16, self.height as i16);
        (0..h)
            .flat_map(move |y| (0..w).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.pixel(x, y))
    }

    /// Byte index and bit mask for an on-surface coordinate.
    #[inline]
    fn locate(&self, x: i16, y: i16) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as u16 >= self.width || y as u16 >= self.height {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let index = x + (y / PAGE_HEIGHT as usize) * self.width as usize;
        Some((index, 1 << (y % PAGE_HEIGHT as usize)))
    }
}

impl PixelSurface for Bitmap {
    #[inline]
    fn set_pixel(&mut self, x: i16, y: i16, on: bool) {
        if let Some((index, mask)) = self.locate(x, y) {
            if on {
                self.buffer[index] |= mask;
            } else {
                self.buffer[index] &= !mask;
            }
        }
    }

    #[inline]
    fn pixel(&self, x: i16, y: i16) -> bool {
        self.locate(x, y)
            .is_some_and(|(index, mask)| self.buffer[index] & mask != 0)
    }
}

/// Renders the bitmap as rows of `#` (on) and `.` (off).
impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i16 {
            for x in 0..self.width as i16 {
                f.write_str(if self.pixel(x, y) { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitmap {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// Tests
// ============================================================================

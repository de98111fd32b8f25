// Preview library for mono-raster scenes.
//
// Provides 1-bit BMP I/O, bitmap comparison, diff image generation, TOML
// scenes and the built-in demo scenes.

use std::fs;
use std::path::Path;

use mono_raster::{Bitmap, BitmapError, PixelSurface};
use thiserror::Error;

pub mod demos;
pub mod scene;

/// Errors from the preview tool library.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid BMP: {0}")]
    InvalidBmp(&'static str),

    #[error("unsupported BMP: {bits} bits per pixel, compression {compression} (expected 1 bpp, uncompressed)")]
    UnsupportedBmp { bits: u16, compression: u32 },

    #[error("failed to parse scene: {0}")]
    Scene(#[from] toml::de::Error),

    #[error("unknown demo '{0}'")]
    UnknownDemo(String),

    #[error("size mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    SizeMismatch {
        a_width: u16,
        a_height: u16,
        b_width: u16,
        b_height: u16,
    },

    #[error(transparent)]
    Bitmap(#[from] BitmapError),
}

pub type Result<T> = std::result::Result<T, PreviewError>;

// ============================================================================
// Comparison Result
// ============================================================================

/// The first pixel that differs between two bitmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffInfo {
    pub x: i16,
    pub y: i16,
    pub in_a: bool,
    pub in_b: bool,
}

/// Result of comparing two bitmaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareResult {
    pub identical: bool,
    pub total_pixels: u64,
    pub different_pixels: u64,
    /// Pixels on in A and off in B.
    pub only_in_a: u64,
    /// Pixels on in B and off in A.
    pub only_in_b: u64,
    /// First differing pixel, scanning left to right, top to bottom.
    pub first_diff: Option<DiffInfo>,
}

impl std::fmt::Display for CompareResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.identical {
            return write!(f, "IDENTICAL: {} pixels match", self.total_pixels);
        }
        write!(
            f,
            "DIFFERENT: {}/{} pixels differ ({} only in A, {} only in B)",
            self.different_pixels, self.total_pixels, self.only_in_a, self.only_in_b,
        )?;
        if let Some(d) = self.first_diff {
            write!(
                f,
                "\n  First diff at ({}, {}): A={} B={}",
                d.x,
                d.y,
                on_off(d.in_a),
                on_off(d.in_b)
            )?;
        }
        Ok(())
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

// ============================================================================
// Bitmap Comparison
// ============================================================================

fn check_same_size(a: &Bitmap, b: &Bitmap) -> Result<()> {
    if a.size() != b.size() {
        return Err(PreviewError::SizeMismatch {
            a_width: a.width(),
            a_height: a.height(),
            b_width: b.width(),
            b_height: b.height(),
        });
    }
    Ok(())
}

/// Compare two bitmaps pixel by pixel. Both must have the same size.
pub fn compare_bitmaps(a: &Bitmap, b: &Bitmap) -> Result<CompareResult> {
    check_same_size(a, b)?;

    let (w, h) = (a.width() as i16, a.height() as i16);
    let mut only_in_a = 0u64;
    let mut only_in_b = 0u64;
    let mut first_diff = None;

    for y in 0..h {
        for x in 0..w {
            let (in_a, in_b) = (a.pixel(x, y), b.pixel(x, y));
            if in_a == in_b {
                continue;
            }
            if in_a {
                only_in_a += 1;
            } else {
                only_in_b += 1;
            }
            first_diff.get_or_insert(DiffInfo { x, y, in_a, in_b });
        }
    }

    let different_pixels = only_in_a + only_in_b;
    Ok(CompareResult {
        identical: different_pixels == 0,
        total_pixels: u64::from(a.width()) * u64::from(a.height()),
        different_pixels,
        only_in_a,
        only_in_b,
        first_diff,
    })
}

/// Diff image: a pixel is on where exactly one of the inputs is on.
pub fn generate_diff_image(a: &Bitmap, b: &Bitmap) -> Result<Bitmap> {
    check_same_size(a, b)?;

    let mut diff = Bitmap::new(a.width(), a.height())?;
    for ((d, &pa), &pb) in diff.buffer_mut().iter_mut().zip(a.buffer()).zip(b.buffer()) {
        *d = pa ^ pb;
    }
    Ok(diff)
}

// ============================================================================
// BMP I/O (1 bit per pixel, 2-entry palette)
// ============================================================================

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const PALETTE_SIZE: u32 = 2 * 4;
const PIXEL_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE + PALETTE_SIZE;

/// 72 DPI.
const PIXELS_PER_METER: u32 = 2835;

/// Bytes per BMP row: one bit per pixel, padded to 4 bytes.
fn row_stride(width: u32) -> usize {
    width.div_ceil(32) as usize * 4
}

/// Encode a bitmap as a 1 bpp BMP: bottom-up rows, most significant bit
/// leftmost, palette index 0 black (off) and 1 white (on).
pub fn encode_bmp(bm: &Bitmap) -> Vec<u8> {
    let (w, h) = (u32::from(bm.width()), u32::from(bm.height()));
    let stride = row_stride(w);
    let image_size = (stride * h as usize) as u32;
    let file_size = PIXEL_OFFSET + image_size;

    let mut out = Vec::with_capacity(file_size as usize);

    // BMP file header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&PIXEL_OFFSET.to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&(h as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&1u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes()); // colors used
    out.extend_from_slice(&2u32.to_le_bytes()); // important colors

    // Palette, BGRA
    out.extend_from_slice(&[0, 0, 0, 0]);
    out.extend_from_slice(&[255, 255, 255, 0]);

    let mut row = vec![0u8; stride];
    for y in (0..h as i16).rev() {
        row.fill(0);
        for x in 0..w as i16 {
            if bm.pixel(x, y) {
                row[x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
        out.extend_from_slice(&row);
    }
    out
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Decode a 1 bpp BMP. Pixels whose palette entry is the brighter of the
/// two are on. Both bottom-up and top-down row orders are accepted.
pub fn decode_bmp(data: &[u8]) -> Result<Bitmap> {
    if data.len() < (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize || &data[0..2] != b"BM" {
        return Err(PreviewError::InvalidBmp("missing BMP header"));
    }

    let pixel_offset = read_u32(data, 10) as usize;
    let header_size = read_u32(data, 14) as usize;
    let w = read_u32(data, 18) as i32;
    let h = read_u32(data, 22) as i32;
    let bits = read_u16(data, 28);
    let compression = read_u32(data, 30);

    if bits != 1 || compression != 0 {
        return Err(PreviewError::UnsupportedBmp { bits, compression });
    }
    let width = u16::try_from(w).map_err(|_| PreviewError::InvalidBmp("bad width"))?;
    let height =
        u16::try_from(h.unsigned_abs()).map_err(|_| PreviewError::InvalidBmp("bad height"))?;
    let top_down = h < 0;

    let palette = FILE_HEADER_SIZE as usize + header_size;
    if data.len() < palette + PALETTE_SIZE as usize {
        return Err(PreviewError::InvalidBmp("truncated palette"));
    }
    let brightness = |i: usize| -> u32 {
        let e = palette + i * 4;
        data[e..e + 3].iter().map(|&c| u32::from(c)).sum()
    };
    let invert = brightness(0) > brightness(1);

    let stride = row_stride(u32::from(width));
    if data.len() < pixel_offset + stride * height as usize {
        return Err(PreviewError::InvalidBmp("truncated pixel data"));
    }

    let mut bm = Bitmap::new(width, height)?;
    for y in 0..height as usize {
        let src_y = if top_down { y } else { height as usize - 1 - y };
        let row = &data[pixel_offset + src_y * stride..][..stride];
        for x in 0..width as usize {
            let bit = row[x / 8] & (0x80 >> (x % 8)) != 0;
            if bit != invert {
                bm.set_pixel(x as i16, y as i16, true);
            }
        }
    }
    Ok(bm)
}

/// Save a bitmap as a 1 bpp BMP file.
pub fn save_bmp(path: &Path, bm: &Bitmap) -> Result<()> {
    fs::write(path, encode_bmp(bm))?;
    Ok(())
}

/// Load a 1 bpp BMP file.
pub fn load_bmp(path: &Path) -> Result<Bitmap> {
    decode_bmp(&fs::read(path)?)
}

// ============================================================================
// Tests
// ============================================================================

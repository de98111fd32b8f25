//! Bresenham line stepping.
//!
//! [`LinePoints`] walks every pixel of a segment with both endpoints
//! included. The same iterator feeds direct pixel drawing and scanline span
//! accumulation, so a filled shape's edges rasterize exactly like the
//! matching outline.

use core::iter::FusedIterator;

use crate::basics::{abs, abs_diff, sign, Point};

// ============================================================================
// LinePoints
// ============================================================================

/// Iterator over the pixels of the segment `p0..=p1`.
///
/// The walk always runs along the longer axis, from the smaller to the
/// larger major coordinate, so the emitted order may be reversed relative to
/// the arguments. The error accumulator starts at `delta_major / 2`, loses
/// `delta_minor` per step and, when it goes negative, advances the minor
/// coordinate and gains `delta_major` back.
#[derive(Debug, Clone)]
pub struct LinePoints {
    steep: bool,
    major: i32,
    major_end: i32,
    minor: i32,
    delta_major: i32,
    delta_minor: i32,
    step_minor: i32,
    error: i32,
}

impl LinePoints {
    pub fn new(p0: Point, p1: Point) -> Self {
        let steep = abs_diff(p1.y, p0.y) > abs_diff(p1.x, p0.x);
        let (mut a0, mut b0, mut a1, mut b1) = if steep {
            (p0.y, p0.x, p1.y, p1.x)
        } else {
            (p0.x, p0.y, p1.x, p1.y)
        };

        if a0 > a1 {
            core::mem::swap(&mut a0, &mut a1);
            core::mem::swap(&mut b0, &mut b1);
        }

        let delta_major = a1 - a0;
        Self {
            steep,
            major: a0,
            major_end: a1,
            minor: b0,
            delta_major,
            delta_minor: abs(b1 - b0),
            step_minor: sign(b1 - b0),
            error: delta_major / 2,
        }
    }

    /// `true` when the walk runs along y.
    pub fn is_steep(&self) -> bool {
        self.steep
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.major > self.major_end {
            return None;
        }

        let p = if self.steep {
            Point::new(self.minor, self.major)
        } else {
            Point::new(self.major, self.minor)
        };

        self.error -= self.delta_minor;
        if self.error < 0 {
            self.minor += self.step_minor;
            self.error += self.delta_major;
        }
        self.major += 1;

        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.major_end - self.major + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}

// ============================================================================
// Tests
// ============================================================================

//! Foundation types and integer helpers.
//!
//! Screen-space points and rectangles plus the small sign/abs helpers that
//! every rasterizer leans on. Coordinates are `i32` internally so that
//! intermediate geometry (center plus radius, origin plus length) never
//! overflows for any `i16` surface coordinate; narrowing happens only at the
//! pixel surface boundary.

use core::ops::{Neg, Sub};

// ============================================================================
// Signed integer helpers
// ============================================================================

/// Signed integer widths accepted by [`abs`], [`abs_diff`] and [`sign`].
pub trait SignedInt: Copy + Ord + Sub<Output = Self> + Neg<Output = Self> {
    const ZERO: Self;
}

macro_rules! impl_signed_int {
    ($($t:ty),*) => {
        $(
            impl SignedInt for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_signed_int!(i8, i16, i32, i64, isize);

/// Absolute value. No overflow handling beyond the type's native range.
#[inline]
pub fn abs<T: SignedInt>(v: T) -> T {
    if v < T::ZERO {
        -v
    } else {
        v
    }
}

/// Absolute difference `|a - b|`.
#[inline]
pub fn abs_diff<T: SignedInt>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Drawing direction of a signed length: `-1`, `0` or `1`.
#[inline]
pub fn sign<T: SignedInt>(v: T) -> i32 {
    match v.cmp(&T::ZERO) {
        core::cmp::Ordering::Less => -1,
        core::cmp::Ordering::Equal => 0,
        core::cmp::Ordering::Greater => 1,
    }
}

// ============================================================================
// Point
// ============================================================================

/// A pixel coordinate in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle given by its top-left origin and a size that
/// counts both edge pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive bottom-right corner.
    pub fn far_corner(&self) -> Point {
        Point::new(self.x + self.width - 1, self.y + self.height - 1)
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        let far = self.far_corner();
        x >= self.x && x <= far.x && y >= self.y && y <= far.y
    }
}

/// Normalize two inclusive corners given in any order into an origin (the
/// smaller corner on each axis) and a strictly positive width and height.
pub fn normalize_rect(corner0: Point, corner1: Point) -> Rect {
    let (x0, x1) = if corner1.x < corner0.x {
        (corner1.x, corner0.x)
    } else {
        (corner0.x, corner1.x)
    };
    let (y0, y1) = if corner1.y < corner0.y {
        (corner1.y, corner0.y)
    } else {
        (corner0.y, corner1.y)
    };
    Rect::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1)
}

// ============================================================================
// Tests
// ============================================================================

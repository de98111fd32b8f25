//! Integer angle arithmetic on a 256-unit circle.
//!
//! Angles are `u8` values where one full turn is 256 units:
//!
//! ```text
//!   0 = east    64 = north    128 = west    192 = south
//! ```
//!
//! All arithmetic on angles wraps modulo 256. The circle decomposes into 8
//! octants of 32 units each, which is what lets the rasterizers compute one
//! canonical offset and mirror it.

use crate::basics::Point;

/// An angle on the 256-unit circle.
pub type Angle = u8;

pub const ANGLE_EAST: Angle = 0;
pub const ANGLE_NORTH: Angle = 64;
pub const ANGLE_WEST: Angle = 128;
pub const ANGLE_SOUTH: Angle = 192;

/// Units per octant (45 degrees).
pub const OCTANT_UNITS: u8 = 32;

/// Largest value [`approx_atan64`] ever returns.
pub const ATAN_MAX: u8 = 63;

// ============================================================================
// Arctangent approximation
// ============================================================================

/// Approximate `atan(dx / dy)` on a scale where 64 units is 90 degrees.
///
/// Returns 0 when `dy == 0`. The ratio `dx * 255 / dy` is fed through an
/// integer rational fit of arctangent and the result is clamped to
/// [`ATAN_MAX`]. First-octant inputs (`0 <= dx <= dy`) map onto `0..=32`,
/// and the result is monotonic non-decreasing in `dx` for a fixed `dy`,
/// which keeps angle-range inclusion tests stable near octant boundaries.
pub fn approx_atan64(dx: i32, dy: i32) -> u8 {
    if dy == 0 {
        return 0;
    }

    let ratio = i64::from(dx.unsigned_abs()) * 255 / i64::from(dy.unsigned_abs());
    let angle = ratio * (770_195 - (ratio - 255) * (ratio + 941)) / 6_137_491;

    angle.clamp(0, i64::from(ATAN_MAX)) as u8
}

// ============================================================================
// Circular interval tests
// ============================================================================

/// Half-open circular interval test: is `angle` in `[start, end)`?
///
/// When `start > end` the interval wraps through 255 -> 0. `start == end`
/// yields an empty interval here; callers that mean "full circle" by it must
/// handle that case before calling.
#[inline]
pub fn in_angle_range(angle: Angle, start: Angle, end: Angle) -> bool {
    if start <= end {
        angle >= start && angle < end
    } else {
        angle >= start || angle < end
    }
}

/// Minimal circular distance between two angles, in `0..=128`.
#[inline]
pub fn arc_angle_distance(a: Angle, b: Angle) -> u8 {
    let d = u16::from(a.abs_diff(b));
    d.min(256 - d) as u8
}

// ============================================================================
// Angle endpoint
// ============================================================================

/// Endpoint of a line that starts at `origin`, spans `length` pixels (origin
/// included) and points along `angle`.
///
/// A negative length flips the direction by half a turn. Lengths of 0 and
/// ±1 return the origin. Multiples of 64 produce exact axis-aligned
/// endpoints; every other angle is resolved per octant, with the minor axis
/// rounded as `(major * fraction + 16) / 32`.
pub fn angle_endpoint(origin: Point, length: i32, angle: Angle) -> Point {
    if length == 0 {
        return origin;
    }

    let (length, angle) = if length < 0 {
        (length.saturating_neg(), angle.wrapping_add(ANGLE_WEST))
    } else {
        (length, angle)
    };

    // Steps along the major axis; the origin is the first pixel.
    let chebyshev = length - 1;
    if chebyshev <= 0 {
        return origin;
    }

    if angle % ANGLE_NORTH == 0 {
        return match angle / ANGLE_NORTH {
            0 => Point::new(origin.x + chebyshev, origin.y),
            1 => Point::new(origin.x, origin.y - chebyshev),
            2 => Point::new(origin.x - chebyshev, origin.y),
            _ => Point::new(origin.x, origin.y + chebyshev),
        };
    }

    let octant = angle / OCTANT_UNITS;
    let intra = i32::from(angle % OCTANT_UNITS);

    // Even octants start on an axis, odd octants start on a diagonal, so the
    // minor fraction is measured from whichever axis the octant borders.
    let fraction = if octant % 2 == 0 {
        intra
    } else {
        i32::from(OCTANT_UNITS) - intra
    };
    let minor = (chebyshev * fraction + 16) / 32;

    let major_is_x = matches!(octant, 0 | 3 | 4 | 7);
    let (abs_dx, abs_dy) = if major_is_x {
        (chebyshev, minor)
    } else {
        (minor, chebyshev)
    };

    // Screen space: y grows downward.
    let (dx, dy) = match octant {
        0 | 1 => (abs_dx, -abs_dy),
        2 | 3 => (-abs_dx, -abs_dy),
        4 | 5 => (-abs_dx, abs_dy),
        _ => (abs_dx, abs_dy),
    };

    Point::new(origin.x + dx, origin.y + dy)
}

// ============================================================================
// Tests
// ============================================================================

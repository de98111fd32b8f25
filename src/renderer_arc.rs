//! Arc outlines and filled sectors for [`RendererPrimitives`].
//!
//! Both walk the midpoint circle and give each of the 8 mirrored points an
//! angle composed from one first-octant arctangent. Outlines plot the points
//! whose angle falls in `[start, end)`; sectors collect them into a
//! [`SpanMap`] together with the two bounding radii and then paint one run
//! per row.
//!
//! `start == end` means the full circle for both.

use log::trace;

use crate::angle::{approx_atan64, arc_angle_distance, in_angle_range, Angle};
use crate::basics::Point;
use crate::circle_midpoint::CircleMidpoint;
use crate::pixel_surface::PixelSurface;
use crate::quadrants::Quadrants;
use crate::renderer_primitives::RendererPrimitives;
use crate::scan_span::SpanMap;

/// The 8 symmetric points of one midpoint offset, each paired with its
/// angle. `offset_x <= offset_y` as produced by [`CircleMidpoint`].
fn octant_points(cx: i32, cy: i32, ox: i32, oy: i32) -> [(Angle, Point); 8] {
    let base = approx_atan64(ox, oy);
    [
        (base, Point::new(cx + oy, cy - ox)),
        (64 - base, Point::new(cx + ox, cy - oy)),
        (64 + base, Point::new(cx - ox, cy - oy)),
        (128 - base, Point::new(cx - oy, cy - ox)),
        (128 + base, Point::new(cx - oy, cy + ox)),
        (192 - base, Point::new(cx - ox, cy + oy)),
        (192 + base, Point::new(cx + ox, cy + oy)),
        (0u8.wrapping_sub(base), Point::new(cx + oy, cy + ox)),
    ]
}

// ============================================================================
// ArcEndpointAccumulator
// ============================================================================

/// Tracks, for the start and end angles independently, the sampled
/// perimeter point closest to that angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArcEndpointAccumulator {
    start: Angle,
    end: Angle,
    start_point: Point,
    end_point: Point,
    start_distance: u8,
    end_distance: u8,
}

impl ArcEndpointAccumulator {
    /// Both endpoints start at `center` with the worst possible distance,
    /// so a sector without samples degenerates to its center.
    pub(crate) fn new(center: Point, start: Angle, end: Angle) -> Self {
        Self {
            start,
            end,
            start_point: center,
            end_point: center,
            start_distance: u8::MAX,
            end_distance: u8::MAX,
        }
    }

    pub(crate) fn sample(&mut self, angle: Angle, p: Point) {
        let d = arc_angle_distance(angle, self.start);
        if d < self.start_distance {
            self.start_distance = d;
            self.start_point = p;
        }
        let d = arc_angle_distance(angle, self.end);
        if d < self.end_distance {
            self.end_distance = d;
            self.end_point = p;
        }
    }

    pub(crate) fn start_point(&self) -> Point {
        self.start_point
    }

    pub(crate) fn end_point(&self) -> Point {
        self.end_point
    }
}

// ============================================================================
// Arc drawing
// ============================================================================

impl<S: PixelSurface> RendererPrimitives<'_, S> {
    /// Arc outline of `radius` around (cx, cy) covering angles in
    /// `[start, end)`, counter-clockwise from east on the 256-unit scale.
    /// Equal angles draw the full circle.
    pub fn arc(&mut self, cx: i32, cy: i32, radius: i32, start: Angle, end: Angle) {
        if start == end {
            self.circle(cx, cy, radius, Quadrants::All);
            return;
        }
        if radius <= 0 {
            trace!("arc radius {} is not positive", radius);
            return;
        }

        for (ox, oy) in CircleMidpoint::new(radius) {
            for (angle, p) in octant_points(cx, cy, ox, oy) {
                if in_angle_range(angle, start, end) {
                    self.pixel(p.x, p.y);
                }
            }
        }
    }

    /// Filled sector (pie slice) of `radius` around (cx, cy) between
    /// `start` and `end`. Equal angles draw the full disc.
    ///
    /// The in-range perimeter samples, the center, and the two radii to the
    /// samples nearest `start` and `end` are collected into a span map and
    /// painted one run per row.
    pub fn solid_arc(&mut self, cx: i32, cy: i32, radius: i32, start: Angle, end: Angle) {
        if start == end {
            self.solid_circle(cx, cy, radius, Quadrants::All);
            return;
        }
        if radius <= 0 {
            trace!("solid arc radius {} is not positive", radius);
            return;
        }

        let center = Point::new(cx, cy);
        let mut spans = SpanMap::new();
        let mut ends = ArcEndpointAccumulator::new(center, start, end);

        for (ox, oy) in CircleMidpoint::new(radius) {
            for (angle, p) in octant_points(cx, cy, ox, oy) {
                if in_angle_range(angle, start, end) {
                    spans.add_point(p.x, p.y);
                    ends.sample(angle, p);
                }
            }
        }

        spans.add_point(cx, cy);
        spans.add_line(center, ends.start_point());
        spans.add_line(center, ends.end_point());

        self.paint_spans(&spans);
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Circle and ellipse drawing for [`RendererPrimitives`].
//!
//! Each midpoint step produces one offset; outlines mirror it into up to 8
//! (circle) or 4 (ellipse) pixels and fills turn it into vertical runs from
//! the curve to the center row, so a disc costs O(radius) runs. Every
//! variant honors a [`Quadrants`] selection.

use log::trace;

use crate::circle_midpoint::CircleMidpoint;
use crate::ellipse_midpoint::EllipseMidpoint;
use crate::pixel_surface::PixelSurface;
use crate::quadrants::{Quadrant, Quadrants};
use crate::renderer_primitives::RendererPrimitives;

impl<S: PixelSurface> RendererPrimitives<'_, S> {
    /// Circle outline centered at (cx, cy). The diameter is `2 * radius + 1`.
    /// A non-positive radius draws nothing.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32, quadrants: Quadrants) {
        if radius <= 0 {
            trace!("circle radius {} is not positive", radius);
            return;
        }
        for (ox, oy) in CircleMidpoint::new(radius) {
            self.circle_section(cx, cy, ox, oy, quadrants);
        }
    }

    fn circle_section(&mut self, cx: i32, cy: i32, ox: i32, oy: i32, quadrants: Quadrants) {
        if quadrants.contains(Quadrant::TopRight) {
            self.pixel(cx + ox, cy - oy);
            self.pixel(cx + oy, cy - ox);
        }
        if quadrants.contains(Quadrant::TopLeft) {
            self.pixel(cx - ox, cy - oy);
            self.pixel(cx - oy, cy - ox);
        }
        if quadrants.contains(Quadrant::BottomRight) {
            self.pixel(cx + ox, cy + oy);
            self.pixel(cx + oy, cy + ox);
        }
        if quadrants.contains(Quadrant::BottomLeft) {
            self.pixel(cx - ox, cy + oy);
            self.pixel(cx - oy, cy + ox);
        }
    }

    /// Filled disc centered at (cx, cy), restricted to `quadrants`.
    pub fn solid_circle(&mut self, cx: i32, cy: i32, radius: i32, quadrants: Quadrants) {
        if radius <= 0 {
            trace!("solid circle radius {} is not positive", radius);
            return;
        }
        for (ox, oy) in CircleMidpoint::new(radius) {
            self.solid_circle_section(cx, cy, ox, oy, quadrants);
        }
    }

    fn solid_circle_section(&mut self, cx: i32, cy: i32, ox: i32, oy: i32, quadrants: Quadrants) {
        if quadrants.contains(Quadrant::TopRight) {
            self.vline(cx + ox, cy - oy, oy + 1);
            self.vline(cx + oy, cy - ox, ox + 1);
        }
        if quadrants.contains(Quadrant::TopLeft) {
            self.vline(cx - ox, cy - oy, oy + 1);
            self.vline(cx - oy, cy - ox, ox + 1);
        }
        if quadrants.contains(Quadrant::BottomRight) {
            self.vline(cx + ox, cy, oy + 1);
            self.vline(cx + oy, cy, ox + 1);
        }
        if quadrants.contains(Quadrant::BottomLeft) {
            self.vline(cx - ox, cy, oy + 1);
            self.vline(cx - oy, cy, ox + 1);
        }
    }

    /// Ellipse outline centered at (cx, cy) with horizontal radius `rx` and
    /// vertical radius `ry`. Non-positive radii draw nothing.
    pub fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, quadrants: Quadrants) {
        if rx <= 0 || ry <= 0 {
            trace!("ellipse radii {}x{} are not positive", rx, ry);
            return;
        }
        for (ox, oy) in EllipseMidpoint::new(rx, ry) {
            if oy < 0 {
                continue;
            }
            if quadrants.contains(Quadrant::TopRight) {
                self.pixel(cx + ox, cy - oy);
            }
            if quadrants.contains(Quadrant::TopLeft) {
                self.pixel(cx - ox, cy - oy);
            }
            if quadrants.contains(Quadrant::BottomRight) {
                self.pixel(cx + ox, cy + oy);
            }
            if quadrants.contains(Quadrant::BottomLeft) {
                self.pixel(cx - ox, cy + oy);
            }
        }
    }

    /// Filled ellipse; each step draws up to 4 runs of `oy + 1` pixels
    /// between the curve and the center row.
    pub fn solid_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, quadrants: Quadrants) {
        if rx <= 0 || ry <= 0 {
            trace!("solid ellipse radii {}x{} are not positive", rx, ry);
            return;
        }
        for (ox, oy) in EllipseMidpoint::new(rx, ry) {
            if oy < 0 {
                continue;
            }
            if quadrants.contains(Quadrant::TopRight) {
                self.vline(cx + ox, cy - oy, oy + 1);
            }
            if quadrants.contains(Quadrant::TopLeft) {
                self.vline(cx - ox, cy - oy, oy + 1);
            }
            if quadrants.contains(Quadrant::BottomRight) {
                self.vline(cx + ox, cy, oy + 1);
            }
            if quadrants.contains(Quadrant::BottomLeft) {
                self.vline(cx - ox, cy, oy + 1);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Basic shape primitives renderer.
//!
//! [`RendererPrimitives`] draws lines, rectangles, rounded rectangles and
//! triangles directly onto a [`PixelSurface`], without anti-aliasing. Circle,
//! ellipse and arc drawing live in `renderer_circle` and `renderer_arc`, as
//! further `impl` blocks on the same type.
//!
//! Composite shapes are assembled from the line and circle primitives rather
//! than re-deriving geometry: rectangle edges are runs, rounded corners are
//! single-quadrant circles, and filled triangles go through a [`SpanMap`].
//!
//! Coordinates are `i32`. Anything that does not fit the surface's `i16`
//! coordinates is dropped at the surface boundary; everything else is handed
//! to the surface unclipped.

use log::trace;

use crate::angle::{angle_endpoint, Angle};
use crate::basics::{abs, normalize_rect, sign, Point};
use crate::line_bresenham::LinePoints;
use crate::pixel_surface::PixelSurface;
use crate::quadrants::Quadrant;
use crate::scan_span::SpanMap;

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Integer-only shape renderer over a borrowed pixel surface.
///
/// Every draw writes the current ink (`true` turns pixels on, the default;
/// `false` erases) and keeps a pen position for [`line_to`](Self::line_to).
pub struct RendererPrimitives<'a, S: PixelSurface> {
    surface: &'a mut S,
    ink: bool,
    curr_x: i32,
    curr_y: i32,
}

impl<'a, S: PixelSurface> RendererPrimitives<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        Self {
            surface,
            ink: true,
            curr_x: 0,
            curr_y: 0,
        }
    }

    pub fn set_ink(&mut self, on: bool) {
        self.ink = on;
    }

    pub fn ink(&self) -> bool {
        self.ink
    }

    pub fn surface(&self) -> &S {
        self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.surface
    }

    /// Set the pixel at (x, y) to the current ink.
    #[inline]
    pub fn pixel(&mut self, x: i32, y: i32) {
        if let (Ok(x), Ok(y)) = (i16::try_from(x), i16::try_from(y)) {
            self.surface.set_pixel(x, y, self.ink);
        }
    }

    // ------------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------------

    /// Horizontal run of `|length|` pixels starting at (x, y), origin
    /// included. A negative length runs to the left; zero draws nothing.
    pub fn hline(&mut self, x: i32, y: i32, length: i32) {
        let dir = sign(length);
        for d in 0..length.unsigned_abs() {
            self.pixel(x + d as i32 * dir, y);
        }
    }

    /// Vertical run of `|length|` pixels starting at (x, y), origin
    /// included. A negative length runs upward; zero draws nothing.
    pub fn vline(&mut self, x: i32, y: i32, length: i32) {
        let dir = sign(length);
        for d in 0..length.unsigned_abs() {
            self.pixel(x, y + d as i32 * dir);
        }
    }

    /// Bresenham line from (x0, y0) to (x1, y1), both endpoints included.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        if x0 == x1 {
            let (top, bottom) = (y0.min(y1), y0.max(y1));
            self.vline(x0, top, bottom - top + 1);
            return;
        }
        if y0 == y1 {
            let (left, right) = (x0.min(x1), x0.max(x1));
            self.hline(left, y0, right - left + 1);
            return;
        }

        for p in LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)) {
            self.pixel(p.x, p.y);
        }
    }

    /// Line of `length` pixels (origin included) from (x, y) along `angle`.
    ///
    /// The endpoint is resolved first and the segment is then drawn with
    /// [`line`](Self::line), so angled lines rasterize exactly like lines
    /// given by their endpoints.
    pub fn line_angle(&mut self, x: i32, y: i32, length: i32, angle: Angle) {
        if length == 0 {
            return;
        }
        let end = angle_endpoint(Point::new(x, y), length, angle);
        self.line(x, y, end.x, end.y);
    }

    /// Set the pen position for [`line_to`](Self::line_to).
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.curr_x = x;
        self.curr_y = y;
    }

    /// Draw a line from the pen position to (x, y) and move the pen there.
    pub fn line_to(&mut self, x: i32, y: i32) {
        self.line(self.curr_x, self.curr_y, x, y);
        self.curr_x = x;
        self.curr_y = y;
    }

    // ------------------------------------------------------------------------
    // Rectangles
    // ------------------------------------------------------------------------

    /// Rectangle outline with its origin pixel at (x, y).
    ///
    /// Negative width or height extend the rectangle left or up. Both
    /// absolute dimensions must be at least 2 to form a frame.
    pub fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (dir_x, dir_y) = (sign(width), sign(height));
        let (w, h) = (abs(width), abs(height));
        if w <= 1 || h <= 1 {
            trace!("rectangle {}x{} too small for a frame", width, height);
            return;
        }

        let far_x = x + (w - 1) * dir_x;
        let far_y = y + (h - 1) * dir_y;

        self.hline(x, y, width);
        self.hline(x, far_y, width);

        // Verticals skip the corners the horizontals already drew.
        self.vline(x, y + dir_y, height - 2 * dir_y);
        self.vline(far_x, y + dir_y, height - 2 * dir_y);
    }

    /// Rectangle outline between two inclusive corners given in any order.
    pub fn rectangle_corners(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let r = normalize_rect(Point::new(x0, y0), Point::new(x1, y1));
        self.rectangle(r.x, r.y, r.width, r.height);
    }

    /// Filled rectangle, one horizontal run per row. Negative width or
    /// height extend it left or up; a zero dimension draws nothing.
    pub fn solid_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let dir_y = sign(height);
        if width == 0 || dir_y == 0 {
            trace!("solid rectangle {}x{} is empty", width, height);
            return;
        }
        for row in 0..abs(height) {
            self.hline(x, y + row * dir_y, width);
        }
    }

    /// Filled rectangle between two inclusive corners given in any order.
    pub fn solid_rectangle_corners(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let r = normalize_rect(Point::new(x0, y0), Point::new(x1, y1));
        self.solid_rectangle(r.x, r.y, r.width, r.height);
    }

    /// Rectangle outline with rounded corners.
    ///
    /// The radius is clamped to `(min(|width|, |height|) - 1) / 2` so that
    /// every edge keeps at least one straight pixel. A zero radius draws a
    /// plain [`rectangle`](Self::rectangle).
    pub fn rounded_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, radius: i32) {
        let (w, h) = (abs(width), abs(height));
        if w <= 1 || h <= 1 {
            trace!("rounded rectangle {}x{} too small for a frame", width, height);
            return;
        }
        if radius <= 0 {
            self.rectangle(x, y, width, height);
            return;
        }

        let r = radius.min((w.min(h) - 1) / 2);
        let (min_x, max_x, min_y, max_y) = span_bounds(x, y, width, height);

        let h_len = w - 2 * r;
        let v_len = h - 2 * r;

        self.hline(min_x + r, min_y, h_len);
        self.hline(min_x + r, max_y, h_len);
        self.vline(min_x, min_y + r, v_len);
        self.vline(max_x, min_y + r, v_len);

        self.circle(min_x + r, min_y + r, r, Quadrant::TopLeft.into());
        self.circle(max_x - r, min_y + r, r, Quadrant::TopRight.into());
        self.circle(max_x - r, max_y - r, r, Quadrant::BottomRight.into());
        self.circle(min_x + r, max_y - r, r, Quadrant::BottomLeft.into());
    }

    /// Filled rectangle with rounded corners; same clamping as
    /// [`rounded_rectangle`](Self::rounded_rectangle).
    pub fn solid_rounded_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
    ) {
        let (w, h) = (abs(width), abs(height));
        if w == 0 || h == 0 {
            trace!("solid rounded rectangle {}x{} is empty", width, height);
            return;
        }
        if radius <= 0 {
            self.solid_rectangle(x, y, width, height);
            return;
        }

        let r = radius.min((w.min(h) - 1) / 2);
        let (min_x, max_x, min_y, max_y) = span_bounds(x, y, width, height);

        // Two overlapping slabs cover everything but the four corner squares.
        let center_width = w - 2 * r;
        if center_width > 0 {
            self.solid_rectangle(min_x + r, min_y, center_width, h);
        }
        let center_height = h - 2 * r;
        if center_height > 0 {
            self.solid_rectangle(min_x, min_y + r, w, center_height);
        }

        self.solid_circle(min_x + r, min_y + r, r, Quadrant::TopLeft.into());
        self.solid_circle(max_x - r, min_y + r, r, Quadrant::TopRight.into());
        self.solid_circle(max_x - r, max_y - r, r, Quadrant::BottomRight.into());
        self.solid_circle(min_x + r, max_y - r, r, Quadrant::BottomLeft.into());
    }

    // ------------------------------------------------------------------------
    // Triangles
    // ------------------------------------------------------------------------

    /// Triangle outline through three vertices, closing the loop.
    pub fn triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) {
        self.line(x1, y1, x2, y2);
        self.line(x2, y2, x3, y3);
        self.line(x3, y3, x1, y1);
    }

    /// Filled triangle.
    ///
    /// The three edges are rasterized into a shared [`SpanMap`] with the
    /// same Bresenham rules as the outline, then each touched row is painted
    /// as one run, so edges and interior meet without gaps.
    pub fn solid_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) {
        self.triangle(x1, y1, x2, y2, x3, y3);

        if y1 == y2 && y2 == y3 {
            let left = x1.min(x2).min(x3);
            let right = x1.max(x2).max(x3);
            self.hline(left, y1, right - left + 1);
            return;
        }

        let (a, b, c) = (Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3));
        let mut spans = SpanMap::new();
        spans.add_line(a, b);
        spans.add_line(b, c);
        spans.add_line(c, a);

        self.paint_spans(&spans);
    }

    /// Paint one horizontal run per touched row of `spans`.
    pub(crate) fn paint_spans(&mut self, spans: &SpanMap) {
        for (y, span) in spans {
            if let Some((min_x, max_x)) = span.bounds() {
                self.hline(min_x, y, max_x - min_x + 1);
            }
        }
    }
}

/// Inclusive `(min_x, max_x, min_y, max_y)` of a rectangle whose size may be
/// negative, extending from the origin the same way [`RendererPrimitives::rectangle`] does.
fn span_bounds(x: i32, y: i32, width: i32, height: i32) -> (i32, i32, i32, i32) {
    let far_x = x + (abs(width) - 1) * sign(width);
    let far_y = y + (abs(height) - 1) * sign(height);
    (x.min(far_x), x.max(far_x), y.min(far_y), y.max(far_y))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    fn canvas() -> Bitmap {
        Bitmap::new(64, 64).unwrap()
    }

    fn on(bm: &Bitmap) -> BTreeSet<(i16, i16)> {
        bm.iter_on().collect()
    }

    fn draw(f: impl FnOnce(&mut RendererPrimitives<'_, Bitmap>)) -> BTreeSet<(i16, i16)> {
        let mut bm = canvas();
        f(&mut RendererPrimitives::new(&mut bm));
        on(&bm)
    }

    #[test]
    fn test_pixel_and_ink() {
        let mut bm = canvas();
        let mut prim = RendererPrimitives::new(&mut bm);
        assert!(prim.ink());
        prim.pixel(3, 4);
        assert!(prim.surface().pixel(3, 4));
        prim.set_ink(false);
        prim.pixel(3, 4);
        assert!(!prim.surface().pixel(3, 4));
    }

    #[test]
    fn test_pixel_outside_i16_is_dropped() {
        let mut bm = canvas();
        let mut prim = RendererPrimitives::new(&mut bm);
        prim.pixel(70_000, 1);
        prim.pixel(1, -70_000);
        assert_eq!(bm.count_on(), 0);
    }

    #[test]
    fn test_zero_length_runs_are_noops() {
        assert!(draw(|p| p.hline(5, 5, 0)).is_empty());
        assert!(draw(|p| p.vline(5, 5, 0)).is_empty());
        assert!(draw(|p| p.line_angle(5, 5, 0, 40)).is_empty());
    }

    #[test]
    fn test_unit_runs_draw_origin() {
        assert_eq!(draw(|p| p.hline(5, 6, 1)), BTreeSet::from([(5, 6)]));
        assert_eq!(draw(|p| p.vline(5, 6, -1)), BTreeSet::from([(5, 6)]));
    }

    #[test]
    fn test_negative_runs() {
        assert_eq!(
            draw(|p| p.hline(10, 2, -3)),
            BTreeSet::from([(8, 2), (9, 2), (10, 2)])
        );
        assert_eq!(
            draw(|p| p.vline(1, 10, -3)),
            BTreeSet::from([(1, 8), (1, 9), (1, 10)])
        );
    }

    #[test]
    fn test_line_fast_paths_match_general_walk() {
        let fast = draw(|p| p.line(9, 4, 2, 4));
        let walked: BTreeSet<_> = LinePoints::new(Point::new(9, 4), Point::new(2, 4))
            .map(|p| (p.x as i16, p.y as i16))
            .collect();
        assert_eq!(fast, walked);
        assert_eq!(fast.len(), 8);

        let fast = draw(|p| p.line(3, 20, 3, 11));
        assert_eq!(fast.len(), 10);
    }

    #[test]
    fn test_line_endpoints_included() {
        let px = draw(|p| p.line(2, 3, 30, 17));
        assert!(px.contains(&(2, 3)));
        assert!(px.contains(&(30, 17)));
        assert_eq!(px.len(), 29);
    }

    #[test]
    fn test_line_angle_matches_line_to_endpoint() {
        for angle in [0u8, 10, 45, 64, 99, 128, 170, 192, 250] {
            let end = angle_endpoint(Point::new(32, 32), 20, angle);
            let angled = draw(|p| p.line_angle(32, 32, 20, angle));
            let direct = draw(|p| p.line(32, 32, end.x, end.y));
            assert_eq!(angled, direct, "angle {angle}");
        }
    }

    #[test]
    fn test_move_to_line_to() {
        let px = draw(|p| {
            p.move_to(1, 1);
            p.line_to(10, 1);
            p.line_to(10, 10);
        });
        assert_eq!(px.len(), 19);
        assert!(px.contains(&(10, 10)));
    }

    #[test]
    fn test_rectangle_outline() {
        let px = draw(|p| p.rectangle(2, 3, 5, 4));
        // Perimeter of a 5x4 frame.
        assert_eq!(px.len(), 2 * 5 + 2 * 2);
        for &(x, y) in &px {
            assert!(x == 2 || x == 6 || y == 3 || y == 6);
        }
    }

    #[test]
    fn test_rectangle_negative_size_mirrors() {
        let forward = draw(|p| p.rectangle(2, 3, 5, 4));
        let backward = draw(|p| p.rectangle(6, 6, -5, -4));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_rectangle_too_small() {
        assert!(draw(|p| p.rectangle(2, 2, 1, 10)).is_empty());
        assert!(draw(|p| p.rectangle(2, 2, 10, -1)).is_empty());
    }

    #[test]
    fn test_rectangle_two_by_two() {
        let px = draw(|p| p.rectangle(0, 0, 2, 2));
        assert_eq!(px, BTreeSet::from([(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_solid_rectangle() {
        let px = draw(|p| p.solid_rectangle(4, 4, -3, 2));
        assert_eq!(px.len(), 6);
        assert!(px.contains(&(2, 4)) && px.contains(&(4, 5)));
        assert!(draw(|p| p.solid_rectangle(4, 4, 0, 5)).is_empty());
        assert!(draw(|p| p.solid_rectangle(4, 4, 5, 0)).is_empty());
    }

    #[test]
    fn test_outline_is_subset_of_fill() {
        let sizes = [-6, -2, -1, 0, 1, 2, 3, 7];
        for &w in &sizes {
            for &h in &sizes {
                let outline = draw(|p| p.rectangle(30, 30, w, h));
                let fill = draw(|p| p.solid_rectangle(30, 30, w, h));
                assert!(outline.is_subset(&fill), "{w}x{h}");
            }
        }
    }

    #[test]
    fn test_rectangle_corners_any_order() {
        let a = draw(|p| p.rectangle_corners(2, 3, 9, 8));
        let b = draw(|p| p.rectangle_corners(9, 8, 2, 3));
        let c = draw(|p| p.rectangle(2, 3, 8, 6));
        assert_eq!(a, b);
        assert_eq!(a, c);

        let fill = draw(|p| p.solid_rectangle_corners(9, 3, 2, 8));
        assert_eq!(fill.len(), 8 * 6);
    }

    #[test]
    fn test_rounded_rectangle_zero_radius_is_plain() {
        assert_eq!(
            draw(|p| p.rounded_rectangle(3, 3, 10, 7, 0)),
            draw(|p| p.rectangle(3, 3, 10, 7))
        );
        assert_eq!(
            draw(|p| p.solid_rounded_rectangle(3, 3, 10, 7, -4)),
            draw(|p| p.solid_rectangle(3, 3, 10, 7))
        );
    }

    #[test]
    fn test_rounded_rectangle_cuts_corners() {
        let px = draw(|p| p.rounded_rectangle(10, 10, 20, 12, 4));
        assert!(!px.contains(&(10, 10)));
        assert!(!px.contains(&(29, 21)));
        // Straight edges between the corners.
        assert!(px.contains(&(14, 10)) && px.contains(&(25, 10)));
        assert!(px.contains(&(10, 14)) && px.contains(&(10, 17)));
        for &(x, y) in &px {
            assert!((10..=29).contains(&x) && (10..=21).contains(&y));
        }
    }

    #[test]
    fn test_rounded_radius_is_clamped() {
        let huge = draw(|p| p.rounded_rectangle(5, 5, 9, 7, 100));
        let clamped = draw(|p| p.rounded_rectangle(5, 5, 9, 7, 3));
        assert_eq!(huge, clamped);

        let huge = draw(|p| p.solid_rounded_rectangle(5, 5, 9, 7, 100));
        let clamped = draw(|p| p.solid_rounded_rectangle(5, 5, 9, 7, 3));
        assert_eq!(huge, clamped);
    }

    #[test]
    fn test_rounded_outline_inside_rounded_fill() {
        for r in 0..6 {
            let outline = draw(|p| p.rounded_rectangle(8, 8, 21, 13, r));
            let fill = draw(|p| p.solid_rounded_rectangle(8, 8, 21, 13, r));
            assert!(outline.is_subset(&fill), "radius {r}");
        }
    }

    #[test]
    fn test_rounded_negative_size_mirrors() {
        assert_eq!(
            draw(|p| p.rounded_rectangle(10, 10, 12, 9, 3)),
            draw(|p| p.rounded_rectangle(21, 18, -12, -9, 3))
        );
    }

    #[test]
    fn test_solid_rounded_rows_are_contiguous() {
        let px = draw(|p| p.solid_rounded_rectangle(4, 4, 30, 20, 6));
        for y in 4..24 {
            let row: Vec<i16> = px.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            assert!(!row.is_empty(), "row {y}");
            assert_eq!(row.len() as i16, row[row.len() - 1] - row[0] + 1, "row {y}");
        }
    }

    #[test]
    fn test_triangle_outline_contains_vertices() {
        let px = draw(|p| p.triangle(5, 5, 40, 12, 20, 50));
        for v in [(5, 5), (40, 12), (20, 50)] {
            assert!(px.contains(&v));
        }
    }

    #[test]
    fn test_solid_triangle_rows_are_single_runs() {
        let px = draw(|p| p.solid_triangle(0, 0, 10, 0, 5, 10));
        for y in 0..=10i16 {
            let row: Vec<i16> = px.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            assert!(!row.is_empty(), "row {y}");
            assert_eq!(row.len() as i16, row[row.len() - 1] - row[0] + 1, "row {y}");
        }
        // Within half a pixel of the hull: x >= y/2 and x <= 10 - y/2.
        for &(x, y) in &px {
            assert!((0..=10).contains(&y));
            assert!(2 * x >= y - 1 && 2 * x <= 21 - y, "({x}, {y})");
        }
    }

    #[test]
    fn test_solid_triangle_flat() {
        let px = draw(|p| p.solid_triangle(7, 3, 2, 3, 12, 3));
        assert_eq!(px.len(), 11);
        assert!(px.iter().all(|p| p.1 == 3));
    }

    #[test]
    fn test_solid_triangle_covers_outline() {
        let outline = draw(|p| p.triangle(3, 40, 50, 2, 60, 60));
        let fill = draw(|p| p.solid_triangle(3, 40, 50, 2, 60, 60));
        assert!(outline.is_subset(&fill));
        assert!(fill.len() > outline.len() * 4);
    }

    #[test]
    fn test_erase_with_ink_off() {
        let mut bm = canvas();
        let mut prim = RendererPrimitives::new(&mut bm);
        prim.solid_rectangle(0, 0, 20, 20);
        prim.set_ink(false);
        prim.solid_triangle(2, 2, 17, 2, 9, 17);
        prim.set_ink(true);
        assert!(bm.count_on() < 400);
        assert!(bm.pixel(0, 0));
        assert!(!bm.pixel(9, 5));
    }
}

//! Cross-module properties of the rasterizers, checked over many radii,
//! angles and sizes.

use std::collections::BTreeSet;

use mono_raster::angle::{angle_endpoint, arc_angle_distance, in_angle_range};
use mono_raster::circle_midpoint::CircleMidpoint;
use mono_raster::{Point, PixelSurface, Quadrant, Quadrants, RendererPrimitives};

/// Unbounded surface recording every pixel written, including negative
/// coordinates a bitmap would discard.
#[derive(Default)]
struct Recorder {
    on: BTreeSet<(i16, i16)>,
    writes: usize,
}

impl PixelSurface for Recorder {
    fn set_pixel(&mut self, x: i16, y: i16, on: bool) {
        self.writes += 1;
        if on {
            self.on.insert((x, y));
        } else {
            self.on.remove(&(x, y));
        }
    }

    fn pixel(&self, x: i16, y: i16) -> bool {
        self.on.contains(&(x, y))
    }
}

fn record(f: impl FnOnce(&mut RendererPrimitives<'_, Recorder>)) -> Recorder {
    let mut rec = Recorder::default();
    f(&mut RendererPrimitives::new(&mut rec));
    rec
}

fn pixels(f: impl FnOnce(&mut RendererPrimitives<'_, Recorder>)) -> BTreeSet<(i16, i16)> {
    record(f).on
}

#[test]
fn circle_offsets_stay_in_octant_and_are_monotonic() {
    for r in 1..=200 {
        let mut prev: Option<(i32, i32)> = None;
        for (x, y) in CircleMidpoint::new(r) {
            assert!(x <= y, "r={r}: ({x}, {y})");
            if let Some((px, py)) = prev {
                assert!(x >= px && y <= py, "r={r}: ({px}, {py}) -> ({x}, {y})");
            }
            prev = Some((x, y));
        }
        assert!(prev.is_some(), "r={r} produced no offsets");
    }
}

#[test]
fn angle_endpoint_is_exact_on_axes() {
    let o = Point::new(0, 0);
    assert_eq!(angle_endpoint(o, 11, 0), Point::new(10, 0));
    assert_eq!(angle_endpoint(o, 11, 64), Point::new(0, -10));
    assert_eq!(angle_endpoint(o, 11, 128), Point::new(-10, 0));
    assert_eq!(angle_endpoint(o, 11, 192), Point::new(0, 10));
}

#[test]
fn wrapping_angle_range() {
    assert!(in_angle_range(255, 224, 16));
    assert!(in_angle_range(0, 224, 16));
    assert!(!in_angle_range(16, 224, 16));
    assert!(!in_angle_range(223, 224, 16));
}

#[test]
fn arc_angle_distance_is_symmetric_and_bounded() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let d = arc_angle_distance(a, b);
            assert_eq!(d, arc_angle_distance(b, a));
            assert!(d <= 128);
        }
    }
}

#[test]
fn zero_span_arc_is_full_circle() {
    for r in 1..=64 {
        assert_eq!(
            pixels(|p| p.arc(0, 0, r, 0, 0)),
            pixels(|p| p.circle(0, 0, r, Quadrants::All)),
            "r={r}"
        );
    }
}

#[test]
fn rectangle_outline_is_subset_of_fill() {
    for w in -9..=9 {
        for h in -9..=9 {
            let outline = pixels(|p| p.rectangle(-3, 4, w, h));
            let fill = pixels(|p| p.solid_rectangle(-3, 4, w, h));
            assert!(outline.is_subset(&fill), "{w}x{h}");
        }
    }
}

#[test]
fn triangle_fill_is_one_run_per_row_inside_hull() {
    let px = pixels(|p| p.solid_triangle(0, 0, 10, 0, 5, 10));
    for y in 0..=10i16 {
        let row: Vec<i16> = px.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
        assert!(!row.is_empty(), "row {y}");
        let (first, last) = (row[0], row[row.len() - 1]);
        assert_eq!(row.len() as i16, last - first + 1, "row {y}");
        // Hull: y <= 2x and y <= 20 - 2x, with half a pixel for rounding.
        assert!(2 * first >= y - 1, "row {y} starts at {first}");
        assert!(2 * last <= 21 - y, "row {y} ends at {last}");
    }
    assert!(px.iter().all(|p| (0..=10).contains(&p.1)));
}

#[test]
fn zero_length_runs_write_nothing() {
    let rec = record(|p| {
        p.hline(3, 3, 0);
        p.vline(3, 3, 0);
    });
    assert_eq!(rec.writes, 0);
}

#[test]
fn off_surface_coordinates_reach_the_surface() {
    let px = pixels(|p| p.solid_circle(-5, -5, 4, Quadrants::All));
    assert!(px.contains(&(-5, -5)));
    assert!(px.contains(&(-9, -5)));
    assert!(px.iter().all(|&(x, y)| x < 0 && y < 0));
}

#[test]
fn rounded_corners_are_quarter_circles() {
    let rect = pixels(|p| p.rounded_rectangle(0, 0, 30, 20, 5));
    let corner = pixels(|p| p.circle(5, 5, 5, Quadrant::TopLeft.into()));
    assert!(corner.is_subset(&rect));
}

#[test]
fn complementary_sectors_cover_the_disc() {
    // Only pixels on the shared radius may be missed.
    let disc = pixels(|p| p.solid_circle(0, 0, 20, Quadrants::All));
    let a = pixels(|p| p.solid_arc(0, 0, 20, 32, 160));
    let b = pixels(|p| p.solid_arc(0, 0, 20, 160, 32));
    let union: BTreeSet<_> = a.union(&b).copied().collect();
    assert!(union.is_subset(&disc));
    assert!(union.len() * 100 >= disc.len() * 97);
}

#[test]
fn ellipse_fill_covers_outline_for_every_quadrant() {
    for mask in 0..16u8 {
        let q = Quadrants::from_mask(mask);
        for (rx, ry) in [(7, 3), (3, 7), (16, 16), (40, 11)] {
            let outline = pixels(|p| p.ellipse(0, 0, rx, ry, q));
            let fill = pixels(|p| p.solid_ellipse(0, 0, rx, ry, q));
            assert!(outline.is_subset(&fill), "mask {mask} {rx}x{ry}");
        }
    }
}

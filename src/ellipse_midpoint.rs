//! Two-region midpoint ellipse stepping.
//!
//! Region 1 starts at `(rx, 0)` and walks `offset_y` up while the slope is
//! shallow, occasionally pulling `offset_x` in. Region 2 starts at `(0, ry)`
//! and mirrors that with the axes exchanged. Both regions together cover
//! one quadrant; the caller mirrors each offset 4 ways.
//!
//! Products of squared radii are kept in `i64` so that large radii cannot
//! overflow the decision variables.

use core::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Shallow,
    Steep,
    Done,
}

// ============================================================================
// EllipseMidpoint
// ============================================================================

/// Midpoint ellipse generator yielding `(offset_x, offset_y)` in the first
/// quadrant. Non-positive radii yield nothing.
#[derive(Debug, Clone)]
pub struct EllipseMidpoint {
    radius_x: i64,
    radius_y: i64,
    rx2: i64,
    ry2: i64,
    two_rx2: i64,
    two_ry2: i64,
    offset_x: i64,
    offset_y: i64,
    change_x: i64,
    change_y: i64,
    error: i64,
    stop_x: i64,
    stop_y: i64,
    region: Region,
}

impl EllipseMidpoint {
    pub fn new(radius_x: i32, radius_y: i32) -> Self {
        let rx = i64::from(radius_x);
        let ry = i64::from(radius_y);
        let rx2 = rx * rx;
        let ry2 = ry * ry;

        let mut e = Self {
            radius_x: rx,
            radius_y: ry,
            rx2,
            ry2,
            two_rx2: rx2 * 2,
            two_ry2: ry2 * 2,
            offset_x: 0,
            offset_y: 0,
            change_x: 0,
            change_y: 0,
            error: 0,
            stop_x: 0,
            stop_y: 0,
            region: Region::Done,
        };
        if radius_x > 0 && radius_y > 0 {
            e.enter_shallow();
        }
        e
    }

    fn enter_shallow(&mut self) {
        self.offset_x = self.radius_x;
        self.offset_y = 0;
        self.change_x = (1 - 2 * self.radius_x) * self.ry2;
        self.change_y = self.rx2;
        self.error = 0;
        self.stop_x = self.two_ry2 * self.radius_x;
        self.stop_y = 0;
        self.region = Region::Shallow;
    }

    fn enter_steep(&mut self) {
        self.offset_x = 0;
        self.offset_y = self.radius_y;
        self.change_x = self.ry2;
        self.change_y = (1 - 2 * self.radius_y) * self.rx2;
        self.error = 0;
        self.stop_x = 0;
        self.stop_y = self.two_rx2 * self.radius_y;
        self.region = Region::Steep;
    }

    fn step_shallow(&mut self) {
        self.offset_y += 1;
        self.stop_y += self.two_rx2;
        self.error += self.change_y;
        self.change_y += self.two_rx2;

        if 2 * self.error + self.change_x > 0 {
            self.offset_x -= 1;
            self.stop_x -= self.two_ry2;
            self.error += self.change_x;
            self.change_x += self.two_ry2;
        }
    }

    fn step_steep(&mut self) {
        self.offset_x += 1;
        self.stop_x += self.two_ry2;
        self.error += self.change_x;
        self.change_x += self.two_ry2;

        if 2 * self.error + self.change_y > 0 {
            self.offset_y -= 1;
            self.stop_y -= self.two_rx2;
            self.error += self.change_y;
            self.change_y += self.two_rx2;
        }
    }

    #[inline]
    fn current(&self) -> (i32, i32) {
        (self.offset_x as i32, self.offset_y as i32)
    }
}

impl Iterator for EllipseMidpoint {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        loop {
            match self.region {
                Region::Shallow => {
                    if self.stop_x >= self.stop_y {
                        let p = self.current();
                        self.step_shallow();
                        return Some(p);
                    }
                    self.enter_steep();
                }
                Region::Steep => {
                    if self.stop_x <= self.stop_y {
                        let p = self.current();
                        self.step_steep();
                        return Some(p);
                    }
                    self.region = Region::Done;
                }
                Region::Done => return None,
            }
        }
    }
}

impl FusedIterator for EllipseMidpoint {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_non_positive_radii() {
        assert_eq!(EllipseMidpoint::new(0, 5).count(), 0);
        assert_eq!(EllipseMidpoint::new(5, 0).count(), 0);
        assert_eq!(EllipseMidpoint::new(-2, -2).count(), 0);
    }

    #[test]
    fn test_starts_on_both_axes() {
        let pts: Vec<_> = EllipseMidpoint::new(10, 4).collect();
        assert_eq!(pts[0], (10, 0));
        assert!(pts.contains(&(0, 4)));
    }

    #[test]
    fn test_offsets_stay_in_first_quadrant() {
        for (rx, ry) in [(1, 1), (3, 9), (9, 3), (20, 20), (50, 7)] {
            for (x, y) in EllipseMidpoint::new(rx, ry) {
                assert!((0..=rx).contains(&x), "{rx}x{ry}: x={x}");
                assert!((0..=ry).contains(&y), "{rx}x{ry}: y={y}");
            }
        }
    }

    #[test]
    fn test_circle_case_stays_near_the_circle() {
        for r in 1..=60 {
            for (x, y) in EllipseMidpoint::new(r, r) {
                let d = x * x + y * y - r * r;
                assert!(d.abs() <= r, "r={r}: ({x}, {y}) off by {d}");
            }
        }
    }

    #[test]
    fn test_points_stay_near_the_ellipse() {
        for (rx, ry) in [(12, 5), (5, 12), (30, 8), (8, 30), (40, 39)] {
            let (rx2, ry2) = (i64::from(rx * rx), i64::from(ry * ry));
            let tol = rx2 * ry2 * 2 / i64::from(rx.min(ry));
            for (x, y) in EllipseMidpoint::new(rx, ry) {
                let v = i64::from(x * x) * ry2 + i64::from(y * y) * rx2 - rx2 * ry2;
                assert!(v.abs() <= tol, "{rx}x{ry}: ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_large_radii_do_not_overflow() {
        let n = EllipseMidpoint::new(30_000, 20_000).count();
        assert!(n > 20_000);
    }
}

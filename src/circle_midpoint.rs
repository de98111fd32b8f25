//! Midpoint circle stepping.
//!
//! Generates one representative offset per step for the octant running from
//! the top of the circle (`(0, r)`) towards the 45 degree diagonal. Callers
//! mirror each offset 8 ways to get the full outline.

use core::iter::FusedIterator;

// ============================================================================
// CircleMidpoint
// ============================================================================

/// Midpoint circle generator.
///
/// Yields `(offset_x, offset_y)` pairs starting at `(0, radius)`. The
/// decision variable starts at `1 - radius`; every step advances
/// `offset_x`, and when the accumulator is non-negative it also retreats
/// `offset_y`. Throughout the sequence `offset_x <= offset_y`, `offset_x`
/// never decreases and `offset_y` never increases. A non-positive radius
/// yields nothing.
///
/// The final step of the classic loop can overshoot the diagonal by one
/// pixel (`offset_x == offset_y + 1`). That offset is the mirror image of
/// the previous one, so it is not emitted.
#[derive(Debug, Clone)]
pub struct CircleMidpoint {
    error: i32,
    delta_x: i32,
    delta_y: i32,
    offset_x: i32,
    offset_y: i32,
    started: bool,
    done: bool,
}

impl CircleMidpoint {
    pub fn new(radius: i32) -> Self {
        Self {
            error: 1 - radius,
            delta_x: 1,
            delta_y: -2 * radius,
            offset_x: 0,
            offset_y: radius,
            started: false,
            done: radius <= 0,
        }
    }
}

impl Iterator for CircleMidpoint {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some((self.offset_x, self.offset_y));
        }
        if self.offset_x >= self.offset_y {
            self.done = true;
            return None;
        }

        if self.error >= 0 {
            self.offset_y -= 1;
            self.delta_y += 2;
            self.error += self.delta_y;
        }
        self.offset_x += 1;
        self.delta_x += 2;
        self.error += self.delta_x;

        if self.offset_x > self.offset_y {
            self.done = true;
            return None;
        }
        Some((self.offset_x, self.offset_y))
    }
}

impl FusedIterator for CircleMidpoint {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_non_positive_radius() {
        assert_eq!(CircleMidpoint::new(0).count(), 0);
        assert_eq!(CircleMidpoint::new(-3).count(), 0);
    }

    #[test]
    fn test_radius_one() {
        let steps: Vec<_> = CircleMidpoint::new(1).collect();
        assert_eq!(steps, [(0, 1)]);
    }

    #[test]
    fn test_radius_five() {
        let steps: Vec<_> = CircleMidpoint::new(5).collect();
        assert_eq!(steps, [(0, 5), (1, 5), (2, 5), (3, 4)]);
    }

    #[test]
    fn test_offsets_are_ordered_and_monotonic() {
        for r in 1..=120 {
            let steps: Vec<_> = CircleMidpoint::new(r).collect();
            assert_eq!(steps[0], (0, r));
            for &(x, y) in &steps {
                assert!(x <= y, "r={r}: ({x}, {y})");
            }
            for w in steps.windows(2) {
                assert_eq!(w[1].0, w[0].0 + 1, "r={r}");
                assert!(w[1].1 <= w[0].1, "r={r}");
                assert!(w[0].1 - w[1].1 <= 1, "r={r}");
            }
        }
    }

    #[test]
    fn test_offsets_stay_near_the_circle() {
        for r in 1..=120 {
            for (x, y) in CircleMidpoint::new(r) {
                let d = x * x + y * y - r * r;
                assert!(d.abs() <= r, "r={r}: ({x}, {y}) off by {d}");
            }
        }
    }

    #[test]
    fn test_reaches_the_diagonal() {
        for r in 1..=120 {
            let (x, y) = CircleMidpoint::new(r).last().unwrap();
            assert!(y - x <= 1, "r={r}: stopped at ({x}, {y})");
        }
    }
}

//! Sparse scanline span accumulation.
//!
//! Fill algorithms for shapes that are not one span per step (triangles,
//! sectors) first collect outline pixels into a [`SpanMap`], widening one
//! `[min_x, max_x]` span per touched row, then paint one run per row. The
//! map is sparse and keyed by row, so rows above, below or outside the
//! surface are simply entries the painter may or may not hit.

use alloc::collections::btree_map::{self, BTreeMap};

use crate::basics::Point;
use crate::line_bresenham::LinePoints;

// ============================================================================
// ScanSpan
// ============================================================================

/// Horizontal extent touched on one scanline.
///
/// An untouched span is distinct from a span touched at a single x. Once
/// touched, `min_x <= max_x` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSpan {
    min_x: i32,
    max_x: i32,
    initialized: bool,
}

impl ScanSpan {
    pub const fn new() -> Self {
        Self {
            min_x: 0,
            max_x: 0,
            initialized: false,
        }
    }

    /// Widen the span to include `x`.
    #[inline]
    pub fn add_point(&mut self, x: i32) {
        if !self.initialized {
            self.min_x = x;
            self.max_x = x;
            self.initialized = true;
            return;
        }
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.initialized
    }

    /// `(min_x, max_x)`, or `None` for an untouched span.
    pub fn bounds(&self) -> Option<(i32, i32)> {
        self.initialized.then_some((self.min_x, self.max_x))
    }

    /// Number of pixels covered, 0 when untouched.
    pub fn len(&self) -> i32 {
        match self.bounds() {
            Some((lo, hi)) => hi - lo + 1,
            None => 0,
        }
    }
}

// ============================================================================
// SpanMap
// ============================================================================

/// Row-indexed collection of [`ScanSpan`]s, iterated top to bottom.
#[derive(Debug, Clone, Default)]
pub struct SpanMap {
    rows: BTreeMap<i32, ScanSpan>,
}

impl SpanMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen row `y` to include `x`.
    #[inline]
    pub fn add_point(&mut self, x: i32, y: i32) {
        self.rows.entry(y).or_default().add_point(x);
    }

    /// Rasterize the segment `p0..=p1` into the map with Bresenham rules.
    pub fn add_line(&mut self, p0: Point, p1: Point) {
        for p in LinePoints::new(p0, p1) {
            self.add_point(p.x, p.y);
        }
    }

    pub fn row(&self, y: i32) -> Option<&ScanSpan> {
        self.rows.get(&y)
    }

    /// Number of touched rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Touched rows in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.rows.iter(),
        }
    }
}

/// Iterator over `(y, span)` pairs of a [`SpanMap`], top row first.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, i32, ScanSpan>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i32, &'a ScanSpan);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&y, span)| (y, span))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a SpanMap {
    type Item = (i32, &'a ScanSpan);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

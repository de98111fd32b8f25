//! Quadrant selection for circles and ellipses.
//!
//! A selection is either every quadrant or an explicit set. The compact wire
//! form is a 4-bit mask in which the all-zero value means "every quadrant";
//! [`Quadrants`] keeps those two meanings apart as distinct variants.

use core::ops::BitOr;

// ============================================================================
// Quadrant
// ============================================================================

/// One quarter of a circle or ellipse, in screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
    ];

    /// Bit of this quadrant in the 4-bit mask encoding.
    pub const fn bit(self) -> u8 {
        match self {
            Quadrant::TopLeft => 1 << 0,
            Quadrant::TopRight => 1 << 1,
            Quadrant::BottomRight => 1 << 2,
            Quadrant::BottomLeft => 1 << 3,
        }
    }
}

// ============================================================================
// QuadrantSet
// ============================================================================

/// A set of quadrants. The empty set is valid and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuadrantSet(u8);

impl QuadrantSet {
    pub const EMPTY: QuadrantSet = QuadrantSet(0);
    pub const FULL: QuadrantSet = QuadrantSet(0x0F);

    pub const fn with(self, q: Quadrant) -> Self {
        QuadrantSet(self.0 | q.bit())
    }

    pub const fn contains(self, q: Quadrant) -> bool {
        self.0 & q.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl From<Quadrant> for QuadrantSet {
    fn from(q: Quadrant) -> Self {
        QuadrantSet::EMPTY.with(q)
    }
}

impl FromIterator<Quadrant> for QuadrantSet {
    fn from_iter<I: IntoIterator<Item = Quadrant>>(iter: I) -> Self {
        iter.into_iter().fold(QuadrantSet::EMPTY, QuadrantSet::with)
    }
}

impl BitOr<Quadrant> for Quadrant {
    type Output = QuadrantSet;

    fn bitor(self, rhs: Quadrant) -> QuadrantSet {
        QuadrantSet::from(self).with(rhs)
    }
}

impl BitOr<Quadrant> for QuadrantSet {
    type Output = QuadrantSet;

    fn bitor(self, rhs: Quadrant) -> QuadrantSet {
        self.with(rhs)
    }
}

// ============================================================================
// Quadrants
// ============================================================================

/// Which quadrants of a circle or ellipse take part in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quadrants {
    /// No restriction.
    #[default]
    All,
    /// Only the listed quadrants.
    Only(QuadrantSet),
}

impl Quadrants {
    /// Decode the 4-bit wire mask; zero means [`Quadrants::All`].
    pub const fn from_mask(mask: u8) -> Self {
        match mask & 0x0F {
            0 => Quadrants::All,
            bits => Quadrants::Only(QuadrantSet(bits)),
        }
    }

    /// Encode as the 4-bit wire mask. An explicit empty set has no encoding.
    pub const fn to_mask(self) -> Option<u8> {
        match self {
            Quadrants::All => Some(0),
            Quadrants::Only(set) if set.is_empty() => None,
            Quadrants::Only(set) => Some(set.bits()),
        }
    }

    #[inline]
    pub const fn contains(self, q: Quadrant) -> bool {
        match self {
            Quadrants::All => true,
            Quadrants::Only(set) => set.contains(q),
        }
    }
}

impl From<Quadrant> for Quadrants {
    fn from(q: Quadrant) -> Self {
        Quadrants::Only(q.into())
    }
}

impl From<QuadrantSet> for Quadrants {
    fn from(set: QuadrantSet) -> Self {
        Quadrants::Only(set)
    }
}

// ============================================================================
// Tests
// ============================================================================

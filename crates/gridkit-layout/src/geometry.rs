#![forbid(unsafe_code)]

//! Grid geometry predicates.
//!
//! All intervals are half-open: an item at `x = 2, w = 3` occupies columns
//! 2, 3 and 4, and touches (but does not overlap) an item starting at
//! column 5.

use serde::{Deserialize, Serialize};

use crate::item::LayoutItem;

/// Largest right or bottom edge a validated layout may have.
///
/// Keeps every edge, push and tolerance computation well inside `i32`.
pub const MAX_GRID_EXTENT: i32 = 1 << 24;

/// A rectangle in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridRect {
    /// Left column (inclusive).
    pub x: i32,
    /// Top row (inclusive).
    pub y: i32,
    /// Width in columns.
    pub w: i32,
    /// Height in rows.
    pub h: i32,
}

impl GridRect {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Column just past the right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Row just past the bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Same rectangle moved to row `y`.
    #[inline]
    #[must_use]
    pub const fn with_y(self, y: i32) -> Self {
        Self { y, ..self }
    }

    /// Whether the two rectangles share at least one cell.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &GridRect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Whether the rectangle lies inside `[0, cols)` horizontally.
    #[inline]
    #[must_use]
    pub const fn within_columns(&self, cols: i32) -> bool {
        self.x >= 0 && self.right() <= cols
    }
}

/// Whether two items overlap.
///
/// An item never collides with itself. Identity is by reference, so two
/// distinct items with identical geometry do collide.
#[inline]
#[must_use]
pub fn collides(a: &LayoutItem, b: &LayoutItem) -> bool {
    !std::ptr::eq(a, b) && a.rect().overlaps(&b.rect())
}

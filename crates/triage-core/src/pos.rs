//! Integer grid coordinates on a torus.
//!
//! `GridPos` itself is unbounded; every consumer wraps it against the grid
//! dimensions with [`GridPos::wrap`], so an out-of-range coordinate is never
//! an error, it just lands on the opposite edge.

use std::fmt;

/// An `(x, y)` cell coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Wrap into `[0, width) × [0, height)`.
    #[inline]
    pub fn wrap(self, width: u32, height: u32) -> GridPos {
        GridPos {
            x: self.x.rem_euclid(width as i32),
            y: self.y.rem_euclid(height as i32),
        }
    }

    /// Translate by `(dx, dy)` without wrapping.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> GridPos {
        GridPos { x: self.x + dx, y: self.y + dy }
    }

    /// Squared Euclidean distance on raw (unwrapped) coordinates.
    #[inline]
    pub fn distance_sq(self, other: GridPos) -> u64 {
        let dx = self.x.abs_diff(other.x) as u64;
        let dy = self.y.abs_diff(other.y) as u64;
        dx * dx + dy * dy
    }

    /// Chebyshev distance measured the short way round a `width × height`
    /// torus.  Both positions are wrapped first.
    pub fn torus_chebyshev(self, other: GridPos, width: u32, height: u32) -> u32 {
        let a = self.wrap(width, height);
        let b = other.wrap(width, height);
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.min(width - dx).max(dy.min(height - dy))
    }

    /// Manhattan distance measured the short way round a torus.  This is the
    /// exact length of a shortest 4-connected path with no obstacles.
    pub fn torus_manhattan(self, other: GridPos, width: u32, height: u32) -> u32 {
        let a = self.wrap(width, height);
        let b = other.wrap(width, height);
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.min(width - dx) + dy.min(height - dy)
    }
}

impl From<(i32, i32)> for GridPos {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

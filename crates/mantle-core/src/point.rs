//! Grid positions and relative offsets.

use std::fmt;
use std::ops::Add;

/// An absolute cell position on the grid.
///
/// `x` indexes columns (east is positive), `y` indexes rows (north is
/// positive), matching the engine's coordinate convention. Positions are
/// plain values; whether a position is actually on the map is a grid
/// query, not a property of the point.
///
/// # Examples
///
/// ```
/// use mantle_core::Point;
///
/// let a = Point::new(0, 0);
/// let b = Point::new(1, 2);
/// assert_eq!(a.manhattan(b), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column index, east positive.
    pub x: i32,
    /// Row index, north positive.
    pub y: i32,
}

impl Point {
    /// Create a point from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(&self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The offset that moves `self` onto `other`.
    pub fn offset_to(&self, other: Point) -> Offset {
        Offset::new(other.x - self.x, other.y - self.y)
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A relative cell offset, e.g. an attached manipulator position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    /// Column delta, east positive.
    pub dx: i32,
    /// Row delta, north positive.
    pub dy: i32,
}

impl Offset {
    /// Create an offset from column and row deltas.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn manhattan_examples() {
        assert_eq!(Point::new(0, 0).manhattan(Point::new(1, 2)), 3);
        assert_eq!(Point::new(3, 3).manhattan(Point::new(4, 4)), 2);
        assert_eq!(Point::new(-2, 5).manhattan(Point::new(1, -1)), 9);
        assert_eq!(Point::new(7, 7).manhattan(Point::new(7, 7)), 0);
    }

    #[test]
    fn offset_to_round_trips_through_add() {
        let a = Point::new(2, -3);
        let b = Point::new(-1, 4);
        assert_eq!(a + a.offset_to(b), b);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Point::new(3, -4).to_string(), "(3,-4)");
        assert_eq!(Offset::new(-1, 2).to_string(), "(-1,2)");
    }

    proptest! {
        #[test]
        fn manhattan_is_metric(
            ax in -100i32..100, ay in -100i32..100,
            bx in -100i32..100, by in -100i32..100,
            cx in -100i32..100, cy in -100i32..100,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            let c = Point::new(cx, cy);
            prop_assert_eq!(a.manhattan(a), 0);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert!(a.manhattan(c) <= a.manhattan(b) + b.manhattan(c));
        }
    }
}

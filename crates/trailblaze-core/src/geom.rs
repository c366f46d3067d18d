//! Grid coordinates: [`Point`] and the rectangle [`Range`].
//!
//! Grid worlds use `Point` directly as their vertex type, so it is `Copy`,
//! hashable and totally ordered (row-major: `y` first, then `x`).

use std::cmp::Ordering;
use std::fmt;

/// Offsets of the four cardinal directions: up, right, down, left.
const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Offsets of all eight directions, clockwise from up.
const COMPASS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// A grid cell. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four cardinal neighbours, clockwise from up.
    pub fn neighbors_4(self) -> [Point; 4] {
        CARDINAL.map(|(dx, dy)| self.shift(dx, dy))
    }

    /// All eight neighbours, clockwise from up.
    pub fn neighbors_8(self) -> [Point; 8] {
        COMPASS.map(|(dx, dy)| self.shift(dx, dy))
    }

    /// Per-axis absolute distance to `other`.
    #[inline]
    pub fn delta(self, other: Point) -> (i32, i32) {
        ((other.x - self.x).abs(), (other.y - self.y).abs())
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A rectangle of cells from `min` (inclusive) to `max` (exclusive).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Rectangle spanned by two corners, in either order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Row-major offset of `p`, `None` when outside.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            (p.y - self.min.y) as usize * self.width() as usize + (p.x - self.min.x) as usize
        })
    }

    /// Every cell in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Point> + Clone {
        let (xs, ys) = (self.min.x..self.max.x, self.min.y..self.max.y);
        ys.flat_map(move |y| xs.clone().map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at {}", self.width(), self.height(), self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_are_adjacent_and_distinct() {
        let p = Point::new(5, 5);
        for n in p.neighbors_4() {
            let (dx, dy) = p.delta(n);
            assert_eq!(dx + dy, 1);
        }
        let ring = p.neighbors_8();
        for (i, n) in ring.iter().enumerate() {
            let (dx, dy) = p.delta(*n);
            assert_eq!(dx.max(dy), 1);
            assert!(!ring[..i].contains(n));
        }
        assert_eq!(p.neighbors_4()[0], Point::new(5, 4));
    }

    #[test]
    fn points_order_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(2, 0), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 1)]);
        assert_eq!(Point::new(3, -2).to_string(), "3,-2");
    }

    #[test]
    fn corners_in_any_order() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r, Range::new(0, 0, 3, 2));
        assert_eq!((r.width(), r.height(), r.len()), (3, 2, 6));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, -1)));
    }

    #[test]
    fn index_matches_iteration_order() {
        let r = Range::new(1, 1, 4, 3);
        assert_eq!(r.index(Point::new(3, 1)), Some(2));
        assert_eq!(r.index(Point::new(1, 2)), Some(3));
        assert_eq!(r.index(Point::new(0, 0)), None);
        let cells: Vec<Point> = r.iter().collect();
        assert_eq!(cells.len(), r.len());
        for (i, p) in cells.into_iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
        }
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        let r = Range::new(2, 0, 2, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }
}

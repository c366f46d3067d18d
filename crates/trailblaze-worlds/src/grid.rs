//! A dense 2D grid of copyable values.
//!
//! Storage is a single row-major `Vec<T>` addressed through a [`Range`]
//! anchored at the origin.

use trailblaze_core::{Point, Range};

/// A `width x height` grid of `T` values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    bounds: Range,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid filled with `fill`. Negative sizes are treated as zero.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            cells: vec![fill; bounds.len()],
        }
    }

    /// Build a grid from row-major `cells`. Returns `None` if the length
    /// does not match `width * height`.
    pub fn from_cells(width: i32, height: i32, cells: Vec<T>) -> Option<Self> {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        (cells.len() == bounds.len()).then_some(Self { bounds, cells })
    }

    /// The grid rectangle, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Value at `p`, or `None` when out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Set the value at `p`. Returns `false` when out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, v: T) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = v;
                true
            }
            None => false,
        }
    }

    /// Row-major iterator over `(point, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Number of cells equal to `v`.
    pub fn count(&self, v: T) -> usize {
        self.cells.iter().filter(|&&c| c == v).count()
    }
}

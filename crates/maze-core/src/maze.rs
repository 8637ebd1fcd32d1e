//! The [`Maze`] grid model: dimensions, blocked cells, start and end.

use crate::error::MazeError;
use crate::geom::{Point, Range};

/// Fixed neighbor probe order: down, up, right, left.
///
/// This order decides which shortest path is "the" displayed path and the
/// order in which path counting discovers cells, so it is part of the
/// observable behavior and must not change.
pub const PROBE_DIRS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// A rectangular maze: a grid of cells, some blocked, with a fixed start at
/// the top-left corner and end at the bottom-right corner.
///
/// Blocked flags are kept in a flat row-major buffer. The maze is only
/// mutated during loading; all analysis takes it by shared reference.
#[derive(Debug, Clone)]
pub struct Maze {
    bounds: Range,
    blocked: Vec<bool>,
    width: usize,
}

impl Maze {
    /// Create an all-open maze with the given dimensions.
    ///
    /// Rejects non-positive dimensions with
    /// [`MazeError::InvalidDimensions`].
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        if rows <= 0 || cols <= 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let bounds = Range::new(0, 0, cols, rows);
        Ok(Self {
            bounds,
            blocked: vec![false; bounds.len()],
            width: cols as usize,
        })
    }

    /// The bounding range of the maze (origin at (0, 0)).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// The start cell (top-left corner).
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The end cell (bottom-right corner).
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.cols() - 1, self.rows() - 1)
    }

    /// Whether `p` lies inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Whether the cell at `p` is blocked.
    ///
    /// Fails with [`MazeError::OutOfRange`] for points outside the bounds.
    pub fn is_blocked(&self, p: Point) -> Result<bool, MazeError> {
        match self.idx(p) {
            Some(i) => Ok(self.blocked[i]),
            None => Err(MazeError::OutOfRange(p)),
        }
    }

    /// Mark the cell at `p` as blocked.
    ///
    /// Out-of-range points are silently ignored, matching the loader's
    /// tolerance for stray coordinates in maze files.
    pub fn block(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.blocked[i] = true;
        }
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_positive_dims() {
        assert!(matches!(
            Maze::new(0, 5),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            Maze::new(3, -1),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn start_and_end_corners() {
        let maze = Maze::new(4, 7).unwrap();
        assert_eq!(maze.start(), Point::new(0, 0));
        assert_eq!(maze.end(), Point::new(6, 3));
        assert_eq!(maze.rows(), 4);
        assert_eq!(maze.cols(), 7);
    }

    #[test]
    fn block_and_query() {
        let mut maze = Maze::new(3, 3).unwrap();
        let p = Point::new(1, 2);
        assert_eq!(maze.is_blocked(p).unwrap(), false);
        maze.block(p);
        assert_eq!(maze.is_blocked(p).unwrap(), true);
        assert_eq!(maze.blocked_count(), 1);
    }

    #[test]
    fn block_ignores_out_of_range() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.block(Point::new(5, 5));
        maze.block(Point::new(-1, 0));
        assert_eq!(maze.blocked_count(), 0);
    }

    #[test]
    fn is_blocked_out_of_range_errors() {
        let maze = Maze::new(2, 2).unwrap();
        assert!(matches!(
            maze.is_blocked(Point::new(2, 0)),
            Err(MazeError::OutOfRange(_))
        ));
    }

    #[test]
    fn probe_order_is_down_up_right_left() {
        assert_eq!(
            PROBE_DIRS,
            [
                Point::new(0, 1),
                Point::new(0, -1),
                Point::new(1, 0),
                Point::new(-1, 0),
            ]
        );
    }
}

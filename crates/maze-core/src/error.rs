//! Error type shared across the workspace.
//!
//! A maze that turns out to be not passable is *not* an error anywhere in
//! this workspace; it is a normal verdict reported by the solver.

use thiserror::Error;

use crate::geom::Point;

/// Errors produced when building or querying a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The maze dimensions are non-positive.
    #[error("invalid maze dimensions: {rows} x {cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    /// A cell outside the grid bounds was queried. Traversal code is
    /// expected to bounds-check before querying, so this surfacing
    /// indicates a bug in neighbor generation or loader filtering.
    #[error("cell {0} is outside the maze bounds")]
    OutOfRange(Point),

    /// Reading the maze file failed.
    #[error("failed to read maze: {0}")]
    Io(#[from] std::io::Error),
}

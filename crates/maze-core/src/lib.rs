//! **maze-core** — grid maze model and supporting types.
//!
//! This crate provides the foundation the rest of the workspace builds on:
//! geometry primitives, the [`Maze`] grid model with its fixed neighbor
//! probe order, the tolerant maze-file loader, and the RGB/HSV color type
//! with the progress-color mapping used when displaying a solution.

pub mod color;
pub mod error;
pub mod geom;
pub mod loader;
pub mod maze;

pub use color::{Color, progress_color};
pub use error::MazeError;
pub use geom::{Point, Range};
pub use loader::{load_maze, load_maze_file};
pub use maze::{Maze, PROBE_DIRS};

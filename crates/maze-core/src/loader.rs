//! Maze file loader.
//!
//! The format is a stream of whitespace-separated integers: the first two
//! are `rows` and `cols`, and every following pair `r c` marks a blocked
//! cell. Parsing is deliberately tolerant: out-of-range pairs are ignored,
//! and consumption stops at the first token that is not an integer (a
//! trailing unpaired integer is dropped).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::error::MazeError;
use crate::geom::Point;
use crate::maze::Maze;

/// Load a maze from any reader.
pub fn load_maze<R: Read>(mut reader: R) -> Result<Maze, MazeError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut ints = text
        .split_whitespace()
        .map_while(|tok| tok.parse::<i32>().ok());

    let rows = ints.next().unwrap_or(0);
    let cols = ints.next().unwrap_or(0);
    let mut maze = Maze::new(rows, cols)?;

    while let (Some(r), Some(c)) = (ints.next(), ints.next()) {
        // block() drops out-of-range coordinates.
        maze.block(Point::new(c, r));
    }

    info!(
        "loaded {}x{} maze with {} blocked cells",
        maze.rows(),
        maze.cols(),
        maze.blocked_count()
    );
    Ok(maze)
}

/// Load a maze from a file on disk.
pub fn load_maze_file(path: impl AsRef<Path>) -> Result<Maze, MazeError> {
    load_maze(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_dimensions_and_walls() {
        let maze = load_maze("3 4\n0 1\n2 3\n".as_bytes()).unwrap();
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 4);
        assert!(maze.is_blocked(Point::new(1, 0)).unwrap());
        assert!(maze.is_blocked(Point::new(3, 2)).unwrap());
        assert_eq!(maze.blocked_count(), 2);
    }

    #[test]
    fn zero_dimension_is_invalid() {
        assert!(matches!(
            load_maze("0 7".as_bytes()),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            load_maze("7 0".as_bytes()),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(
            load_maze("".as_bytes()),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn out_of_range_pairs_are_ignored() {
        let maze = load_maze("2 2\n9 9\n-1 0\n1 1\n".as_bytes()).unwrap();
        assert_eq!(maze.blocked_count(), 1);
        assert!(maze.is_blocked(Point::new(1, 1)).unwrap());
    }

    #[test]
    fn stops_at_first_non_integer_token() {
        let maze = load_maze("2 3\n0 1\ngarbage 1 2\n".as_bytes()).unwrap();
        assert_eq!(maze.blocked_count(), 1);
        assert!(maze.is_blocked(Point::new(1, 0)).unwrap());
    }

    #[test]
    fn trailing_unpaired_integer_is_dropped() {
        let maze = load_maze("2 2\n0 1\n1\n".as_bytes()).unwrap();
        assert_eq!(maze.blocked_count(), 1);
    }
}

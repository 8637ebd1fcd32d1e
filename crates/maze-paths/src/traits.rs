use maze_core::{Maze, PROBE_DIRS, Point};

/// Grid topology as seen by the solver.
pub trait Pather {
    /// Append the in-bounds, unblocked 4-neighbors of `p` into `buf`, in
    /// probe order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether the in-bounds point `p` is blocked.
    fn blocked(&self, p: Point) -> bool;
}

impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in PROBE_DIRS {
            let n = p + d;
            if matches!(self.is_blocked(n), Ok(false)) {
                buf.push(n);
            }
        }
    }

    fn blocked(&self, p: Point) -> bool {
        self.is_blocked(p).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_probe_order() {
        let maze = Maze::new(3, 3).unwrap();
        let mut buf = Vec::new();
        maze.neighbors(Point::new(1, 1), &mut buf);
        // Down, up, right, left.
        assert_eq!(
            buf,
            vec![
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.block(Point::new(1, 0));
        let mut buf = Vec::new();
        maze.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);
    }
}

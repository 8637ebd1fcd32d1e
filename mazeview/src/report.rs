//! Human-readable result text.

use num_bigint::BigUint;
use num_traits::One;

use maze_core::Point;

/// Insert thousands separators into a decimal digit string.
pub fn thousands(digits: &str) -> String {
    let mut s = digits.to_string();
    let mut i = s.len() as isize - 3;
    while i > 0 {
        s.insert(i as usize, ',');
        i -= 3;
    }
    s
}

/// The verdict line for an impassable maze.
pub fn not_passable() -> &'static str {
    "The maze is not passable."
}

/// The summary line for a passable maze.
///
/// `name` is the stem of the maze file the result belongs to.
pub fn summary(count: &BigUint, path_len: u32, start: Point, end: Point, name: &str) -> String {
    let head = if count.is_one() {
        "There is one path".to_string()
    } else {
        format!("There are {} paths", thousands(&count.to_string()))
    };
    format!("{head} of length {path_len} going from {start} to {end} in {name}!")
}

//! Random maze file generator, for producing demo inputs.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use log::info;
use rand::{Rng, RngExt};

/// Write a random `rows` x `cols` maze to `path` in the loader's format.
///
/// Each cell is blocked with probability `wall_pct`, except the start and
/// end corners, which stay open so the result has a chance of being
/// passable.
pub fn generate(
    rows: i32,
    cols: i32,
    wall_pct: f64,
    path: impl AsRef<Path>,
    rng: &mut impl Rng,
) -> io::Result<()> {
    let mut out = format!("{rows} {cols}\n");
    let mut walls = 0usize;
    for r in 0..rows {
        for c in 0..cols {
            if r == 0 && c == 0 || r == rows - 1 && c == cols - 1 {
                continue;
            }
            if rng.random_bool(wall_pct) {
                let _ = writeln!(out, "{r} {c}");
                walls += 1;
            }
        }
    }
    fs::write(path.as_ref(), out)?;
    info!(
        "generated {rows}x{cols} maze with {walls} walls at {}",
        path.as_ref().display()
    );
    Ok(())
}

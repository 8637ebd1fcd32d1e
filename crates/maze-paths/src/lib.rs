//! **maze-paths** — the maze analysis core.
//!
//! Three stages, all driven by the fixed probe order of
//! [`maze_core::PROBE_DIRS`]:
//!
//! - **distance map** ([`Solver::distance_map`]): multi-source BFS labeling
//!   every reachable cell with its step count to the sources.
//! - **path counting** ([`Solver::count_paths`]): exact, arbitrary-precision
//!   count of distinct minimum-length paths (counts grow exponentially with
//!   grid area, so fixed-width integers are not an option).
//! - **solution walking** ([`Solver::walker`]): a lazy sequence of timed
//!   [`RevealEvent`]s describing one shortest path, or every shortest path,
//!   for a rendering collaborator to play back.
//!
//! [`Solver`] owns and reuses its internal buffers, so solving several
//! mazes of similar size incurs no allocations after warm-up.

mod solver;
mod traits;
mod walk;

pub use solver::Solver;
pub use traits::Pather;
pub use walk::{DEFAULT_BUDGET, RevealEvent, WalkConfig, WalkMode, Walker, step_delay};

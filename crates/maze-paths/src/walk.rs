//! Solution walking: a lazy, timed sequence of [`RevealEvent`]s.
//!
//! The walk is an explicit iterator; a rendering collaborator consumes it
//! and owns the clock. In [`WalkMode::All`], every cell of a given distance
//! rank should appear one step after the previous rank, however many
//! branches are in flight, so intra-rank events carry a zero delay and the
//! step delay sits on the last event of each rank.

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use maze_core::Point;

use crate::solver::Solver;
use crate::traits::Pather;

/// Default total animation budget.
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(3);

/// A timed instruction to visually mark one cell of the solution.
///
/// `delay` is the pause to apply *after* the cell is displayed, before the
/// next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealEvent {
    pub pos: Point,
    pub dist_to_end: u32,
    pub delay: Duration,
}

/// Which shortest paths the walk reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// One deterministic path: at every cell, step to the first probe-order
    /// neighbor one step closer to the end.
    #[default]
    First,
    /// Every shortest path, branching at every tie. The visited set is
    /// shared across branches, so a cell reachable on several branches is
    /// revealed once, by whichever branch gets there first.
    All,
}

/// Walk configuration.
#[derive(Debug, Clone, Copy)]
pub struct WalkConfig {
    pub mode: WalkMode,
    /// Total animation budget, split evenly over the path steps.
    pub budget: Duration,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            mode: WalkMode::First,
            budget: DEFAULT_BUDGET,
        }
    }
}

/// Per-step delay for a walk of the given path length.
///
/// The budget is split evenly over short paths; paths of 100 steps or more
/// get a fixed minimal delay instead. A zero-length walk (start equals end)
/// spends the whole budget on its single event.
pub fn step_delay(path_len: u32, budget: Duration) -> Duration {
    if path_len == 0 {
        budget
    } else if path_len < 100 {
        budget / path_len
    } else {
        Duration::from_millis(1)
    }
}

impl Solver {
    /// Lazily walk the shortest path(s) from `from`, emitting one
    /// [`RevealEvent`] per revealed cell.
    ///
    /// Requires a prior [`distance_map`](Solver::distance_map) call seeded
    /// at the walk target. When `from` carries no distance label the walk
    /// is empty; callers normally short-circuit on the passable verdict
    /// before getting here.
    pub fn walker<'a, P: Pather>(
        &'a self,
        pather: &'a P,
        from: Point,
        config: WalkConfig,
    ) -> Walker<'a, P> {
        let mut queue = VecDeque::new();
        let mut path_len = 0;
        if let Some(d) = self.dist_at(from) {
            queue.push_back((from, d));
            path_len = d;
        }
        Walker {
            solver: self,
            pather,
            mode: config.mode,
            step: step_delay(path_len, config.budget),
            path_len,
            queue,
            seen: HashSet::new(),
            nbuf: Vec::with_capacity(4),
        }
    }
}

/// Lazy iterator over the reveal events of one walk. See
/// [`Solver::walker`].
pub struct Walker<'a, P: Pather> {
    solver: &'a Solver,
    pather: &'a P,
    mode: WalkMode,
    step: Duration,
    path_len: u32,
    queue: VecDeque<(Point, u32)>,
    seen: HashSet<Point>,
    nbuf: Vec<Point>,
}

impl<P: Pather> Walker<'_, P> {
    /// Total length of the walked path, for the progress-color mapping.
    #[inline]
    pub fn path_len(&self) -> u32 {
        self.path_len
    }
}

impl<P: Pather> Iterator for Walker<'_, P> {
    type Item = RevealEvent;

    fn next(&mut self) -> Option<RevealEvent> {
        let (p, d) = loop {
            let (p, d) = self.queue.pop_front()?;
            if matches!(self.mode, WalkMode::All) && !self.seen.insert(p) {
                continue;
            }
            break (p, d);
        };

        // Enqueue the downhill successors.
        if d > 0 {
            self.nbuf.clear();
            self.pather.neighbors(p, &mut self.nbuf);
            match self.mode {
                WalkMode::First => {
                    let next = self
                        .nbuf
                        .iter()
                        .copied()
                        .find(|&n| self.solver.dist_at(n) == Some(d - 1));
                    if let Some(n) = next {
                        self.queue.push_back((n, d - 1));
                    }
                }
                WalkMode::All => {
                    for &n in &self.nbuf {
                        if self.solver.dist_at(n) == Some(d - 1) && !self.seen.contains(&n) {
                            self.queue.push_back((n, d - 1));
                        }
                    }
                }
            }
        }

        // Drop already-revealed duplicates so the rank-boundary test below
        // sees the next cell that will actually be emitted.
        if matches!(self.mode, WalkMode::All) {
            while let Some(&(q, _)) = self.queue.front() {
                if self.seen.contains(&q) {
                    self.queue.pop_front();
                } else {
                    break;
                }
            }
        }

        let delay = match self.queue.front() {
            Some(&(_, dq)) if dq == d => Duration::ZERO,
            _ => self.step,
        };
        Some(RevealEvent {
            pos: p,
            dist_to_end: d,
            delay,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn reveal_event_round_trip() {
        let ev = RevealEvent {
            pos: Point::new(3, 7),
            dist_to_end: 42,
            delay: Duration::from_millis(30),
        };
        let json = serde_json::to_string(&ev).unwrap();
        let back: RevealEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}

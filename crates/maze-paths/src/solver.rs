//! The [`Solver`]: distance maps and exact path counting.

use std::collections::VecDeque;

use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use maze_core::{PROBE_DIRS, Point, Range};

use crate::traits::Pather;

/// Central coordinator for maze analysis on a grid rectangle.
///
/// Owns all internal buffers (distance map, count map, seen bitmap, queues,
/// neighbor scratch) so that repeated queries incur no allocations after
/// warm-up. Distances are held as `Option<u32>` rather than a sentinel
/// value, so arithmetic on "unreachable" is impossible by construction.
pub struct Solver {
    rng: Range,
    width: usize,
    dist: Vec<Option<u32>>,
    count: Vec<BigUint>,
    seen: Vec<bool>,
    dist_queue: VecDeque<(Point, u32)>,
    count_queue: VecDeque<Point>,
    // shared scratch buffer for neighbor queries
    nbuf: Vec<Point>,
}

impl Solver {
    /// Create a new `Solver` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            dist: vec![None; len],
            count: vec![BigUint::zero(); len],
            seen: vec![false; len],
            dist_queue: VecDeque::new(),
            count_queue: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating buffers only when the new
    /// size exceeds the current capacity.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if new_len > self.dist.len() {
            self.dist.resize(new_len, None);
            self.count.resize(new_len, BigUint::zero());
            self.seen.resize(new_len, false);
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    // -----------------------------------------------------------------------
    // Distance map
    // -----------------------------------------------------------------------

    /// Compute a multi-source BFS distance map.
    ///
    /// Each step has cost 1, so the labels are exact shortest distances.
    /// A popped point is skipped when it is out of range, already labeled,
    /// or blocked; otherwise it is labeled and all four raw probe-order
    /// neighbors are enqueued without pre-validation. Validity is rechecked
    /// on pop; the speculative enqueue keeps the FIFO labeling order
    /// stable, which downstream tie-breaking depends on.
    pub fn distance_map<P: Pather>(&mut self, pather: &P, sources: &[Point]) {
        for v in self.dist.iter_mut() {
            *v = None;
        }
        self.dist_queue.clear();
        for &src in sources {
            self.dist_queue.push_back((src, 0));
        }

        let mut labeled = 0usize;
        while let Some((p, d)) = self.dist_queue.pop_front() {
            let Some(i) = self.idx(p) else {
                continue;
            };
            if self.dist[i].is_some() || pather.blocked(p) {
                continue;
            }
            self.dist[i] = Some(d);
            labeled += 1;
            for dir in PROBE_DIRS {
                self.dist_queue.push_back((p + dir, d + 1));
            }
        }
        debug!("distance map labeled {labeled} of {} cells", self.rng.len());
    }

    /// Query the distance at a specific point.
    ///
    /// `None` means the point is outside the range, blocked, or was not
    /// reached by the last [`distance_map`](Self::distance_map) call.
    #[inline]
    pub fn dist_at(&self, p: Point) -> Option<u32> {
        self.dist.get(self.idx(p)?).copied().flatten()
    }

    // -----------------------------------------------------------------------
    // Path counting
    // -----------------------------------------------------------------------

    /// Count the distinct minimum-length paths from `from` to `to`.
    ///
    /// Requires a prior [`distance_map`](Self::distance_map) call seeded at
    /// `to`: when `from` is blocked or carries no distance label, the maze
    /// is not passable and the whole count field stays zero.
    ///
    /// The BFS visits cells in non-decreasing distance from `from`. When a
    /// cell is popped for the first time, every already-seen neighbor is
    /// exactly one level closer to `from` (grid adjacency changes parity,
    /// so equal levels cannot be adjacent) and contributes its count.
    /// Work queued after `to` is finalized is abandoned; those cells cannot
    /// affect the result.
    pub fn count_paths<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> BigUint {
        for v in self.count.iter_mut() {
            v.set_zero();
        }
        for v in self.seen.iter_mut() {
            *v = false;
        }

        let Some(si) = self.idx(from) else {
            return BigUint::zero();
        };
        if pather.blocked(from) || self.dist[si].is_none() {
            return BigUint::zero();
        }

        self.count[si] = BigUint::one();
        self.count_queue.clear();
        self.count_queue.push_back(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        while let Some(p) = self.count_queue.pop_front() {
            let Some(i) = self.idx(p) else {
                continue;
            };
            if self.seen[i] {
                continue;
            }
            self.seen[i] = true;

            nbuf.clear();
            pather.neighbors(p, &mut nbuf);
            for &n in nbuf.iter() {
                let Some(ni) = self.idx(n) else {
                    continue;
                };
                if self.seen[ni] {
                    let upstream = self.count[ni].clone();
                    self.count[i] += upstream;
                } else {
                    self.count_queue.push_back(n);
                }
            }

            if p == to {
                break;
            }
        }
        self.nbuf = nbuf;

        match self.idx(to) {
            Some(gi) => self.count[gi].clone(),
            None => BigUint::zero(),
        }
    }

    /// Query the path count at a specific point from the last
    /// [`count_paths`](Self::count_paths) call. Cells past the early
    /// termination point keep a zero count.
    pub fn count_at(&self, p: Point) -> BigUint {
        match self.idx(p) {
            Some(i) => self.count[i].clone(),
            None => BigUint::zero(),
        }
    }
}

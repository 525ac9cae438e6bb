//! Shortest paths over the navigation graph.
//!
//! # Random tie-breaking
//!
//! A plain Dijkstra with a deterministic secondary key always picks the same
//! path between two cells of a symmetric grid, which makes every robot walk
//! the same L-shaped route.  Here each heap entry carries a random key drawn
//! when it is pushed, so among the unvisited nodes at the minimum distance the
//! next one to settle is chosen uniformly at random.  With a seeded RNG the
//! result stays reproducible.
//!
//! # Solver state
//!
//! The per-node `visited` / `distance` / `previous` bookkeeping lives in a
//! [`Search`] value owned by the caller, so queries only need `&Graph` and
//! several searches never interfere.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::Rng;

use chase_core::NodeId;

use crate::graph::Graph;

// ── Visit ─────────────────────────────────────────────────────────────────────

/// Solver state of one node after a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Visit {
    pub visited:  bool,
    /// `u32::MAX` while unreached.
    pub distance: u32,
    pub previous: Option<NodeId>,
}

impl Visit {
    const UNREACHED: Visit = Visit { visited: false, distance: u32::MAX, previous: None };

    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance != u32::MAX
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Outcome of one single-source search from `start` toward `target`.
#[derive(Clone, Debug)]
pub struct Search {
    pub start:  NodeId,
    pub target: NodeId,
    visits:     Vec<Visit>,
    found:      bool,
}

impl Search {
    /// `true` when `target` was reached.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Solver state of `node`; unreached for ids outside the graph.
    pub fn visit(&self, node: NodeId) -> Visit {
        self.visits.get(node.index()).copied().unwrap_or(Visit::UNREACHED)
    }

    /// Distance of `node` from `start`, if it was reached.
    pub fn distance(&self, node: NodeId) -> Option<u32> {
        let v = self.visit(node);
        v.is_reached().then_some(v.distance)
    }

    /// The node sequence `start → … → target`, or `[start]` when the target
    /// was not reached.
    pub fn path(&self) -> Vec<NodeId> {
        if !self.found {
            return vec![self.start];
        }
        let mut path = vec![self.target];
        let mut cur = self.target;
        while cur != self.start {
            let Some(prev) = self.visit(cur).previous else {
                break;
            };
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

impl Graph {
    /// Run Dijkstra from `start` until `target` is settled or every reachable
    /// node has been visited.
    pub fn search<R: Rng + ?Sized>(&self, start: NodeId, target: NodeId, rng: &mut R) -> Search {
        let mut visits = vec![Visit::UNREACHED; self.capacity()];
        let mut found = false;

        if self.node(start).is_some() {
            visits[start.index()].distance = 0;

            // Min-heap on (distance, random tie key, node).
            let mut heap: BinaryHeap<Reverse<(u32, u64, NodeId)>> = BinaryHeap::new();
            heap.push(Reverse((0, rng.next_u64(), start)));

            while let Some(Reverse((dist, _, node))) = heap.pop() {
                // Skip stale heap entries.
                if visits[node.index()].visited {
                    continue;
                }
                visits[node.index()].visited = true;

                if node == target {
                    found = true;
                    break;
                }

                for (_, edge) in self.edges_of(node) {
                    let next = edge.to;
                    let cost = dist.saturating_add(edge.distance);
                    let visit = &mut visits[next.index()];
                    if !visit.visited && cost < visit.distance {
                        visit.distance = cost;
                        visit.previous = Some(node);
                        heap.push(Reverse((cost, rng.next_u64(), next)));
                    }
                }
            }
        }

        Search { start, target, visits, found }
    }

    /// Shortest path `start → … → target` with random tie-breaking.
    ///
    /// Consecutive entries are always joined by an edge.  The result has one
    /// element exactly when `start == target` or `target` is unreachable, in
    /// which case it is `[start]`.
    pub fn find_path<R: Rng + ?Sized>(&self, start: NodeId, target: NodeId, rng: &mut R) -> Vec<NodeId> {
        let path = self.search(start, target, rng).path();
        log::trace!("path {start} -> {target}: {} nodes", path.len());
        path
    }
}

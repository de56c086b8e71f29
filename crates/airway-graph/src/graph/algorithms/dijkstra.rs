// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dijkstra's Shortest Path Algorithm.
//!
//! Label-setting search over the route graph with a binary-heap frontier.
//! Leg costs are non-negative by construction, which is what makes the
//! finalize-once discipline sound.

use crate::graph::route_graph::RouteGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Sentinel cost for slots not reached by the search.
pub const UNREACHED: u64 = u64::MAX;

pub struct Dijkstra;

#[derive(Debug, Clone, Default)]
pub struct DijkstraConfig {
    /// Stop as soon as this slot is finalized. The cost and predecessor
    /// tables are then complete only for slots finalized before it.
    pub target: Option<u32>,
}

/// Cost and predecessor tables produced by one search.
pub struct DijkstraResult {
    source: u32,
    cost: Vec<u64>,
    predecessor: Vec<Option<u32>>,
}

impl Dijkstra {
    /// Run a single-source search from `source`.
    ///
    /// The frontier may hold several entries for one slot; entries whose
    /// recorded cost exceeds the slot's current best are superseded and
    /// dropped on pop. Relaxation uses strict improvement, so among
    /// equal-cost ways to a slot the one discovered first keeps the
    /// predecessor, and results are identical between runs on the same
    /// graph.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a valid slot of `graph`. Callers resolve
    /// external ids before reaching this point; an out-of-range slot is a
    /// programming error, not bad input.
    pub fn run(graph: &RouteGraph, source: u32, config: DijkstraConfig) -> DijkstraResult {
        let n = graph.city_count();
        assert!(
            (source as usize) < n,
            "Dijkstra source slot {} out of range for {} cities",
            source,
            n
        );

        let mut cost = vec![UNREACHED; n];
        let mut predecessor: Vec<Option<u32>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        cost[source as usize] = 0;
        heap.push(Reverse((0u64, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            // Stale entry left behind by a later improvement
            if d > cost[u as usize] {
                continue;
            }

            // Early exit for point-to-point
            if config.target == Some(u) {
                break;
            }

            for leg in graph.legs(u) {
                let next = d + leg.cost as u64;
                if next < cost[leg.to as usize] {
                    cost[leg.to as usize] = next;
                    predecessor[leg.to as usize] = Some(u);
                    heap.push(Reverse((next, leg.to)));
                }
            }
        }

        DijkstraResult {
            source,
            cost,
            predecessor,
        }
    }
}

impl DijkstraResult {
    /// Slot the search started from.
    pub fn source(&self) -> u32 {
        self.source
    }

    /// Final cost to reach `slot`, or `None` if it was not reached
    /// (panics if out of bounds).
    #[inline]
    pub fn cost_to(&self, slot: u32) -> Option<u64> {
        let c = self.cost[slot as usize];
        (c != UNREACHED).then_some(c)
    }

    /// Slot relaxed last on the cheapest known way to `slot` (panics if out
    /// of bounds). `None` for the source and for unreached slots.
    #[inline]
    pub fn predecessor(&self, slot: u32) -> Option<u32> {
        self.predecessor[slot as usize]
    }

    /// Reconstruct the cheapest path from the source to `slot` by walking
    /// predecessors backward. Returns `None` if `slot` was not reached.
    pub fn path_to(&self, slot: u32) -> Option<Vec<u32>> {
        if self.cost[slot as usize] == UNREACHED {
            return None;
        }

        let mut path = Vec::new();
        let mut curr = Some(slot);
        while let Some(s) = curr {
            path.push(s);
            if s == self.source {
                break;
            }
            curr = self.predecessor[s as usize];
        }
        path.reverse();
        Some(path)
    }
}

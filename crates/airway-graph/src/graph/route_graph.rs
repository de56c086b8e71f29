// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Adjacency-list storage for the route network.
//!
//! Routes are undirected: every accepted route is stored as two directed
//! legs, one per endpoint. Per-slot leg lists keep insertion order, and
//! parallel routes between the same pair of cities are all retained.

use crate::graph::city_index::CityIndex;
use airway_common::core::id::CityId;
use tracing::{debug, info};

/// One directed half of an undirected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    /// Destination slot
    pub to: u32,
    /// Route cost, non-negative by type
    pub cost: u32,
}

/// Staging structure for [`RouteGraph`].
///
/// Capacity is fixed by the index: one leg list per city slot. Routes whose
/// endpoints are unknown to the index are dropped, not errors.
pub struct RouteGraphBuilder<'a> {
    index: &'a CityIndex,
    adjacency: Vec<Vec<Leg>>,
    added: usize,
    skipped: usize,
}

impl<'a> RouteGraphBuilder<'a> {
    pub fn new(index: &'a CityIndex) -> Self {
        Self {
            index,
            adjacency: vec![Vec::new(); index.len()],
            added: 0,
            skipped: 0,
        }
    }

    /// Stage an undirected route between two external ids.
    ///
    /// Returns whether the route was accepted. A route is dropped when
    /// either endpoint is not in the index.
    pub fn add_route(&mut self, a: CityId, b: CityId, cost: u32) -> bool {
        let (u, v) = match (self.index.slot_of(a), self.index.slot_of(b)) {
            (Some(u), Some(v)) => (u, v),
            _ => {
                debug!(%a, %b, cost, "Skipping route with unknown endpoint");
                self.skipped += 1;
                return false;
            }
        };

        self.adjacency[u as usize].push(Leg { to: v, cost });
        self.adjacency[v as usize].push(Leg { to: u, cost });
        self.added += 1;
        true
    }

    /// Finalize the graph.
    pub fn build(self) -> RouteGraph {
        info!(
            cities = self.index.len(),
            routes = self.added,
            skipped = self.skipped,
            "Route graph built"
        );
        RouteGraph {
            adjacency: self.adjacency,
        }
    }
}

/// Immutable adjacency-list route network, indexed by city slot.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    adjacency: Vec<Vec<Leg>>,
}

impl RouteGraph {
    /// Number of city slots.
    #[inline]
    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed legs (twice the accepted routes).
    pub fn leg_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing legs of a slot, in insertion order (panics if out of bounds).
    #[inline]
    pub fn legs(&self, slot: u32) -> &[Leg] {
        &self.adjacency[slot as usize]
    }

    /// Out-degree of a slot (panics if out of bounds).
    #[inline]
    pub fn degree(&self, slot: u32) -> usize {
        self.adjacency[slot as usize].len()
    }

    /// Iterate over all (from_slot, leg) pairs, slot by slot, legs in
    /// insertion order. Each undirected route shows up twice, once per
    /// direction.
    pub fn iter_legs(&self) -> impl Iterator<Item = (u32, Leg)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(slot, legs)| legs.iter().map(move |&leg| (slot as u32, leg)))
    }
}

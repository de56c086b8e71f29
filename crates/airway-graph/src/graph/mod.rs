// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Route Network Core
//!
//! Three pieces, built once and read-only afterwards:
//!
//! - **CityIndex**: maps sparse external city ids to dense storage slots
//!   and owns the display names.
//! - **RouteGraph**: adjacency-list storage over slots; every undirected
//!   route is held as two directed legs.
//! - **Dijkstra**: label-setting shortest-path search over the graph,
//!   producing cost and predecessor tables.
//!
//! Slots are assigned in load order and stay stable for the lifetime of the
//! network, so algorithm state lives in plain arrays indexed by slot.

pub mod algorithms;
pub mod city_index;
pub mod route_graph;

pub use city_index::{CityEntry, CityIndex, CityIndexBuilder};
pub use route_graph::{Leg, RouteGraph, RouteGraphBuilder};

#[cfg(test)]
pub mod test_utils;

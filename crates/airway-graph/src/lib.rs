// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod graph;

pub use graph::algorithms::dijkstra::{Dijkstra, DijkstraConfig, DijkstraResult, UNREACHED};
pub use graph::city_index::{CityEntry, CityIndex, CityIndexBuilder};
pub use graph::route_graph::{Leg, RouteGraph, RouteGraphBuilder};

// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Native algorithm implementations over the route graph.

pub mod dijkstra;

pub use dijkstra::{Dijkstra, DijkstraConfig, DijkstraResult};

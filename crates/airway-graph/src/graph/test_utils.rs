// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::graph::city_index::{CityIndex, CityIndexBuilder};
use crate::graph::route_graph::{RouteGraph, RouteGraphBuilder};
use airway_common::core::id::CityId;

/// Build an index and graph pair from raw (id, name) and (a, b, cost) rows.
pub fn build_test_network(
    cities: Vec<(u64, &str)>,
    routes: Vec<(u64, u64, u32)>,
) -> (CityIndex, RouteGraph) {
    let mut builder = CityIndexBuilder::with_capacity(cities.len());
    for (id, name) in cities {
        builder.insert(CityId::new(id), name);
    }
    let index = builder.build();

    let graph = {
        let mut builder = RouteGraphBuilder::new(&index);
        for (a, b, cost) in routes {
            builder.add_route(CityId::new(a), CityId::new(b), cost);
        }
        builder.build()
    };

    (index, graph)
}

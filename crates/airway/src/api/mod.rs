// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod history;
pub mod queries;

use airway_common::{AirwayConfig, CityId};
use airway_graph::{CityIndex, CityIndexBuilder, RouteGraph, RouteGraphBuilder};
use history::History;
use parking_lot::Mutex;
use tracing::info;

/// Main entry point for an Airway route network.
///
/// Owns the city index, the route graph and the session history. The index
/// and graph are built once from staged records and read-only afterwards;
/// the history is the only mutable state and is guarded so every query
/// works through `&self`.
///
/// # Examples
///
/// ```
/// use airway::{Airway, CityId};
///
/// fn main() -> airway::Result<()> {
///     let airway = Airway::builder()
///         .city(CityId::new(1), "Alpha")
///         .city(CityId::new(2), "Beta")
///         .city(CityId::new(3), "Gamma")
///         .route(CityId::new(1), CityId::new(2), 5)
///         .route(CityId::new(2), CityId::new(3), 3)
///         .route(CityId::new(1), CityId::new(3), 100)
///         .build();
///
///     let itinerary = airway.cheapest_path(CityId::new(1), CityId::new(3))?;
///     assert_eq!(itinerary.stops, vec!["Alpha", "Beta", "Gamma"]);
///     assert_eq!(itinerary.total_cost, 8);
///     Ok(())
/// }
/// ```
pub struct Airway {
    pub(crate) index: CityIndex,
    pub(crate) graph: RouteGraph,
    pub(crate) history: Mutex<History>,
    pub(crate) config: AirwayConfig,
}

impl Airway {
    /// Start staging a new route network.
    pub fn builder() -> AirwayBuilder {
        AirwayBuilder::new()
    }

    pub(crate) fn record(&self, entry: String) {
        if self.config.history_enabled {
            self.history.lock().record(entry);
        }
    }
}

/// Staged records for building an [`Airway`].
///
/// Cities and routes keep their arrival order; the index assigns slots in
/// that order. Building is infallible: rows that cannot be placed
/// (duplicate ids, unknown route endpoints, entries over the configured
/// cap) are skipped and logged, never errors.
pub struct AirwayBuilder {
    cities: Vec<(CityId, String)>,
    routes: Vec<(CityId, CityId, u32)>,
    config: AirwayConfig,
}

impl AirwayBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            cities: Vec::new(),
            routes: Vec::new(),
            config: AirwayConfig::default(),
        }
    }

    /// Stage one city record.
    #[must_use]
    pub fn city(mut self, id: CityId, name: impl Into<String>) -> Self {
        self.cities.push((id, name.into()));
        self
    }

    /// Stage city records in bulk, keeping their order.
    #[must_use]
    pub fn cities<I, S>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = (CityId, S)>,
        S: Into<String>,
    {
        self.cities
            .extend(records.into_iter().map(|(id, name)| (id, name.into())));
        self
    }

    /// Stage one undirected route record.
    #[must_use]
    pub fn route(mut self, a: CityId, b: CityId, cost: u32) -> Self {
        self.routes.push((a, b, cost));
        self
    }

    /// Stage route records in bulk, keeping their order.
    #[must_use]
    pub fn routes<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = (CityId, CityId, u32)>,
    {
        self.routes.extend(records);
        self
    }

    /// Configure the session using `AirwayConfig`.
    #[must_use]
    pub fn config(mut self, config: AirwayConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the network: index the cities, then resolve and store the
    /// routes against the finished index.
    pub fn build(self) -> Airway {
        let mut index_builder = CityIndexBuilder::with_capacity(self.cities.len())
            .max_cities(self.config.max_cities);
        let mut skipped_cities = 0usize;
        for (id, name) in self.cities {
            if index_builder.insert(id, name).is_none() {
                skipped_cities += 1;
            }
        }
        let index = index_builder.build();

        let graph = {
            let mut graph_builder = RouteGraphBuilder::new(&index);
            for (a, b, cost) in self.routes {
                graph_builder.add_route(a, b, cost);
            }
            graph_builder.build()
        };

        info!(
            cities = index.len(),
            skipped_cities,
            legs = graph.leg_count(),
            "Airway session ready"
        );

        Airway {
            index,
            graph,
            history: Mutex::new(History::new()),
            config: self.config,
        }
    }
}

impl Default for AirwayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Query entry points on [`Airway`].
//!
//! Every query takes `&self`. Successful ones append a line to the session
//! history; failed lookups leave no trace there.

use crate::api::Airway;
use airway_common::{AirwayError, CityId, Result};
use airway_graph::{Dijkstra, DijkstraConfig};
use serde::{Deserialize, Serialize};

/// One directed leg as listed by [`Airway::routes`].
///
/// Borrowed display names; an undirected route shows up as two rows, one
/// per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteRow<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub cost: u32,
}

/// A reconstructed cheapest path: display names from source to destination
/// inclusive, plus the summed leg costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub stops: Vec<String>,
    pub total_cost: u64,
}

impl Airway {
    /// Number of loaded cities.
    pub fn city_count(&self) -> usize {
        self.index.len()
    }

    /// Number of stored directed legs (twice the accepted routes).
    pub fn route_count(&self) -> usize {
        self.graph.leg_count()
    }

    /// List every city as `(id, name)`, in load order.
    pub fn cities(&self) -> Vec<(CityId, &str)> {
        self.record("Viewed all cities".to_string());
        self.index
            .iter()
            .map(|(_, entry)| (entry.id, entry.name.as_str()))
            .collect()
    }

    /// List every stored leg, slot by slot in load order.
    pub fn routes(&self) -> Vec<RouteRow<'_>> {
        self.record("Viewed all routes".to_string());
        self.graph
            .iter_legs()
            .map(|(from, leg)| RouteRow {
                from: self.index.name(from),
                to: self.index.name(leg.to),
                cost: leg.cost,
            })
            .collect()
    }

    /// Display names of every city directly connected to `id`, in route
    /// load order. Parallel routes produce repeated names.
    pub fn direct_connections(&self, id: CityId) -> Result<Vec<&str>> {
        let slot = self
            .index
            .slot_of(id)
            .ok_or(AirwayError::CityNotFound { id })?;

        let names: Vec<&str> = self
            .graph
            .legs(slot)
            .iter()
            .map(|leg| self.index.name(leg.to))
            .collect();

        self.record(format!(
            "Viewed direct connections of {}",
            self.index.name(slot)
        ));
        Ok(names)
    }

    /// Find the cheapest path between two cities.
    ///
    /// Endpoints are checked in order, so an unknown source is reported as
    /// [`AirwayError::SourceNotFound`] even when the destination is also
    /// unknown. Two valid endpoints with no connecting routes yield
    /// [`AirwayError::NoRoute`]. A city trivially reaches itself at cost 0.
    pub fn cheapest_path(&self, from: CityId, to: CityId) -> Result<Itinerary> {
        let source = self
            .index
            .slot_of(from)
            .ok_or(AirwayError::SourceNotFound { id: from })?;
        let dest = self
            .index
            .slot_of(to)
            .ok_or(AirwayError::DestinationNotFound { id: to })?;

        let result = Dijkstra::run(&self.graph, source, DijkstraConfig { target: Some(dest) });

        let total_cost = result
            .cost_to(dest)
            .ok_or(AirwayError::NoRoute { from, to })?;
        // Reconstruction cannot fail once the destination has a finite cost
        let slots = result
            .path_to(dest)
            .ok_or(AirwayError::NoRoute { from, to })?;

        let stops: Vec<String> = slots
            .into_iter()
            .map(|slot| self.index.name(slot).to_string())
            .collect();

        self.record(format!(
            "Found cheapest path from {} to {}",
            self.index.name(source),
            self.index.name(dest)
        ));

        Ok(Itinerary { stops, total_cost })
    }

    /// Session history, newest first. Viewing the history is itself never
    /// recorded.
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .newest_first()
            .map(str::to_string)
            .collect()
    }

    /// Drop every history entry.
    pub fn clear_history(&self) {
        self.history.lock().clear();
    }
}

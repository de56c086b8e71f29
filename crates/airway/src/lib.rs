// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! # Airway - Route Network Query Engine
//!
//! Airway models a network of cities connected by weighted bidirectional
//! routes and answers two questions: what connects directly to a city, and
//! what is the cheapest way from one city to another. Successful queries
//! are recorded in a session history viewable newest-first.

pub mod api;

pub use api::history::History;
pub use api::queries::{Itinerary, RouteRow};
pub use api::{Airway, AirwayBuilder};

// Re-exports from internal crates
pub use airway_common::{AirwayConfig, AirwayError, CityId, Result};
pub use airway_graph::{CityEntry, CityIndex, Leg, RouteGraph};

// Re-export crates
pub use airway_common as common;
pub use airway_graph as graph;

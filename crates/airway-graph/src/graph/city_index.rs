// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between sparse city ids and dense storage slots.
//!
//! The route graph and the shortest-path engine want dense integer indices
//! (0..N) for array-based state. Input data carries sparse externally
//! assigned ids. This module provides the mapping in both directions, plus
//! the display name owned by each slot.

use airway_common::core::id::CityId;
use fxhash::FxHashMap;
use tracing::warn;

/// A loaded city: external id plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityEntry {
    pub id: CityId,
    pub name: String,
}

/// Staging structure for [`CityIndex`].
///
/// Entries are assigned slots in insertion order. Duplicate ids keep the
/// first entry; later ones are skipped with a warning and get no slot.
#[derive(Debug, Default)]
pub struct CityIndexBuilder {
    entries: Vec<CityEntry>,
    id_to_slot: FxHashMap<CityId, u32>,
    max_cities: Option<usize>,
}

impl CityIndexBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            id_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            max_cities: None,
        }
    }

    /// Cap the number of accepted cities. Entries past the cap are skipped
    /// with a warning.
    #[must_use]
    pub fn max_cities(mut self, cap: Option<usize>) -> Self {
        self.max_cities = cap;
        self
    }

    /// Stage a city and return its slot, or `None` if the entry was skipped
    /// (duplicate id, or over the cap).
    pub fn insert(&mut self, id: CityId, name: impl Into<String>) -> Option<u32> {
        if let Some(&slot) = self.id_to_slot.get(&id) {
            warn!(%id, slot, "Duplicate city id, keeping first entry");
            return None;
        }
        if let Some(cap) = self.max_cities {
            if self.entries.len() >= cap {
                warn!(%id, cap, "City capacity reached, skipping entry");
                return None;
            }
        }

        let slot = self.entries.len() as u32;
        self.entries.push(CityEntry {
            id,
            name: name.into(),
        });
        self.id_to_slot.insert(id, slot);
        Some(slot)
    }

    /// Number of staged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been staged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finalize the index.
    ///
    /// The staging hash map is dropped; id lookups on the built index go
    /// through a table sorted once here.
    pub fn build(self) -> CityIndex {
        let mut by_id: Vec<(CityId, u32)> = self.id_to_slot.into_iter().collect();
        by_id.sort_unstable_by_key(|&(id, _)| id);
        CityIndex {
            entries: self.entries,
            by_id,
        }
    }
}

/// Build-once, read-only index of cities.
///
/// Slot order is insertion order. Id lookup is binary search over a sorted
/// `(id, slot)` table, so reads allocate nothing and there is no tree to
/// rebalance.
#[derive(Debug, Clone)]
pub struct CityIndex {
    /// Dense slot -> entry, in insertion order
    entries: Vec<CityEntry>,
    /// Sorted (id, slot) pairs for ordered lookup
    by_id: Vec<(CityId, u32)>,
}

impl CityIndex {
    /// Get the slot for an external id.
    #[inline]
    pub fn slot_of(&self, id: CityId) -> Option<u32> {
        self.by_id
            .binary_search_by_key(&id, |&(cid, _)| cid)
            .ok()
            .map(|i| self.by_id[i].1)
    }

    /// Get the entry stored at a slot.
    #[inline]
    pub fn entry(&self, slot: u32) -> Option<&CityEntry> {
        self.entries.get(slot as usize)
    }

    /// Display name at a slot (panics if out of bounds).
    #[inline]
    pub fn name(&self, slot: u32) -> &str {
        &self.entries[slot as usize].name
    }

    /// External id at a slot (panics if out of bounds).
    #[inline]
    pub fn id(&self, slot: u32) -> CityId {
        self.entries[slot as usize].id
    }

    /// Number of indexed cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an external id is in the index.
    #[inline]
    pub fn contains(&self, id: CityId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Iterate over all (slot, entry) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &CityEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(slot, entry)| (slot as u32, entry))
    }
}

impl<S: Into<String>> FromIterator<(CityId, S)> for CityIndex {
    fn from_iter<I: IntoIterator<Item = (CityId, S)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut builder = CityIndexBuilder::with_capacity(upper.unwrap_or(lower));

        for (id, name) in iter {
            builder.insert(id, name);
        }

        builder.build()
    }
}

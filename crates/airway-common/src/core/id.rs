// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External city identifier as assigned by the data source.
///
/// Ids are opaque: not required to be contiguous or sorted, and carrying no
/// structure beyond equality and ordering. The dense positions used for
/// array-backed storage are assigned separately at load time.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CityId(u64);

impl CityId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CityId {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl fmt::Debug for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CityId {
    type Err = anyhow::Error;

    /// Parses a CityId from its decimal string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a base-10 u64.
    fn from_str(s: &str) -> Result<Self> {
        let id: u64 = s
            .parse()
            .map_err(|e| anyhow!("Invalid city id '{}': {}", s, e))?;
        Ok(Self(id))
    }
}

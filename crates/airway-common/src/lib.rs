// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod id;
}

// Re-exports for convenience
pub use crate::api::error::{AirwayError, Result};
pub use crate::config::AirwayConfig;
pub use crate::core::id::CityId;

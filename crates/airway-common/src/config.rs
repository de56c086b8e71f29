// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

#[derive(Clone, Debug)]
pub struct AirwayConfig {
    /// Upper bound on loaded cities; entries past the cap are skipped with
    /// a warning (default: unlimited)
    pub max_cities: Option<usize>,

    /// Record successful queries in the session history (default: true)
    pub history_enabled: bool,
}

impl Default for AirwayConfig {
    fn default() -> Self {
        Self {
            max_cities: None,
            history_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AirwayConfig::default();
        assert_eq!(config.max_cities, None);
        assert!(config.history_enabled);
    }
}

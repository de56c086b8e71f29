// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::id::CityId;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AirwayError {
    /// City id not present in the index
    #[error("City {id} not found")]
    CityNotFound { id: CityId },

    /// Path query start point not present in the index
    #[error("Source city {id} not found")]
    SourceNotFound { id: CityId },

    /// Path query end point not present in the index
    #[error("Destination city {id} not found")]
    DestinationNotFound { id: CityId },

    /// Both endpoints exist but no sequence of routes connects them
    #[error("No route from {from} to {to}")]
    NoRoute { from: CityId, to: CityId },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AirwayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AirwayError::NoRoute {
            from: CityId::new(1),
            to: CityId::new(9),
        };
        assert_eq!(err.to_string(), "No route from 1 to 9");

        let err = AirwayError::CityNotFound { id: CityId::new(5) };
        assert_eq!(err.to_string(), "City 5 not found");
    }

    #[test]
    fn test_internal_from_anyhow() {
        let err: AirwayError = anyhow::anyhow!("bad input").into();
        assert!(matches!(err, AirwayError::Internal(_)));
    }
}

// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::error::GeoError;
use serde::{Deserialize, Serialize};

/// Maximum geodesic distance in meters for a position to count as on track.
///
/// Zero is accepted: an exact match is still on track.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ToleranceMeters(f64);

impl ToleranceMeters {
    /// Creates a tolerance of `meters`.
    ///
    /// # Errors
    ///
    /// [`GeoError::InvalidTolerance`] for negative, infinite or NaN values.
    pub fn new(meters: f64) -> Result<Self, GeoError> {
        if !meters.is_finite() || meters < 0.0 {
            return Err(GeoError::InvalidTolerance(meters));
        }
        Ok(ToleranceMeters(meters))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }
}

impl Default for ToleranceMeters {
    fn default() -> Self {
        ToleranceMeters(2.0)
    }
}

impl TryFrom<f64> for ToleranceMeters {
    type Error = GeoError;

    fn try_from(meters: f64) -> Result<Self, Self::Error> {
        ToleranceMeters::new(meters)
    }
}

impl From<ToleranceMeters> for f64 {
    fn from(tolerance: ToleranceMeters) -> Self {
        tolerance.0
    }
}

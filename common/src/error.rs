// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use thiserror::Error;

/// Errors raised while constructing the geometric value types.
///
/// All of them are construction-time failures: the input is static
/// configuration, so they are propagated to the caller and never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude outside `[-90, 90]` or longitude outside `[-180, 180]` (NaN included).
    #[error("invalid coordinate lat: {latitude}, long: {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A bounding region without area.
    #[error(
        "degenerate region lat: [{min_lat}, {max_lat}], long: [{min_lon}, {max_lon}]"
    )]
    DegenerateRegion {
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    },

    /// A negative, infinite or NaN distance threshold.
    #[error("invalid tolerance {0} m")]
    InvalidTolerance(f64),
}

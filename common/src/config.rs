// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{position::GeoPoint, region::BoundingRegion, tolerance::ToleranceMeters};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a [`MonitorConfig`].
///
/// Invalid coordinates, regions and tolerances surface as [`ConfigError::Parse`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The surface distance formula used to compare positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceFormula {
    /// Great-circle distance on a sphere with the mean Earth radius.
    Haversine,

    /// Geodesic distance on the WGS-84 ellipsoid.
    #[default]
    Vincenty,
}

/// Static configuration of a track monitoring session.
///
/// # Fields
///
/// - `region` – The classification domain. Positions outside it are never on track.
/// - `tolerance_meters` – Distance threshold for an on track verdict, 2 m if omitted.
/// - `distance_formula` – Surface distance formula, Vincenty if omitted.
/// - `track` – Optional reference track points shipped with the configuration.
///
/// # Example
///
/// ```rust
/// use common::config::{DistanceFormula, MonitorConfig};
///
/// let config = MonitorConfig::from_json(
///     r#"{
///         "region": {
///             "min_lat": 33.212196, "max_lat": 33.214260,
///             "min_lon": -87.545644, "max_lon": -87.543037
///         },
///         "distance_formula": "haversine"
///     }"#,
/// )
/// .unwrap();
/// assert_eq!(config.tolerance_meters.meters(), 2.0);
/// assert_eq!(config.distance_formula, DistanceFormula::Haversine);
/// assert!(config.track.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub region: BoundingRegion,
    #[serde(default)]
    pub tolerance_meters: ToleranceMeters,
    #[serde(default)]
    pub distance_formula: DistanceFormula,
    #[serde(default)]
    pub track: Vec<GeoPoint>,
}

impl MonitorConfig {
    pub fn new(region: BoundingRegion, tolerance_meters: ToleranceMeters) -> Self {
        MonitorConfig {
            region,
            tolerance_meters,
            distance_formula: DistanceFormula::default(),
            track: vec![],
        }
    }

    /// Parses a configuration from a JSON string.
    ///
    /// Invalid coordinates, degenerate regions and invalid tolerances are
    /// rejected while parsing.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!(
            "Loaded config {}: tolerance {} m, {:?}, {} track points",
            path.to_string_lossy(),
            config.tolerance_meters.meters(),
            config.distance_formula,
            config.track.len()
        );
        Ok(config)
    }
}

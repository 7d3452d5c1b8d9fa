// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{error::GeoError, position::GeoPoint};
use serde::{Deserialize, Serialize};

/// A latitude/longitude aligned rectangle.
///
/// The region owns no points; it is only a predicate surface used to decide
/// whether a [`GeoPoint`] lies inside it. All four edges are inclusive.
///
/// # Fields
///
/// - `min_lat`/`max_lat` – southern and northern edge in decimal degrees.
/// - `min_lon`/`max_lon` – western and eastern edge in decimal degrees.
///
/// # Example
///
/// ```rust
/// use common::{position::GeoPoint, region::BoundingRegion};
///
/// let region = BoundingRegion::new(33.212196, 33.214260, -87.545644, -87.543037).unwrap();
/// assert!(region.contains(&GeoPoint::new(33.2130, -87.5445).unwrap()));
/// assert!(BoundingRegion::new(1.0, 1.0, 0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoundingRegion")]
pub struct BoundingRegion {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

#[derive(Deserialize)]
struct RawBoundingRegion {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl TryFrom<RawBoundingRegion> for BoundingRegion {
    type Error = GeoError;

    fn try_from(raw: RawBoundingRegion) -> Result<Self, Self::Error> {
        BoundingRegion::new(raw.min_lat, raw.max_lat, raw.min_lon, raw.max_lon)
    }
}

impl BoundingRegion {
    /// Creates a new [`BoundingRegion`].
    ///
    /// # Errors
    ///
    /// - [`GeoError::InvalidCoordinate`] if a corner is not a valid coordinate.
    /// - [`GeoError::DegenerateRegion`] unless `min_lat < max_lat` and `min_lon < max_lon`.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, GeoError> {
        GeoPoint::new(min_lat, min_lon)?;
        GeoPoint::new(max_lat, max_lon)?;
        if min_lat >= max_lat || min_lon >= max_lon {
            return Err(GeoError::DegenerateRegion {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            });
        }
        Ok(BoundingRegion {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Returns `true` if `point` lies inside the region or on one of its edges.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude())
            && (self.min_lon..=self.max_lon).contains(&point.longitude())
    }

    /// Returns the latitude and longitude midpoints as a [`GeoPoint`].
    pub fn center(&self) -> GeoPoint {
        // Midpoints of valid bounds are valid coordinates.
        GeoPoint::new_unchecked(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

/// Identifies one of the four quadrants of a partitioned [`BoundingRegion`].
///
/// [`SubRegionId::ALL`] is the fixed evaluation order used to break ties for
/// points lying on a shared edge: the first quadrant containing a point wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubRegionId {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl SubRegionId {
    /// All quadrants in evaluation order.
    pub const ALL: [SubRegionId; 4] = [
        SubRegionId::NorthWest,
        SubRegionId::NorthEast,
        SubRegionId::SouthWest,
        SubRegionId::SouthEast,
    ];

    /// Position of the quadrant in [`SubRegionId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_north(self) -> bool {
        matches!(self, SubRegionId::NorthWest | SubRegionId::NorthEast)
    }

    pub fn is_west(self) -> bool {
        matches!(self, SubRegionId::NorthWest | SubRegionId::SouthWest)
    }
}

impl std::fmt::Display for SubRegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SubRegionId::NorthWest => "NW",
            SubRegionId::NorthEast => "NE",
            SubRegionId::SouthWest => "SW",
            SubRegionId::SouthEast => "SE",
        };
        f.write_str(label)
    }
}

// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::{
    error::GeoError,
    position::GeoPoint,
    region::{BoundingRegion, SubRegionId},
};

/// Splits a [`BoundingRegion`] into four quadrants and locates points in them.
///
/// The region is cut at its latitude and longitude midpoints. Quadrants share
/// their inner edges, so edge points are resolved by evaluating the quadrants
/// in the order of [`SubRegionId::ALL`] (NW, NE, SW, SE) and taking the first
/// match:
///
/// - a point on the latitude midline belongs to the northern half,
/// - a point on the longitude midline belongs to the western half,
/// - the exact center belongs to [`SubRegionId::NorthWest`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPartitioner {
    region: BoundingRegion,
    sub_regions: [BoundingRegion; 4],
}

impl RegionPartitioner {
    /// Partitions `region` into its four quadrants.
    ///
    /// # Errors
    ///
    /// [`GeoError::DegenerateRegion`] if the region is too small for its
    /// midpoint to differ from its edges in `f64`.
    pub fn new(region: &BoundingRegion) -> Result<Self, GeoError> {
        let center = region.center();
        let (mid_lat, mid_lon) = (center.latitude(), center.longitude());
        let north_west = BoundingRegion::new(mid_lat, region.max_lat(), region.min_lon(), mid_lon)?;
        let north_east = BoundingRegion::new(mid_lat, region.max_lat(), mid_lon, region.max_lon())?;
        let south_west = BoundingRegion::new(region.min_lat(), mid_lat, region.min_lon(), mid_lon)?;
        let south_east = BoundingRegion::new(region.min_lat(), mid_lat, mid_lon, region.max_lon())?;
        Ok(RegionPartitioner {
            region: *region,
            sub_regions: [north_west, north_east, south_west, south_east],
        })
    }

    /// The region that was partitioned.
    pub fn region(&self) -> &BoundingRegion {
        &self.region
    }

    /// The bounds of quadrant `id`.
    pub fn sub_region(&self, id: SubRegionId) -> &BoundingRegion {
        &self.sub_regions[id.index()]
    }

    /// All quadrants with their bounds, in evaluation order.
    pub fn sub_regions(&self) -> impl Iterator<Item = (SubRegionId, &BoundingRegion)> {
        SubRegionId::ALL
            .into_iter()
            .map(|id| (id, &self.sub_regions[id.index()]))
    }

    /// Returns the quadrant containing `point`.
    ///
    /// Returns `None` if the point lies outside the partitioned region.
    pub fn locate(&self, point: &GeoPoint) -> Option<SubRegionId> {
        self.sub_regions()
            .find(|(_, bounds)| bounds.contains(point))
            .map(|(id, _)| id)
    }
}

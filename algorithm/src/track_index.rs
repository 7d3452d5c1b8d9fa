// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::partitioner::RegionPartitioner;
use common::{
    error::GeoError,
    position::GeoPoint,
    region::{BoundingRegion, SubRegionId},
};
use tracing::{debug, info};

/// Reference track points grouped by the quadrant they fall into.
///
/// The index is built once from a batch of points and is read-only for
/// classification. Points outside the bounding region can never be matched by
/// a classification and are dropped during construction; only their number
/// is kept.
///
/// Within a quadrant the insertion order of the points is preserved, so the
/// scan order of a classification is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackIndex {
    partitioner: RegionPartitioner,
    points: [Vec<GeoPoint>; 4],
    dropped: usize,
}

impl TrackIndex {
    /// Creates an index for `region` without any track points.
    pub fn new(region: &BoundingRegion) -> Result<Self, GeoError> {
        Ok(TrackIndex {
            partitioner: RegionPartitioner::new(region)?,
            points: Default::default(),
            dropped: 0,
        })
    }

    /// Builds the index from `points`.
    ///
    /// # Errors
    ///
    /// Only the partitioning of `region` can fail; points outside the region
    /// are silently dropped.
    pub fn build<I>(points: I, region: &BoundingRegion) -> Result<Self, GeoError>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut index = TrackIndex::new(region)?;
        for point in points {
            index.append(point);
        }
        info!(
            "Track index built: {} points, {} dropped",
            index.len(),
            index.dropped
        );
        for (id, count) in index.counts() {
            info!("Quadrant {}: {} coordinates", id, count);
        }
        Ok(index)
    }

    /// Adds a single track point behind the points already in its quadrant.
    ///
    /// Returns the quadrant the point was stored in, or `None` if it lies
    /// outside the region and was dropped.
    pub fn append(&mut self, point: GeoPoint) -> Option<SubRegionId> {
        let Some(id) = self.partitioner.locate(&point) else {
            debug!("Dropping track point {} outside of the region", point);
            self.dropped += 1;
            return None;
        };
        self.points[id.index()].push(point);
        Some(id)
    }

    /// The points stored for quadrant `id`, in insertion order.
    pub fn points_in(&self, id: SubRegionId) -> &[GeoPoint] {
        &self.points[id.index()]
    }

    /// Locates `point` with the same partition the index was built with.
    pub fn locate(&self, point: &GeoPoint) -> Option<SubRegionId> {
        self.partitioner.locate(point)
    }

    pub fn region(&self) -> &BoundingRegion {
        self.partitioner.region()
    }

    pub fn partitioner(&self) -> &RegionPartitioner {
        &self.partitioner
    }

    /// Number of stored points per quadrant, in evaluation order.
    pub fn counts(&self) -> [(SubRegionId, usize); 4] {
        SubRegionId::ALL.map(|id| (id, self.points[id.index()].len()))
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of points dropped because they were outside the region.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

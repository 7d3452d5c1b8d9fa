// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{distance::distance, track_index::TrackIndex};
use common::{
    config::{DistanceFormula, MonitorConfig},
    position::GeoPoint,
    tolerance::ToleranceMeters,
    verdict::{Classification, Verdict},
};
use tracing::trace;

/// Decides whether observed positions are on the reference track.
///
/// A position is on track if any reference point stored in the same quadrant
/// of the [`TrackIndex`] is within the tolerance. Positions outside the
/// indexed region are always off track, and reference points of neighbouring
/// quadrants are never considered, even when the position sits right next to
/// a quadrant edge.
///
/// The scan stops at the first point within tolerance. The matched point is
/// therefore the first one in insertion order, which is not necessarily the
/// nearest one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityClassifier {
    tolerance: ToleranceMeters,
    formula: DistanceFormula,
}

impl ProximityClassifier {
    pub fn new(tolerance: ToleranceMeters, formula: DistanceFormula) -> Self {
        ProximityClassifier { tolerance, formula }
    }

    pub fn from_config(config: &MonitorConfig) -> Self {
        ProximityClassifier::new(config.tolerance_meters, config.distance_formula)
    }

    pub fn tolerance(&self) -> ToleranceMeters {
        self.tolerance
    }

    pub fn formula(&self) -> DistanceFormula {
        self.formula
    }

    /// Classifies `query` against the points of `index`.
    pub fn classify(&self, query: &GeoPoint, index: &TrackIndex) -> Verdict {
        self.classification(query, index).verdict
    }

    /// Classifies `query` and reports the quadrant it was located in.
    pub fn classification(&self, query: &GeoPoint, index: &TrackIndex) -> Classification {
        let Some(sub_region) = index.locate(query) else {
            trace!("Position {} is outside of the region", query);
            return Classification {
                query: *query,
                sub_region: None,
                verdict: Verdict::OffTrack,
            };
        };

        let tolerance = self.tolerance.meters();
        let verdict = index
            .points_in(sub_region)
            .iter()
            .map(|point| (point, distance(self.formula, query, point)))
            .find(|(_, distance)| *distance <= tolerance)
            .map_or(Verdict::OffTrack, |(point, distance)| Verdict::OnTrack {
                matched: *point,
                distance,
            });
        trace!("Position {} in quadrant {} is {}", query, sub_region, verdict);

        Classification {
            query: *query,
            sub_region: Some(sub_region),
            verdict,
        }
    }

    /// Lazily classifies every position of `queries`.
    ///
    /// Nothing is computed until the returned iterator is advanced. It ends
    /// when `queries` ends and can be dropped at any time to stop.
    pub fn classify_all<'a, I>(&'a self, index: &'a TrackIndex, queries: I) -> Verdicts<'a, I::IntoIter>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        Verdicts {
            classifier: self,
            index,
            queries: queries.into_iter(),
        }
    }
}

/// Classifies `query` against `index` with the default distance formula.
pub fn classify(query: &GeoPoint, index: &TrackIndex, tolerance: ToleranceMeters) -> Verdict {
    ProximityClassifier::new(tolerance, DistanceFormula::default()).classify(query, index)
}

/// Iterator returned by [`ProximityClassifier::classify_all`].
#[derive(Debug)]
pub struct Verdicts<'a, I> {
    classifier: &'a ProximityClassifier,
    index: &'a TrackIndex,
    queries: I,
}

impl<I> Iterator for Verdicts<'_, I>
where
    I: Iterator<Item = GeoPoint>,
{
    type Item = Classification;

    fn next(&mut self) -> Option<Self::Item> {
        let query = self.queries.next()?;
        Some(self.classifier.classification(&query, self.index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.queries.size_hint()
    }
}

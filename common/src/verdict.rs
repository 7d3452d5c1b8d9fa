// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{position::GeoPoint, region::SubRegionId};
use serde::{Deserialize, Serialize};

/// Outcome of classifying one observed position against the reference track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// The position lies within tolerance of `matched`.
    ///
    /// `matched` is the first stored point in scan order within tolerance,
    /// not necessarily the nearest one. `distance` is in meters.
    OnTrack { matched: GeoPoint, distance: f64 },

    /// No stored point of the position's quadrant is within tolerance, or the
    /// position is outside the bounding region.
    OffTrack,
}

impl Verdict {
    pub fn is_on_track(&self) -> bool {
        matches!(self, Verdict::OnTrack { .. })
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::OnTrack { .. } => f.write_str("on track"),
            Verdict::OffTrack => f.write_str("off track"),
        }
    }
}

/// A [`Verdict`] together with the position it was computed for.
///
/// This is what verdict sinks receive per observed position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub query: GeoPoint,
    /// Quadrant the position was located in, `None` outside the region.
    pub sub_region: Option<SubRegionId>,
    pub verdict: Verdict,
}

// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Track membership algorithms.
//!
//! Reference track points are grouped by the quadrant of a bounding region
//! they fall into ([`TrackIndex`]). An observed position is compared only
//! against the points of its own quadrant ([`ProximityClassifier`]) using a
//! geodesic distance ([`distance`]).

pub mod classifier;
pub mod distance;
pub mod partitioner;
pub mod track_index;

pub use classifier::{ProximityClassifier, Verdicts, classify};
pub use partitioner::RegionPartitioner;
pub use track_index::TrackIndex;

#[cfg(test)]
mod tests;

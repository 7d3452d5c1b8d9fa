// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{config::MonitorConfig, position::GeoPoint, region::BoundingRegion, tolerance::ToleranceMeters};

pub const MIN_LAT: f64 = 33.212196;
pub const MAX_LAT: f64 = 33.214260;
pub const MIN_LON: f64 = -87.545644;
pub const MAX_LON: f64 = -87.543037;

/// The test field by Hardaway Hall.
pub fn get_region() -> BoundingRegion {
    BoundingRegion::new(MIN_LAT, MAX_LAT, MIN_LON, MAX_LON).unwrap()
}

pub fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).unwrap()
}

/// Two reference points, one south-west and one north-east of the center.
pub fn get_track_points() -> Vec<GeoPoint> {
    vec![point(33.2130, -87.5445), point(33.2140, -87.5435)]
}

/// Twenty points running diagonally from the south-west to the north-east
/// corner, ten on each side of the center.
pub fn get_diagonal_track() -> Vec<GeoPoint> {
    (0..20)
        .map(|step| {
            let fraction = (f64::from(step) + 0.5) / 20.0;
            point(
                MIN_LAT + (MAX_LAT - MIN_LAT) * fraction,
                MIN_LON + (MAX_LON - MIN_LON) * fraction,
            )
        })
        .collect()
}

pub fn get_config() -> MonitorConfig {
    let mut config = MonitorConfig::new(get_region(), ToleranceMeters::new(2.0).unwrap());
    config.track = get_track_points();
    config
}

pub fn get_config_as_json<'a>() -> &'a str {
    r#"
    {
        "region": {
            "min_lat": 33.212196,
            "max_lat": 33.214260,
            "min_lon": -87.545644,
            "max_lon": -87.543037
        },
        "tolerance_meters": 2.0,
        "distance_formula": "vincenty",
        "track": [
            { "latitude": 33.2130, "longitude": -87.5445 },
            { "latitude": 33.2140, "longitude": -87.5435 }
        ]
    }
    "#
}

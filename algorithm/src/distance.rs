// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::{config::DistanceFormula, position::GeoPoint};

/// Mean Earth radius in meters (IUGG).
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_008.8;

const WGS84_A: f64 = 6_378_137.0;
const WGS84_F: f64 = 1.0 / 298.257_223_563;
const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);

const VINCENTY_MAX_ITERATIONS: usize = 200;
const VINCENTY_CONVERGENCE: f64 = 1e-12;

/// Calculates the surface distance in meters between two positions using `formula`.
pub fn distance(formula: DistanceFormula, pos1: &GeoPoint, pos2: &GeoPoint) -> f64 {
    match formula {
        DistanceFormula::Haversine => haversine_distance(pos1, pos2),
        DistanceFormula::Vincenty => vincenty_distance(pos1, pos2),
    }
}

/// Calculates the great-circle distance in meters between two positions.
///
/// Uses the haversine formula on a sphere with [`EARTH_MEAN_RADIUS_M`]. The
/// spherical model is off by up to ~0.5% against the ellipsoid, which is
/// well below GNSS noise at track scale.
pub fn haversine_distance(pos1: &GeoPoint, pos2: &GeoPoint) -> f64 {
    let lat1 = pos1.latitude().to_radians();
    let lat2 = pos2.latitude().to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (pos2.longitude() - pos1.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();
    EARTH_MEAN_RADIUS_M * c
}

/// Calculates the geodesic distance in meters between two positions on the WGS-84 ellipsoid.
///
/// Solves the inverse geodesic problem with Vincenty's iteration. For nearly
/// antipodal points the iteration may not converge; the haversine distance
/// is returned instead.
pub fn vincenty_distance(pos1: &GeoPoint, pos2: &GeoPoint) -> f64 {
    vincenty_inverse(pos1, pos2).unwrap_or_else(|| haversine_distance(pos1, pos2))
}

fn vincenty_inverse(pos1: &GeoPoint, pos2: &GeoPoint) -> Option<f64> {
    let l = (pos2.longitude() - pos1.longitude()).to_radians();
    let u1 = ((1.0 - WGS84_F) * pos1.latitude().to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * pos2.latitude().to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iteration = 0;
    let (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m) = loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // coincident points
            return Some(0.0);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Both points on the equator.
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - lambda_prev).abs() < VINCENTY_CONVERGENCE {
            break (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m);
        }
        iteration += 1;
        if iteration >= VINCENTY_MAX_ITERATIONS {
            return None;
        }
    };

    let u_sq = cos_sq_alpha * (WGS84_A.powi(2) - WGS84_B.powi(2)) / WGS84_B.powi(2);
    let a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = b
        * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma.powi(2))
                        * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

    Some(WGS84_B * a * (sigma - delta_sigma))
}

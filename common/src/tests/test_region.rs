use crate::error::GeoError;
use crate::region::BoundingRegion;
use crate::test_helper::track::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, get_region, point};

#[test]
fn contains_inner_point() {
    assert!(get_region().contains(&point(33.2135, -87.5440)));
}

#[test]
fn contains_edges_and_corners() {
    let region = get_region();
    assert!(region.contains(&point(MIN_LAT, MIN_LON)));
    assert!(region.contains(&point(MAX_LAT, MAX_LON)));
    assert!(region.contains(&point(MIN_LAT, -87.5440)));
    assert!(region.contains(&point(33.2135, MAX_LON)));
}

#[test]
fn does_not_contain_outer_point() {
    let region = get_region();
    assert!(!region.contains(&point(33.2200, -87.5500)));
    assert!(!region.contains(&point(MAX_LAT + 1e-9, -87.5440)));
    assert!(!region.contains(&point(33.2135, MIN_LON - 1e-9)));
}

#[test]
fn center_is_midpoint() {
    let center = get_region().center();
    assert!((center.latitude() - 33.213228).abs() < 1e-9);
    assert!((center.longitude() - -87.5443405).abs() < 1e-9);
}

#[test]
fn reject_zero_area_region() {
    assert!(matches!(
        BoundingRegion::new(MIN_LAT, MIN_LAT, MIN_LON, MAX_LON),
        Err(GeoError::DegenerateRegion { .. })
    ));
    assert!(matches!(
        BoundingRegion::new(MIN_LAT, MAX_LAT, MAX_LON, MAX_LON),
        Err(GeoError::DegenerateRegion { .. })
    ));
}

#[test]
fn reject_swapped_bounds() {
    assert!(matches!(
        BoundingRegion::new(MAX_LAT, MIN_LAT, MIN_LON, MAX_LON),
        Err(GeoError::DegenerateRegion { .. })
    ));
}

#[test]
fn reject_invalid_corner() {
    assert!(matches!(
        BoundingRegion::new(-91.0, 0.0, 0.0, 1.0),
        Err(GeoError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        BoundingRegion::new(0.0, 1.0, 0.0, 181.0),
        Err(GeoError::InvalidCoordinate { .. })
    ));
}

#[test]
fn deserialize_validates_region() {
    let json = r#"{ "min_lat": 2.0, "max_lat": 1.0, "min_lon": 0.0, "max_lon": 1.0 }"#;
    assert!(BoundingRegion::from_json(json).is_err());

    let json = r#"{ "min_lat": 1.0, "max_lat": 2.0, "min_lon": 0.0, "max_lon": 1.0 }"#;
    let region = BoundingRegion::from_json(json).unwrap();
    assert_eq!(region, BoundingRegion::new(1.0, 2.0, 0.0, 1.0).unwrap());
}

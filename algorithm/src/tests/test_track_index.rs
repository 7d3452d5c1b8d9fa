use crate::track_index::TrackIndex;
use common::region::SubRegionId;
use common::test_helper::track::{get_diagonal_track, get_region, get_track_points, point};

#[test]
fn assign_points_to_quadrants() {
    let index = TrackIndex::build(get_track_points(), &get_region()).unwrap();
    assert_eq!(
        index.points_in(SubRegionId::SouthWest),
        &[point(33.2130, -87.5445)]
    );
    assert_eq!(
        index.points_in(SubRegionId::NorthEast),
        &[point(33.2140, -87.5435)]
    );
    assert!(index.points_in(SubRegionId::NorthWest).is_empty());
    assert!(index.points_in(SubRegionId::SouthEast).is_empty());
    assert_eq!(index.len(), 2);
    assert_eq!(index.dropped(), 0);
}

#[test]
fn drop_points_outside_region() {
    let mut points = get_track_points();
    points.push(point(33.2200, -87.5500));
    points.push(point(0.0, 0.0));
    let index = TrackIndex::build(points, &get_region()).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.dropped(), 2);
}

#[test]
fn keep_insertion_order_within_quadrant() {
    let points = vec![
        point(33.2130, -87.5445),
        point(33.2140, -87.5435),
        point(33.2125, -87.5450),
        point(33.2128, -87.5446),
    ];
    let index = TrackIndex::build(points, &get_region()).unwrap();
    assert_eq!(
        index.points_in(SubRegionId::SouthWest),
        &[
            point(33.2130, -87.5445),
            point(33.2125, -87.5450),
            point(33.2128, -87.5446)
        ]
    );
}

#[test]
fn building_twice_gives_same_assignment() {
    let first = TrackIndex::build(get_diagonal_track(), &get_region()).unwrap();
    let second = TrackIndex::build(get_diagonal_track(), &get_region()).unwrap();
    assert_eq!(first, second);
    for id in SubRegionId::ALL {
        assert_eq!(first.points_in(id), second.points_in(id));
    }
}

#[test]
fn diagonal_track_covers_both_diagonal_quadrants() {
    let index = TrackIndex::build(get_diagonal_track(), &get_region()).unwrap();
    let counts = index.counts();
    assert_eq!(counts[SubRegionId::NorthWest.index()], (SubRegionId::NorthWest, 0));
    assert_eq!(counts[SubRegionId::NorthEast.index()], (SubRegionId::NorthEast, 10));
    assert_eq!(counts[SubRegionId::SouthWest.index()], (SubRegionId::SouthWest, 10));
    assert_eq!(counts[SubRegionId::SouthEast.index()], (SubRegionId::SouthEast, 0));
    assert_eq!(index.len(), 20);
}

#[test]
fn append_to_existing_index() {
    let mut index = TrackIndex::build(get_track_points(), &get_region()).unwrap();
    assert_eq!(
        index.append(point(33.2125, -87.5435)),
        Some(SubRegionId::SouthEast)
    );
    assert_eq!(index.append(point(33.2200, -87.5500)), None);
    assert_eq!(index.points_in(SubRegionId::SouthEast).len(), 1);
    assert_eq!(index.len(), 3);
    assert_eq!(index.dropped(), 1);
}

#[test]
fn empty_index() {
    let index = TrackIndex::new(&get_region()).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.region(), &get_region());
    for id in SubRegionId::ALL {
        assert!(index.points_in(id).is_empty());
    }
}

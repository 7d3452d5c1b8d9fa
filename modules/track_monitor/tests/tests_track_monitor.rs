// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use algorithm::{ProximityClassifier, TrackIndex};
use common::region::SubRegionId;
use common::test_helper::track::{get_config, get_region, get_track_points, point};
use common::verdict::Verdict;
use module_core::{
    Event, EventBus, EventKind, EventKindType, Module, ModuleCtx, payload_ref,
    test_helper::{collect_events_until, stop_module, wait_for_event},
};
use std::time::Duration;
use tokio::task::JoinHandle;
use track_monitor::TrackMonitor;

const TIMEOUT: Duration = Duration::from_millis(200);

fn create_module(ctx: ModuleCtx, index: TrackIndex) -> JoinHandle<Result<(), ()>> {
    tokio::spawn(async move {
        let classifier = ProximityClassifier::from_config(&get_config());
        let mut monitor = TrackMonitor::new(ctx, index, classifier);
        monitor.run().await
    })
}

fn get_index() -> TrackIndex {
    TrackIndex::build(get_track_points(), &get_region()).unwrap()
}

#[tokio::test]
#[test_log::test]
pub async fn publish_on_track_verdict() {
    let event_bus = EventBus::default();
    let mut rx = event_bus.subscribe();
    let mut monitor = create_module(event_bus.context(), get_index());

    event_bus.publish(&Event {
        kind: EventKind::PositionEvent(point(33.2130, -87.5445)),
    });

    let event = wait_for_event(&mut rx, TIMEOUT, EventKindType::VerdictEvent).await;
    let classification = payload_ref!(event.kind, EventKind::VerdictEvent).unwrap();
    assert_eq!(classification.query, point(33.2130, -87.5445));
    assert_eq!(classification.sub_region, Some(SubRegionId::SouthWest));
    assert!(classification.verdict.is_on_track());

    stop_module(&event_bus, &mut monitor).await
}

#[tokio::test]
#[test_log::test]
pub async fn publish_off_track_verdict_outside_region() {
    let event_bus = EventBus::default();
    let mut rx = event_bus.subscribe();
    let mut monitor = create_module(event_bus.context(), get_index());

    event_bus.publish(&Event {
        kind: EventKind::PositionEvent(point(33.2200, -87.5500)),
    });

    let event = wait_for_event(&mut rx, TIMEOUT, EventKindType::VerdictEvent).await;
    let classification = payload_ref!(event.kind, EventKind::VerdictEvent).unwrap();
    assert_eq!(classification.sub_region, None);
    assert_eq!(classification.verdict, Verdict::OffTrack);

    stop_module(&event_bus, &mut monitor).await
}

#[tokio::test]
#[test_log::test]
pub async fn appended_track_point_is_matched() {
    let event_bus = EventBus::default();
    let mut rx = event_bus.subscribe();
    let index = TrackIndex::new(&get_region()).unwrap();
    let mut monitor = create_module(event_bus.context(), index);

    let position = point(33.2125, -87.5435);
    event_bus.publish(&Event {
        kind: EventKind::PositionEvent(position),
    });
    event_bus.publish(&Event {
        kind: EventKind::TrackPointEvent(position),
    });
    event_bus.publish(&Event {
        kind: EventKind::PositionEvent(position),
    });
    event_bus.publish(&Event {
        kind: EventKind::EndOfStreamEvent,
    });

    let events = collect_events_until(
        &mut rx,
        TIMEOUT,
        EventKindType::VerdictEvent,
        EventKindType::MonitorFinishedEvent,
    )
    .await;
    let verdicts: Vec<bool> = events
        .iter()
        .filter_map(|event| payload_ref!(event.kind, EventKind::VerdictEvent))
        .map(|classification| classification.verdict.is_on_track())
        .collect();
    assert_eq!(verdicts, vec![false, true]);

    stop_module(&event_bus, &mut monitor).await
}

#[tokio::test]
#[test_log::test]
pub async fn finish_after_all_verdicts() {
    let event_bus = EventBus::default();
    let mut rx = event_bus.subscribe();
    let mut monitor = create_module(event_bus.context(), get_index());

    let positions = [
        point(33.2130, -87.5445),
        point(33.2200, -87.5500),
        point(33.2140, -87.5435),
        point(33.2125, -87.5450),
    ];
    for position in positions {
        event_bus.publish(&Event {
            kind: EventKind::PositionEvent(position),
        });
    }
    event_bus.publish(&Event {
        kind: EventKind::EndOfStreamEvent,
    });

    let events = collect_events_until(
        &mut rx,
        TIMEOUT,
        EventKindType::VerdictEvent,
        EventKindType::MonitorFinishedEvent,
    )
    .await;
    let verdicts: Vec<bool> = events
        .iter()
        .filter_map(|event| payload_ref!(event.kind, EventKind::VerdictEvent))
        .map(|classification| classification.verdict.is_on_track())
        .collect();
    assert_eq!(verdicts, vec![true, false, true, false]);

    stop_module(&event_bus, &mut monitor).await
}

use common::position::GeoPoint;
use common::verdict::{Classification, Verdict};
use module_core::test_helper::{collect_events_until, wait_for_event};
use module_core::*;
use std::sync::Arc;
use std::time::Duration;

fn position() -> GeoPoint {
    GeoPoint::new(33.2130, -87.5445).unwrap()
}

#[tokio::test]
#[test_log::test]
pub async fn events_delivered() {
    let event_bus = EventBus::new();
    let mut receiver = event_bus.subscribe();
    let event = Event {
        kind: EventKind::QuitEvent,
    };
    event_bus.publish(&event);
    let received_event = tokio::time::timeout(Duration::from_millis(100), receiver.recv())
        .await
        .expect("Failed to receive event in required time")
        .unwrap();
    assert_eq!(received_event.event_type(), event.event_type());
}

#[tokio::test]
#[test_log::test]
pub async fn every_subscriber_receives_event() {
    let event_bus = EventBus::new();
    let mut first = event_bus.context();
    let mut second = event_bus.context();
    event_bus.publish(&Event {
        kind: EventKind::PositionEvent(position()),
    });
    for ctx in [&mut first, &mut second] {
        let event = ctx.receiver.recv().await.unwrap();
        assert_eq!(
            payload_ref!(event.kind, EventKind::PositionEvent),
            Some(&position())
        );
    }
}

#[tokio::test]
#[test_log::test]
pub async fn wait_for_event_skips_other_events() {
    let event_bus = EventBus::new();
    let ctx = event_bus.context();
    let mut rx = event_bus.subscribe();
    ctx.publish_event(EventKind::PositionEvent(position()))
        .unwrap();
    ctx.publish_event(EventKind::VerdictEvent(Arc::new(Classification {
        query: position(),
        sub_region: None,
        verdict: Verdict::OffTrack,
    })))
    .unwrap();

    let event = wait_for_event(
        &mut rx,
        Duration::from_millis(100),
        EventKindType::VerdictEvent,
    )
    .await;
    let classification = payload_ref!(event.kind, EventKind::VerdictEvent).unwrap();
    assert_eq!(classification.verdict, Verdict::OffTrack);
}

#[tokio::test]
#[test_log::test]
pub async fn collect_events_until_end_of_stream() {
    let event_bus = EventBus::new();
    let mut rx = event_bus.subscribe();
    for _ in 0..3 {
        event_bus.publish(&Event {
            kind: EventKind::TrackPointEvent(position()),
        });
        event_bus.publish(&Event {
            kind: EventKind::PositionEvent(position()),
        });
    }
    event_bus.publish(&Event {
        kind: EventKind::EndOfStreamEvent,
    });

    let events = collect_events_until(
        &mut rx,
        Duration::from_millis(100),
        EventKindType::TrackPointEvent,
        EventKindType::EndOfStreamEvent,
    )
    .await;
    assert_eq!(events.len(), 3);
}

#[test]
pub fn event_kind_type_ignores_payload() {
    let one = EventKind::PositionEvent(position());
    let other = EventKind::PositionEvent(GeoPoint::new(0.0, 0.0).unwrap());
    assert_eq!(EventKindType::from(&one), EventKindType::from(&other));
    assert_ne!(
        EventKindType::from(&one),
        EventKindType::from(&EventKind::TrackPointEvent(position()))
    );
}

#[tokio::test]
pub async fn context_receives_own_events() {
    let event_bus = EventBus::new();
    let mut ctx = event_bus.context();
    ctx.publish_event(EventKind::EndOfStreamEvent).unwrap();
    let event = ctx.receiver.recv().await.unwrap();
    assert_eq!(event.event_type(), EventKindType::EndOfStreamEvent);
}

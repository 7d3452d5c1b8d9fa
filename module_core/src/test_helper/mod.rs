use crate::{Event, EventBus, EventKind, EventKindType};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{timeout, timeout_at};
use tracing::debug;

/// Sends a quit signal to a running module and waits for it to stop gracefully.
///
/// This function publishes a [`QuitEvent`](EventKind::QuitEvent) through the given [`EventBus`],
/// signaling the target module to terminate. It then waits asynchronously for the module’s task
/// (represented by the provided [`tokio::task::JoinHandle`]) to complete within a fixed timeout.
///
/// # Panics
/// This function panics if:
/// - The module does not stop within the specified timeout duration.
/// - The task panicked.
pub async fn stop_module(
    event_bus: &EventBus,
    handle: &mut tokio::task::JoinHandle<Result<(), ()>>,
) {
    event_bus.publish(&Event {
        kind: EventKind::QuitEvent,
    });
    let _ = timeout(std::time::Duration::from_millis(100), handle)
        .await
        .expect("Module doesn't handle quit event in timeout")
        .unwrap();
}

/// Waits asynchronously for a specific type of [`Event`] to be received on a
/// [`tokio::sync::broadcast::Receiver`] within a given duration.
///
/// Events of other types are skipped. A lagging receiver keeps waiting.
///
/// # Panics
///
/// This function panics if no matching event is received within the specified
/// `duration`.
pub async fn wait_for_event(
    rx: &mut tokio::sync::broadcast::Receiver<Event>,
    duration: std::time::Duration,
    exp_event: EventKindType,
) -> Event {
    let deadline = tokio::time::Instant::now() + duration;
    while let Ok(received) = timeout_at(deadline, rx.recv()).await {
        match received {
            Ok(event) if event.event_type() == exp_event => {
                debug!("Received expected event {:?}", exp_event);
                return event;
            }
            Err(RecvError::Closed) => break,
            _ => (),
        }
    }
    panic!("Failed to receive event of type {:?}", exp_event);
}

/// Collects every event of type `exp_event` until an event of type `until` arrives.
///
/// # Panics
///
/// Panics if `until` is not received within `duration`.
pub async fn collect_events_until(
    rx: &mut tokio::sync::broadcast::Receiver<Event>,
    duration: std::time::Duration,
    exp_event: EventKindType,
    until: EventKindType,
) -> Vec<Event> {
    let collect = async {
        let mut events = Vec::new();
        while let Ok(event) = rx.recv().await {
            let event_type = event.event_type();
            if event_type == until {
                return Some(events);
            }
            if event_type == exp_event {
                events.push(event);
            }
        }
        None
    };
    match timeout(duration, collect).await {
        Ok(Some(events)) => events,
        _ => panic!("Failed to receive event of type {:?}", until),
    }
}

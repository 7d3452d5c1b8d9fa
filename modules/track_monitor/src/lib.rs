// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use algorithm::{ProximityClassifier, TrackIndex};
use async_trait::async_trait;
use common::position::GeoPoint;
use module_core::{ClassificationPtr, EventKind, Module, ModuleCtx};
use std::result::Result;
use tracing::{debug, error, info};

/// The `TrackMonitor` module decides for every observed position on the bus
/// whether it is on the reference track.
///
/// It owns its [`TrackIndex`] exclusively. Track points arriving as
/// [`EventKind::TrackPointEvent`] and positions arriving as
/// [`EventKind::PositionEvent`] are handled one at a time by the event loop,
/// so a classification always sees every track point received before it.
pub struct TrackMonitor {
    ctx: ModuleCtx,
    index: TrackIndex,
    classifier: ProximityClassifier,
    on_track: usize,
    off_track: usize,
}

impl TrackMonitor {
    pub fn new(ctx: ModuleCtx, index: TrackIndex, classifier: ProximityClassifier) -> Self {
        TrackMonitor {
            ctx,
            index,
            classifier,
            on_track: 0,
            off_track: 0,
        }
    }

    /// Classifies `position` and publishes the result as [`EventKind::VerdictEvent`].
    fn handle_position(&mut self, position: &GeoPoint) {
        let classification = self.classifier.classification(position, &self.index);
        if classification.verdict.is_on_track() {
            self.on_track += 1;
        } else {
            self.off_track += 1;
        }
        debug!("Position {} is {}", position, classification.verdict);
        self.publish(EventKind::VerdictEvent(ClassificationPtr::new(classification)));
    }

    fn handle_track_point(&mut self, point: GeoPoint) {
        match self.index.append(point) {
            Some(id) => debug!("Added track point {} to quadrant {}", point, id),
            None => debug!("Ignored track point {} outside of the region", point),
        }
    }

    fn handle_end_of_stream(&self) {
        info!(
            "Position stream finished: {} on track, {} off track",
            self.on_track, self.off_track
        );
        self.publish(EventKind::MonitorFinishedEvent);
    }

    fn publish(&self, kind: EventKind) {
        if let Err(e) = self.ctx.publish_event(kind) {
            error!("Failed to publish event. Error {}", e);
        }
    }
}

#[async_trait]
impl Module for TrackMonitor {
    /// Runs the `TrackMonitor` module's main event loop.
    ///
    /// The loop terminates when a `QuitEvent` is received.
    async fn run(&mut self) -> Result<(), ()> {
        info!("Monitoring with {} track points", self.index.len());
        let mut run = true;
        while run {
            tokio::select! {
                event = self.ctx.receiver.recv() => {
                    match event {
                        Ok(event) => {
                            match event.kind {
                                EventKind::QuitEvent => run = false,
                                EventKind::PositionEvent(position) => self.handle_position(&position),
                                EventKind::TrackPointEvent(point) => self.handle_track_point(point),
                                EventKind::EndOfStreamEvent => self.handle_end_of_stream(),
                                _ => (),
                            }
                        }
                        Err(e) => error!("Failed to receive event. Error {}", e)
                    }
                }
            }
        }
        Ok(())
    }
}

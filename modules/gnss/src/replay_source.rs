// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::position::GeoPoint;
use module_core::{Event, EventKind, Module, ModuleCtx};
use std::{
    io::{Error, ErrorKind},
    sync::Arc,
    time::Duration,
};
use tracing::{debug, error, info};

#[derive(Clone)]
struct ReplayGnssModuleConfig {
    positions: Vec<GeoPoint>,
    interval: Duration,
}

/// A GNSS source that replays a recorded list of positions.
///
/// One position is published as [`EventKind::PositionEvent`] per `interval`,
/// in recording order. After the last one an [`EventKind::EndOfStreamEvent`]
/// is published. The module keeps running until it receives a
/// [`EventKind::QuitEvent`], which also stops a replay in progress.
pub struct ReplayGnssModule {
    ctx: ModuleCtx,
    config: Arc<ReplayGnssModuleConfig>,
}

impl ReplayGnssModule {
    pub fn new(ctx: ModuleCtx, positions: &[GeoPoint], interval: Duration) -> Result<Self, Error> {
        if positions.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "positions parameter is empty",
            ));
        }
        if interval.is_zero() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "interval parameter is zero",
            ));
        }
        Ok(ReplayGnssModule {
            ctx,
            config: Arc::new(ReplayGnssModuleConfig {
                positions: positions.to_vec(),
                interval,
            }),
        })
    }
}

#[async_trait::async_trait]
impl Module for ReplayGnssModule {
    async fn run(&mut self) -> Result<(), ()> {
        let config = self.config.clone();
        let sender = self.ctx.sender.clone();
        let replay_task_handle = tokio::spawn(async move {
            replay_task(sender, config).await;
        });
        let mut run = true;
        while run {
            tokio::select! {
                event = self.ctx.receiver.recv() => {
                    match event {
                        Ok(event) => {
                            if let EventKind::QuitEvent = event.kind {
                                replay_task_handle.abort();
                                run = false;
                            }
                        }
                        Err(e) => error!("Failed to receive event. Error {}", e),
                    }
                }
            }
        }
        Ok(())
    }
}

async fn replay_task(
    sender: tokio::sync::broadcast::Sender<Event>,
    config: Arc<ReplayGnssModuleConfig>,
) {
    let mut timer = tokio::time::interval(config.interval);
    info!("Replaying {} positions", config.positions.len());
    for position in config.positions.iter() {
        timer.tick().await;
        debug!("Replay position {}", position);
        let _ = sender.send(Event {
            kind: EventKind::PositionEvent(*position),
        });
    }
    info!("Replay finished");
    let _ = sender.send(Event {
        kind: EventKind::EndOfStreamEvent,
    });
}

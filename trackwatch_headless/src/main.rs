// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use algorithm::{ProximityClassifier, TrackIndex};
use clap::Parser;
use common::{config::MonitorConfig, position::GeoPoint, verdict::Classification};
use gnss::replay_source::ReplayGnssModule;
use module_core::{Event, EventBus, EventKind, Module};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use track_monitor::TrackMonitor;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the region, tolerance and optional track points.
    #[arg(short, long)]
    config: PathBuf,
    /// CSV file with additional track points (latitude,longitude).
    #[arg(short, long)]
    track: Option<PathBuf>,
    /// CSV file with the observed positions (latitude,longitude).
    #[arg(short, long)]
    positions: PathBuf,
    /// Delay between two replayed positions.
    #[arg(short, long, default_value_t = 1000)]
    interval_ms: u64,
    /// Classify all positions at once instead of replaying them.
    #[arg(short, long)]
    offline: bool,
}

fn read_points_from_file(file_path: &Path) -> Result<Vec<GeoPoint>, ()> {
    let mut rdr = csv::Reader::from_path(file_path).map_err(|e| {
        error!(
            "Failed to open {}. Error: {}",
            file_path.to_string_lossy(),
            e
        );
    })?;
    let positions = rdr
        .deserialize::<GeoPoint>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!(
                "Failed to read {}. Error: {}",
                file_path.to_string_lossy(),
                e
            );
        })?;
    debug!(
        "length of {}: {}",
        file_path.to_string_lossy(),
        positions.len()
    );
    Ok(positions)
}

fn build_index(config: &MonitorConfig, cli: &Cli) -> Result<TrackIndex, ()> {
    let mut track = config.track.clone();
    if let Some(track_file) = &cli.track {
        track.extend(read_points_from_file(track_file)?);
    }
    TrackIndex::build(track, &config.region).map_err(|e| {
        error!("Failed to build track index. Error: {}", e);
    })
}

fn print_verdict(classification: &Classification) {
    println!("{} is {}", classification.query, classification.verdict);
}

/// Prints every verdict until the monitor has finished or a quit is requested.
async fn report_verdicts(
    eb: &EventBus,
    mut receiver: tokio::sync::broadcast::Receiver<Event>,
) -> Result<(), ()> {
    loop {
        match receiver.recv().await {
            Ok(event) => match event.kind {
                EventKind::VerdictEvent(classification) => print_verdict(&classification),
                EventKind::MonitorFinishedEvent => {
                    eb.publish(&Event {
                        kind: EventKind::QuitEvent,
                    });
                    return Ok(());
                }
                EventKind::QuitEvent => return Ok(()),
                _ => (),
            },
            Err(RecvError::Lagged(skipped)) => warn!("Skipped {} events", skipped),
            Err(RecvError::Closed) => return Err(()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = MonitorConfig::from_file(&cli.config).map_err(|e| {
        error!("Failed to load config. Error: {}", e);
    })?;
    let index = build_index(&config, &cli)?;
    let positions = read_points_from_file(&cli.positions)?;
    let classifier = ProximityClassifier::from_config(&config);

    if cli.offline {
        for classification in classifier.classify_all(&index, positions) {
            print_verdict(&classification);
        }
        return Ok(());
    }

    let eb = EventBus::default();
    let quit_sender = eb.sender();
    ctrlc::set_handler(move || {
        let _ = quit_sender.send(Event {
            kind: EventKind::QuitEvent,
        });
    })
    .map_err(|e| {
        error!("Failed to install Ctrl-C handler. Error: {}", e);
    })?;

    let mut replay = ReplayGnssModule::new(
        eb.context(),
        &positions,
        Duration::from_millis(cli.interval_ms),
    )
    .map_err(|e| {
        error!("Failed to create ReplayGnssModule. Error: {}", e);
    })?;
    let mut monitor = TrackMonitor::new(eb.context(), index, classifier);
    let verdicts = eb.subscribe();

    info!("Starting modules...");
    let (replay_result, monitor_result, report_result) =
        tokio::join!(replay.run(), monitor.run(), report_verdicts(&eb, verdicts));
    replay_result.and(monitor_result).and(report_result)
}

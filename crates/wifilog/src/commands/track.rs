use std::path::PathBuf;
use std::time::Duration;

use clap::ArgMatches;
use tokio::time::MissedTickBehavior;
use tracing::info;

use wifilog_core::config::{Config, WifilogConfig};
use wifilog_core::events;
use wifilog_core::tracker::{self, ProbeOutcome};

pub(crate) fn handle_track_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new();
    let user_config = WifilogConfig::load(&config)?;

    let target_network = matches
        .get_one::<String>("network")
        .cloned()
        .or_else(|| user_config.tracker.network.clone());
    let probe_interval = Duration::from_secs(user_config.tracker.probe_interval_secs);
    let store_path = config.connections_file();

    info!(
        event = "cli.track_started",
        target_network = ?target_network,
        probe_interval_secs = probe_interval.as_secs(),
        once = matches.get_flag("once")
    );

    if matches.get_flag("once") {
        let outcome = tracker::record_probe(target_network.as_deref(), &store_path)?;
        print_outcome(&outcome);
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_track_loop(target_network, store_path, probe_interval));

    Ok(())
}

async fn run_track_loop(
    target_network: Option<String>,
    store_path: PathBuf,
    probe_interval: Duration,
) {
    let mut ticker = tokio::time::interval(probe_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // A failed probe only affects this tick; the loop continues
                if let Err(e) = tracker::record_probe(target_network.as_deref(), &store_path) {
                    tracing::error!(event = "cli.track_probe_failed", error = %e);
                }
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::error!(event = "cli.track_signal_failed", error = %e);
                }
                break;
            }
        }
    }

    events::log_app_shutdown();
}

fn print_outcome(outcome: &ProbeOutcome) {
    match outcome {
        ProbeOutcome::Recorded { date, time } => {
            println!("Recorded connection at {} on {}", time, date);
        }
        ProbeOutcome::NotConnected => println!("Not connected to a WiFi network"),
        ProbeOutcome::OtherNetwork { ssid } => {
            println!("Connected to untracked network '{}'", ssid);
        }
    }
}

use clap::ArgMatches;

use wifilog_core::config::Config;
use wifilog_core::events;
use wifilog_core::poller::POLL_INTERVAL;
use wifilog_core::poller::lifecycle::ViewLifecycle;
use wifilog_core::render;
use wifilog_core::source::{ConnectionSource, FileSource};

pub(crate) fn handle_watch_command(
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new();
    let source = FileSource::new(config.connections_file());

    // One thread drives everything: the poll timer, fetches, and redraws
    // run cooperatively on a single event loop.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_watch_loop(source));

    Ok(())
}

async fn run_watch_loop<S: ConnectionSource>(source: S) {
    let mut lifecycle = ViewLifecycle::new();
    let mut updates = lifecycle.mount(source);

    println!(
        "Watching connection log (refreshes every {}s, Ctrl-C to exit)",
        POLL_INTERVAL.as_secs()
    );

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    // Poller is gone; nothing further will be published
                    break;
                }
                let rows = render::render_rows(&updates.borrow_and_update());
                print_view(&rows);
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::error!(event = "cli.watch_signal_failed", error = %e);
                }
                break;
            }
        }
    }

    lifecycle.unmount();
    events::log_app_shutdown();
}

fn print_view(rows: &[String]) {
    println!();
    if rows.is_empty() {
        println!("No connections recorded yet.");
        return;
    }
    for row in rows {
        println!("{}", row);
    }
}

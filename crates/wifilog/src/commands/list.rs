use clap::ArgMatches;
use tracing::info;

use wifilog_core::config::Config;
use wifilog_core::records::persistence::load_records;
use wifilog_core::render;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let config = Config::new();
    let log = load_records(&config.connections_file())?;

    info!(
        event = "cli.list_completed",
        record_count = log.len(),
        json_output
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&log)?);
        return Ok(());
    }

    if log.is_empty() {
        println!("No connections recorded yet.");
        return Ok(());
    }

    for row in render::render_rows(&log) {
        println!("{}", row);
    }

    Ok(())
}

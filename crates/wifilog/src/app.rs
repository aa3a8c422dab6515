use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("wifilog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track and display daily WiFi connection times")
        .long_about(
            "wifilog records, per calendar day, the earliest and latest time this machine \
            was seen on a target WiFi network. 'wifilog track' runs the recorder, \
            'wifilog watch' shows a live periodically refreshed view of the log, and \
            'wifilog list' prints it once.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("watch")
                .about("Display the connection log, refreshed every 30 seconds"),
        )
        .subcommand(
            Command::new("list")
                .about("Print the connection log once")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("track")
                .about("Record presence on the tracked WiFi network")
                .arg(
                    Arg::new("network")
                        .long("network")
                        .short('n')
                        .help("SSID to track (overrides config)"),
                )
                .arg(
                    Arg::new("once")
                        .long("once")
                        .help("Probe once and exit instead of looping")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}

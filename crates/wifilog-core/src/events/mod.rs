use tracing::{error, info};

/// Log application startup with the subcommand being dispatched.
pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        command,
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

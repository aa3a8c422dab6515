//! Current WiFi network detection.
//!
//! Shells out to the platform tool; a machine that is not associated (or
//! a platform without a known tool) reads as not connected rather than an
//! error.

#[cfg(any(target_os = "macos", target_os = "linux"))]
use std::process::Command;

/// SSID of the currently associated WiFi network, if any.
#[cfg(target_os = "macos")]
pub fn current_ssid() -> Option<String> {
    let output = match Command::new("networksetup")
        .args(["-getairportnetwork", "en0"])
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(
                event = "core.tracker.ssid_probe_failed",
                tool = "networksetup",
                error = %e,
                "Failed to execute networksetup"
            );
            return None;
        }
    };

    if !output.status.success() {
        tracing::warn!(
            event = "core.tracker.ssid_probe_failed",
            tool = "networksetup",
            exit_code = ?output.status.code(),
            stderr = %String::from_utf8_lossy(&output.stderr)
        );
        return None;
    }

    parse_airport_output(&String::from_utf8_lossy(&output.stdout))
}

/// SSID of the currently associated WiFi network, if any.
#[cfg(target_os = "linux")]
pub fn current_ssid() -> Option<String> {
    let output = match Command::new("iwgetid").arg("-r").output() {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(
                event = "core.tracker.ssid_probe_failed",
                tool = "iwgetid",
                error = %e,
                "Failed to execute iwgetid"
            );
            return None;
        }
    };

    // iwgetid exits non-zero when not associated; that's "not connected"
    if !output.status.success() {
        return None;
    }

    parse_iwgetid_output(&String::from_utf8_lossy(&output.stdout))
}

/// SSID of the currently associated WiFi network, if any.
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn current_ssid() -> Option<String> {
    tracing::debug!(
        event = "core.tracker.ssid_probe_unsupported",
        os = std::env::consts::OS
    );
    None
}

/// Parse `networksetup -getairportnetwork` output, typically
/// `Current Wi-Fi Network: SSID_NAME`.
#[allow(dead_code)]
fn parse_airport_output(stdout: &str) -> Option<String> {
    stdout
        .split(": ")
        .nth(1)
        .map(|ssid| ssid.trim().to_string())
        .filter(|ssid| !ssid.is_empty())
}

/// Parse `iwgetid -r` output: the bare SSID on one line.
#[allow(dead_code)]
fn parse_iwgetid_output(stdout: &str) -> Option<String> {
    let ssid = stdout.trim();
    if ssid.is_empty() {
        None
    } else {
        Some(ssid.to_string())
    }
}

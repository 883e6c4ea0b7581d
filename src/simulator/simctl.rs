// SPDX-License-Identifier: MIT
//! Thin wrapper around `xcrun simctl` for device-level screenshots and
//! booted-device discovery.

use crate::simulator::model::CaptureError;
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Save a device-level screenshot to `path`.
///
/// Returns the size of the written PNG in bytes.
pub async fn screenshot(device: &str, name: &str, path: &Path) -> Result<u64, CaptureError> {
    let output = Command::new("xcrun")
        .args(["simctl", "io", device, "screenshot"])
        .arg(path)
        .output()
        .await
        .map_err(|e| CaptureError::ScreenshotFailed {
            name: name.to_string(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CaptureError::ScreenshotFailed {
            name: name.to_string(),
            detail: stderr.trim().to_string(),
        });
    }

    let bytes = std::fs::metadata(path)
        .map_err(|e| CaptureError::ScreenshotFailed {
            name: name.to_string(),
            detail: format!("screenshot written but unreadable: {e}"),
        })?
        .len();
    debug!(name, bytes, "screenshot saved");
    Ok(bytes)
}

#[derive(Debug, Deserialize)]
struct DeviceList {
    #[serde(default)]
    devices: std::collections::HashMap<String, Vec<Device>>,
}

#[derive(Debug, Deserialize)]
struct Device {
    name: String,
    state: String,
}

/// Names of currently booted simulator devices.
///
/// Runs `xcrun simctl list devices booted -j` and flattens the per-runtime
/// device map.
pub async fn booted_devices() -> Result<Vec<String>, CaptureError> {
    let output = Command::new("xcrun")
        .args(["simctl", "list", "devices", "booted", "-j"])
        .output()
        .await
        .map_err(|e| CaptureError::WindowQueryFailed(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CaptureError::WindowQueryFailed(stderr.trim().to_string()));
    }

    let parsed: DeviceList = serde_json::from_slice(&output.stdout)
        .map_err(|e| CaptureError::WindowQueryFailed(format!("simctl JSON: {e}")))?;

    Ok(parsed
        .devices
        .into_values()
        .flatten()
        .filter(|d| d.state == "Booted")
        .map(|d| d.name)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_list_json_parses() {
        let raw = r#"{
            "devices": {
                "com.apple.CoreSimulator.SimRuntime.iOS-18-2": [
                    { "name": "iPhone 16 Pro", "state": "Booted", "udid": "AAAA" }
                ],
                "com.apple.CoreSimulator.SimRuntime.iOS-17-5": []
            }
        }"#;
        let parsed: DeviceList = serde_json::from_str(raw).unwrap();
        let booted: Vec<String> = parsed
            .devices
            .into_values()
            .flatten()
            .filter(|d| d.state == "Booted")
            .map(|d| d.name)
            .collect();
        assert_eq!(booted, vec!["iPhone 16 Pro".to_string()]);
    }

    #[test]
    fn empty_device_list_is_ok() {
        let parsed: DeviceList = serde_json::from_str(r#"{ "devices": {} }"#).unwrap();
        assert!(parsed.devices.is_empty());
    }
}

// SPDX-License-Identifier: MIT
//! Window enumeration and foregrounding through the macOS automation layer.
//!
//! System Events is queried once via `osascript`; the script emits one
//! `owner|x|y|width|height` line per visible window. Parsing and matching
//! are pure functions so the locator behavior is testable off-macOS.

use crate::simulator::model::{CaptureError, WindowBounds, WindowInfo};
use tokio::process::Command;
use tracing::debug;

/// AppleScript that prints every visible window as `owner|x|y|w|h`.
const LIST_WINDOWS_SCRIPT: &str = r#"
tell application "System Events"
    set out to ""
    repeat with p in (every process whose visible is true)
        repeat with w in windows of p
            set {px, py} to position of w
            set {pw, ph} to size of w
            set out to out & (name of p) & "|" & px & "|" & py & "|" & pw & "|" & ph & linefeed
        end repeat
    end repeat
end tell
return out
"#;

/// Enumerate on-screen windows (owner name + bounds).
pub async fn list_windows() -> Result<Vec<WindowInfo>, CaptureError> {
    let output = Command::new("osascript")
        .args(["-e", LIST_WINDOWS_SCRIPT])
        .output()
        .await
        .map_err(|e| CaptureError::WindowQueryFailed(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CaptureError::WindowQueryFailed(stderr.trim().to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let windows = parse_window_list(&stdout);
    debug!(count = windows.len(), "enumerated visible windows");
    Ok(windows)
}

/// Parse `owner|x|y|w|h` lines into window entries.
///
/// Malformed lines are skipped — System Events output can contain apps with
/// odd window states, and one bad entry must not sink the whole query.
pub fn parse_window_list(raw: &str) -> Vec<WindowInfo> {
    raw.lines().filter_map(parse_window_line).collect()
}

fn parse_window_line(line: &str) -> Option<WindowInfo> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    // Owner names may themselves contain '|'; take the numeric fields from
    // the right and keep the rest as the owner.
    let fields: Vec<&str> = line.rsplitn(5, '|').collect();
    if fields.len() != 5 {
        return None;
    }
    // rsplitn yields fields right-to-left: h, w, y, x, owner.
    let height: f64 = fields[0].trim().parse().ok()?;
    let width: f64 = fields[1].trim().parse().ok()?;
    let y: f64 = fields[2].trim().parse().ok()?;
    let x: f64 = fields[3].trim().parse().ok()?;
    let owner = fields[4].trim();
    if owner.is_empty() {
        return None;
    }
    Some(WindowInfo {
        owner: owner.to_string(),
        bounds: WindowBounds { x, y, width, height },
    })
}

/// First window whose owner name contains `target`, if any.
pub fn locate<'a>(windows: &'a [WindowInfo], target: &str) -> Option<&'a WindowInfo> {
    windows.iter().find(|w| w.owner.contains(target))
}

/// Bring the Simulator app to the foreground.
pub async fn activate_simulator() -> Result<(), CaptureError> {
    let output = Command::new("osascript")
        .args(["-e", r#"tell application "Simulator" to activate"#])
        .output()
        .await
        .map_err(|e| CaptureError::WindowQueryFailed(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CaptureError::WindowQueryFailed(format!(
            "could not activate Simulator: {}",
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_lines() {
        let raw = "Simulator|100|50|384|833\nFinder|0|25|1440|875\n";
        let windows = parse_window_list(raw);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].owner, "Simulator");
        assert_eq!(windows[0].bounds.width, 384.0);
        assert_eq!(windows[1].owner, "Finder");
    }

    #[test]
    fn skips_malformed_and_blank_lines() {
        let raw = "\nnot-a-window\nSimulator|100|50|384\nTerminal|10|20|800|600\n";
        let windows = parse_window_list(raw);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].owner, "Terminal");
    }

    #[test]
    fn owner_may_contain_separator() {
        let raw = "My|Weird|App|0|0|100|200\n";
        let windows = parse_window_list(raw);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].owner, "My|Weird|App");
        assert_eq!(windows[0].bounds.height, 200.0);
    }

    #[test]
    fn locate_matches_owner_substring() {
        let windows = parse_window_list("Finder|0|0|10|10\niOS Simulator Beta|5|5|384|833\n");
        let hit = locate(&windows, "Simulator").expect("should match");
        assert_eq!(hit.bounds.x, 5.0);
    }

    #[test]
    fn locate_reports_no_match() {
        let windows = parse_window_list("Finder|0|0|10|10\n");
        assert!(locate(&windows, "Simulator").is_none());
    }
}

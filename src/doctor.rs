// SPDX-License-Identifier: MIT
//! doctor.rs — pre-flight diagnostic checks for `vantag-shots doctor`.
//!
//! This module is self-contained: it runs before either pipeline so missing
//! tooling is caught up front instead of as a confusing mid-run failure.

use crate::appstore::renderer;
use crate::config::ShotsConfig;
use crate::simulator::simctl;
use std::process::Command;

/// The result of a single diagnostic check.
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

/// Run all diagnostic checks and return a list of results.
pub async fn run_doctor(config: &ShotsConfig) -> Vec<CheckResult> {
    vec![
        check_xcrun(),
        check_booted_simulator().await,
        check_osascript(),
        check_browser(config),
        check_out_dir_writable(config),
    ]
}

// ─── Individual checks ────────────────────────────────────────────────────────

/// Check 1: `xcrun` is installed (Xcode command-line tools).
fn check_xcrun() -> CheckResult {
    match Command::new("xcrun").arg("--version").output() {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout)
                .lines()
                .next()
                .unwrap_or("unknown version")
                .trim()
                .to_string();
            CheckResult {
                name: "xcrun installed",
                passed: true,
                detail: version,
            }
        }
        _ => CheckResult {
            name: "xcrun installed",
            passed: false,
            detail: "not found in PATH — install the Xcode command-line tools".to_string(),
        },
    }
}

/// Check 2: at least one simulator device is booted.
async fn check_booted_simulator() -> CheckResult {
    match simctl::booted_devices().await {
        Ok(devices) if !devices.is_empty() => CheckResult {
            name: "simulator booted",
            passed: true,
            detail: devices.join(", "),
        },
        Ok(_) => CheckResult {
            name: "simulator booted",
            passed: false,
            detail: "no booted device — open the Simulator and boot the app".to_string(),
        },
        Err(e) => CheckResult {
            name: "simulator booted",
            passed: false,
            detail: e.to_string(),
        },
    }
}

/// Check 3: `osascript` is available (window queries + foregrounding).
fn check_osascript() -> CheckResult {
    match Command::new("osascript").args(["-e", "return 1"]).output() {
        Ok(out) if out.status.success() => CheckResult {
            name: "osascript available",
            passed: true,
            detail: "ok".to_string(),
        },
        _ => CheckResult {
            name: "osascript available",
            passed: false,
            detail: "not found — simulator capture requires macOS".to_string(),
        },
    }
}

/// Check 4: a headless browser is on PATH (or configured explicitly).
fn check_browser(config: &ShotsConfig) -> CheckResult {
    match renderer::detect_browser(config.render.browser.as_deref()) {
        Some(browser) => CheckResult {
            name: "headless browser",
            passed: true,
            detail: browser,
        },
        None => CheckResult {
            name: "headless browser",
            passed: false,
            detail: "no Chromium/Chrome binary found on PATH".to_string(),
        },
    }
}

/// Check 5: the output directory can be created and written.
fn check_out_dir_writable(config: &ShotsConfig) -> CheckResult {
    let dir = &config.output.dir;
    let probe = dir.join(".doctor-probe");
    let result = std::fs::create_dir_all(dir).and_then(|()| {
        std::fs::write(&probe, b"probe")?;
        std::fs::remove_file(&probe)
    });
    match result {
        Ok(()) => CheckResult {
            name: "output dir writable",
            passed: true,
            detail: dir.display().to_string(),
        },
        Err(e) => CheckResult {
            name: "output dir writable",
            passed: false,
            detail: format!("{}: {e}", dir.display()),
        },
    }
}

/// Print results in a `✓/✗ name detail` table.
pub fn print_doctor_results(results: &[CheckResult]) {
    println!("vantag-shots doctor");
    println!("───────────────────");
    for r in results {
        let mark = if r.passed { "✓" } else { "✗" };
        println!("  {mark} {:<22} {}", r.name, r.detail);
    }
    let failed = results.iter().filter(|r| !r.passed).count();
    if failed == 0 {
        println!("\nAll checks passed.");
    } else {
        println!("\n{failed} check(s) failed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writable_dir_passes() {
        let tmp = TempDir::new().unwrap();
        let mut config = ShotsConfig::default();
        config.output.dir = tmp.path().join("shots");
        let result = check_out_dir_writable(&config);
        assert!(result.passed, "{}", result.detail);
        // probe file must not linger
        assert!(!config.output.dir.join(".doctor-probe").exists());
    }

    #[test]
    fn explicit_browser_satisfies_browser_check() {
        let mut config = ShotsConfig::default();
        config.render.browser = Some("/opt/bin/chromium".to_string());
        let result = check_browser(&config);
        assert!(result.passed);
        assert_eq!(result.detail, "/opt/bin/chromium");
    }
}

// SPDX-License-Identifier: MIT
//! Capture runner — executes the precomputed tap/settle/screenshot sequence
//! against the running Simulator.
//!
//! Policy (matches the rest of the tool): if the Simulator window cannot be
//! found the run aborts immediately; any later per-step failure is logged
//! and the run continues with the next step.

use crate::manifest::{self, Artifact};
use crate::simulator::input;
use crate::simulator::model::{CaptureError, CaptureStep, TabSlot, WindowBounds, SIMULATOR_OWNER};
use crate::simulator::simctl;
use crate::simulator::window;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Options for one capture run.
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Directory the PNGs and manifest.json are written to.
    pub out_dir: PathBuf,
    /// simctl device selector ("booted" or a UDID).
    pub device: String,
    /// Multiplier applied to every settle delay. >1.0 for slow machines.
    pub settle_scale: f64,
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct CaptureSummary {
    pub artifacts: Vec<Artifact>,
    pub failed_steps: usize,
}

/// The full navigation-and-capture sequence for the six raw screenshots.
///
/// Precomputed from the window bounds so every coordinate is known before
/// any input fires. Sequence and delays follow the app's screen flow:
/// the add-expense sheet opens from Home via the center "+" and is
/// dismissed by tapping the area above it; Achievements lives behind the
/// Badges row roughly 55% down the Settings screen, with a back button in
/// the top-left corner.
pub fn capture_plan(bounds: &WindowBounds) -> Vec<CaptureStep> {
    let tap = |slot: TabSlot| {
        let (x, y) = slot.tap_point(bounds);
        CaptureStep::Tap { x, y }
    };
    let center_x = bounds.x_at(0.5);

    vec![
        // Let the freshly foregrounded window settle.
        CaptureStep::Settle { ms: 1500 },
        // 1/6 — Home
        tap(TabSlot::Home),
        CaptureStep::Settle { ms: 1500 },
        CaptureStep::Screenshot { name: "raw_1_home" },
        // 2/6 — Reports/Analysis
        tap(TabSlot::Analysis),
        CaptureStep::Settle { ms: 2000 },
        CaptureStep::Screenshot { name: "raw_2_reports" },
        // 3/6 — Add-expense sheet (open from Home, then dismiss upward)
        tap(TabSlot::Home),
        CaptureStep::Settle { ms: 1000 },
        tap(TabSlot::Add),
        CaptureStep::Settle { ms: 2000 },
        CaptureStep::Screenshot { name: "raw_3_add_expense" },
        CaptureStep::Tap { x: center_x, y: bounds.y + 100.0 },
        CaptureStep::Settle { ms: 1000 },
        // 4/6 — Achievements via Settings > Badges
        tap(TabSlot::Settings),
        CaptureStep::Settle { ms: 2000 },
        CaptureStep::Tap { x: center_x, y: bounds.y_at(0.55) },
        CaptureStep::Settle { ms: 2000 },
        CaptureStep::Screenshot { name: "raw_4_achievements" },
        // Back button, top-left corner.
        CaptureStep::Tap { x: bounds.x + 30.0, y: bounds.y + 60.0 },
        CaptureStep::Settle { ms: 1000 },
        // 5/6 — Dreams/Pursuits
        tap(TabSlot::Dreams),
        CaptureStep::Settle { ms: 2000 },
        CaptureStep::Screenshot { name: "raw_5_dreams" },
        // 6/6 — Settings
        tap(TabSlot::Settings),
        CaptureStep::Settle { ms: 2000 },
        CaptureStep::Screenshot { name: "raw_6_settings" },
    ]
}

/// Locate the Simulator, foreground it, and execute the capture plan.
pub async fn run(opts: &CaptureOptions) -> Result<CaptureSummary, CaptureError> {
    if !cfg!(target_os = "macos") {
        return Err(CaptureError::UnsupportedPlatform);
    }

    std::fs::create_dir_all(&opts.out_dir)
        .map_err(|e| CaptureError::WindowQueryFailed(format!("output dir: {e}")))?;

    let windows = window::list_windows().await?;
    let sim = window::locate(&windows, SIMULATOR_OWNER).ok_or(CaptureError::WindowNotFound)?;
    let bounds = sim.bounds;
    info!(
        x = bounds.x,
        y = bounds.y,
        width = bounds.width,
        height = bounds.height,
        "simulator window located"
    );

    window::activate_simulator().await?;
    sleep(Duration::from_millis(500)).await;

    let plan = capture_plan(&bounds);
    let mut summary = CaptureSummary::default();

    for step in &plan {
        match step {
            CaptureStep::Tap { x, y } => {
                if let Err(e) = input::tap(*x, *y).await {
                    warn!(x, y, error = %e, "tap failed — continuing");
                    summary.failed_steps += 1;
                }
            }
            CaptureStep::Settle { ms } => {
                let scaled = (*ms as f64 * opts.settle_scale) as u64;
                sleep(Duration::from_millis(scaled)).await;
            }
            CaptureStep::Screenshot { name } => {
                let file = format!("{name}.png");
                let path = opts.out_dir.join(&file);
                match simctl::screenshot(&opts.device, name, &path).await {
                    Ok(bytes) => {
                        info!(name, kb = bytes / 1024, "saved {}", path.display());
                        summary.artifacts.push(Artifact::new(name, &file, bytes));
                    }
                    Err(e) => {
                        warn!(name, error = %e, "screenshot failed — continuing");
                        summary.failed_steps += 1;
                    }
                }
            }
        }
    }

    if let Err(e) = manifest::write(&opts.out_dir, &summary.artifacts) {
        warn!(error = %e, "could not write manifest.json");
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> WindowBounds {
        WindowBounds {
            x: 100.0,
            y: 50.0,
            width: 384.0,
            height: 833.0,
        }
    }

    fn shot_names(plan: &[CaptureStep]) -> Vec<&'static str> {
        plan.iter()
            .filter_map(|s| match s {
                CaptureStep::Screenshot { name } => Some(*name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn plan_has_six_screenshots_in_order() {
        let plan = capture_plan(&bounds());
        assert_eq!(
            shot_names(&plan),
            vec![
                "raw_1_home",
                "raw_2_reports",
                "raw_3_add_expense",
                "raw_4_achievements",
                "raw_5_dreams",
                "raw_6_settings",
            ]
        );
    }

    #[test]
    fn every_tap_is_inside_the_window() {
        let b = bounds();
        for step in capture_plan(&b) {
            if let CaptureStep::Tap { x, y } = step {
                assert!(b.contains(x, y), "tap ({x}, {y}) outside window");
            }
        }
    }

    #[test]
    fn plan_always_settles_before_a_screenshot() {
        let plan = capture_plan(&bounds());
        for pair in plan.windows(2) {
            if let CaptureStep::Screenshot { name } = &pair[1] {
                assert!(
                    matches!(pair[0], CaptureStep::Settle { .. }),
                    "{name} not preceded by a settle"
                );
            }
        }
    }
}

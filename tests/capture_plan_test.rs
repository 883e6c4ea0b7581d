// SPDX-License-Identifier: MIT
//! Property tests for the capture-plan geometry.

use proptest::prelude::*;
use vantag_shots::simulator::model::{CaptureStep, WindowBounds};
use vantag_shots::simulator::runner::capture_plan;

proptest! {
    /// Wherever the Simulator window sits on screen, every planned tap
    /// lands inside it (window sizes below the real Simulator minimum are
    /// out of scope).
    #[test]
    fn taps_stay_inside_the_window(
        x in -2000.0f64..2000.0,
        y in -2000.0f64..2000.0,
        width in 200.0f64..3000.0,
        height in 400.0f64..3000.0,
    ) {
        let bounds = WindowBounds { x, y, width, height };
        for step in capture_plan(&bounds) {
            if let CaptureStep::Tap { x: tx, y: ty } = step {
                prop_assert!(bounds.contains(tx, ty), "tap ({tx}, {ty}) outside {bounds:?}");
            }
        }
    }

    /// The plan always produces the same six screenshots regardless of
    /// window geometry.
    #[test]
    fn screenshot_names_are_stable(
        x in -2000.0f64..2000.0,
        y in -2000.0f64..2000.0,
        width in 200.0f64..3000.0,
        height in 400.0f64..3000.0,
    ) {
        let bounds = WindowBounds { x, y, width, height };
        let names: Vec<&str> = capture_plan(&bounds)
            .iter()
            .filter_map(|s| match s {
                CaptureStep::Screenshot { name } => Some(*name),
                _ => None,
            })
            .collect();
        prop_assert_eq!(names, vec![
            "raw_1_home",
            "raw_2_reports",
            "raw_3_add_expense",
            "raw_4_achievements",
            "raw_5_dreams",
            "raw_6_settings",
        ]);
    }
}

// SPDX-License-Identifier: MIT
// Simulator capture data model: window geometry, tab targets, capture steps.

use thiserror::Error;

/// Name substring used to locate the Simulator in the window list.
pub const SIMULATOR_OWNER: &str = "Simulator";

/// Vertical offset of the tab-bar icon row, measured up from the window bottom.
/// Empirical value for the default Simulator zoom level (384×833 window).
pub const TAB_BAR_OFFSET: f64 = 35.0;

/// Screen rectangle of an on-screen window, in absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowBounds {
    /// Absolute y coordinate of the tab-bar icon row.
    pub fn tab_y(&self) -> f64 {
        self.y + self.height - TAB_BAR_OFFSET
    }

    /// Absolute x coordinate at `fraction` of the window width.
    pub fn x_at(&self, fraction: f64) -> f64 {
        self.x + self.width * fraction
    }

    /// Absolute y coordinate at `fraction` of the window height.
    pub fn y_at(&self, fraction: f64) -> f64 {
        self.y + self.height * fraction
    }

    /// True when the point lies inside the window rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// One entry of the OS window list.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowInfo {
    /// Owning application name (e.g. "Simulator").
    pub owner: String,
    pub bounds: WindowBounds,
}

/// The five tab-bar items of the Vantag app, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSlot {
    Home,
    Analysis,
    /// Center "+" button — opens the add-expense sheet.
    Add,
    Dreams,
    Settings,
}

impl TabSlot {
    /// Horizontal position of the tab icon as a fraction of window width.
    pub fn fraction(&self) -> f64 {
        match self {
            TabSlot::Home => 0.1,
            TabSlot::Analysis => 0.3,
            TabSlot::Add => 0.5,
            TabSlot::Dreams => 0.7,
            TabSlot::Settings => 0.9,
        }
    }

    /// Absolute tap point for this tab within `bounds`.
    pub fn tap_point(&self, bounds: &WindowBounds) -> (f64, f64) {
        (bounds.x_at(self.fraction()), bounds.tab_y())
    }
}

/// One step of a capture run. Plans are precomputed from the window bounds
/// so the whole navigation sequence is inspectable before any input fires.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureStep {
    /// Synthesize a left click at absolute screen coordinates.
    Tap { x: f64, y: f64 },
    /// Let the app settle (animations, sheet transitions) before continuing.
    Settle { ms: u64 },
    /// Save a device-level screenshot under this name (no extension).
    Screenshot { name: &'static str },
}

/// Errors from the simulator capture pipeline.
///
/// Only `WindowNotFound` and `WindowQueryFailed` abort a run; everything
/// else is reported per-step and the run keeps going.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Simulator window not found — make sure the simulator is running")]
    WindowNotFound,

    #[error("could not query the window list: {0}")]
    WindowQueryFailed(String),

    #[error("mouse input synthesis failed: {0}")]
    InputFailed(String),

    #[error("screenshot '{name}' failed: {detail}")]
    ScreenshotFailed { name: String, detail: String },

    #[error("simulator capture requires macOS (osascript, simctl, CGEvent taps)")]
    UnsupportedPlatform,
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

    #[test]
    fn tab_y_sits_above_window_bottom() {
        let b = bounds();
        assert_eq!(b.tab_y(), 50.0 + 833.0 - TAB_BAR_OFFSET);
        assert!(b.contains(b.x_at(0.5), b.tab_y()));
    }

    #[test]
    fn tab_fractions_are_ordered_left_to_right() {
        let slots = [
            TabSlot::Home,
            TabSlot::Analysis,
            TabSlot::Add,
            TabSlot::Dreams,
            TabSlot::Settings,
        ];
        for pair in slots.windows(2) {
            assert!(pair[0].fraction() < pair[1].fraction());
        }
    }

    #[test]
    fn every_tab_tap_point_is_inside_the_window() {
        let b = bounds();
        for slot in [
            TabSlot::Home,
            TabSlot::Analysis,
            TabSlot::Add,
            TabSlot::Dreams,
            TabSlot::Settings,
        ] {
            let (x, y) = slot.tap_point(&b);
            assert!(b.contains(x, y), "{slot:?} tap ({x}, {y}) outside window");
        }
    }
}

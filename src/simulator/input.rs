// SPDX-License-Identifier: MIT
//! Synthetic mouse input for simulator taps.
//!
//! A tap is a left press + release at absolute screen coordinates, with the
//! same inter-event delays the app needs to register it as a touch: 50 ms
//! between press and release, 300 ms after release for the UI to react.

use crate::simulator::model::CaptureError;
use tracing::trace;

/// Delay between mouse-down and mouse-up.
#[cfg(target_os = "macos")]
const PRESS_MS: u64 = 50;
/// Delay after mouse-up, before the next action.
#[cfg(target_os = "macos")]
const RELEASE_MS: u64 = 300;

/// Send a left click at absolute screen coordinates.
#[cfg(target_os = "macos")]
pub async fn tap(x: f64, y: f64) -> Result<(), CaptureError> {
    use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};
    use std::time::Duration;
    use tokio::time::sleep;

    trace!(x, y, "tap");
    let mut enigo =
        Enigo::new(&Settings::default()).map_err(|e| CaptureError::InputFailed(e.to_string()))?;

    enigo
        .move_mouse(x as i32, y as i32, Coordinate::Abs)
        .map_err(|e| CaptureError::InputFailed(e.to_string()))?;
    enigo
        .button(Button::Left, Direction::Press)
        .map_err(|e| CaptureError::InputFailed(e.to_string()))?;
    sleep(Duration::from_millis(PRESS_MS)).await;
    enigo
        .button(Button::Left, Direction::Release)
        .map_err(|e| CaptureError::InputFailed(e.to_string()))?;
    sleep(Duration::from_millis(RELEASE_MS)).await;
    Ok(())
}

#[cfg(not(target_os = "macos"))]
pub async fn tap(x: f64, y: f64) -> Result<(), CaptureError> {
    trace!(x, y, "tap refused — not macOS");
    Err(CaptureError::UnsupportedPlatform)
}

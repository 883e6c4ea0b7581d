// SPDX-License-Identifier: MIT
// App Store frame data model: output geometry, frame registry entry, errors.

use std::path::PathBuf;
use thiserror::Error;

/// App Store screenshot width in pixels (6.9" display slot).
pub const FRAME_WIDTH: u32 = 1320;
/// App Store screenshot height in pixels.
pub const FRAME_HEIGHT: u32 = 2868;

/// One marketing frame: a stable output name plus its HTML builder.
#[derive(Clone, Copy)]
pub struct Frame {
    /// Output base name, no extension (e.g. "appstore_1_hook").
    pub name: &'static str,
    pub build: fn() -> String,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame").field("name", &self.name).finish()
    }
}

/// Options for one render run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory the PNGs and manifest.json are written to.
    pub out_dir: PathBuf,
    /// Directory the intermediate HTML documents are written to.
    pub frames_dir: PathBuf,
    /// Explicit browser binary; when unset, PATH is probed.
    pub browser: Option<String>,
    /// Per-frame browser timeout in seconds.
    pub timeout_secs: u64,
    /// Stop after writing the HTML documents (no browser needed).
    pub html_only: bool,
}

/// Errors from the headless render pipeline.
///
/// A missing browser aborts the whole run; the per-frame variants are
/// reported and the run moves on to the next frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(
        "no headless browser found on PATH — install Chromium or Chrome and ensure one of \
         these binaries is available: chromium, chrome, google-chrome, chromium-browser"
    )]
    NoBrowser,

    #[error("failed to start browser process: {0}")]
    SpawnFailed(String),

    #[error("browser did not produce output within {0} seconds")]
    Timeout(u64),

    #[error("browser exited but produced no screenshot file")]
    NoOutput,

    #[error("could not read browser output: {0}")]
    ReadFailed(String),

    #[error("rendered PNG is {actual_w}×{actual_h}, expected {expected_w}×{expected_h}")]
    DimensionMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },

    #[error("could not write frame HTML: {0}")]
    WriteFailed(#[from] std::io::Error),
}

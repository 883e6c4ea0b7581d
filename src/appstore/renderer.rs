// SPDX-License-Identifier: MIT
// Headless render pipeline for the App Store frames.
//
// Strategy:
//   1. detect_browser() honors an explicit binary, else probes PATH.
//   2. Each frame's HTML is written to the frames directory first — the
//      documents are kept as editable intermediates.
//   3. The browser is spawned per frame with --headless, --screenshot,
//      --window-size=WxH, and a --no-sandbox flag for common Linux/CI setups.
//   4. The PNG is checked for existence and exact pixel dimensions.
//
// A missing browser aborts the run; a single frame failing is logged and the
// run continues with the remaining frames.

use crate::appstore::frames::FRAMES;
use crate::appstore::model::{RenderError, RenderOptions, FRAME_HEIGHT, FRAME_WIDTH};
use crate::manifest::{self, Artifact};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Browser binaries to probe, in preference order.
const CANDIDATE_BROWSERS: &[&str] = &["chromium", "chrome", "google-chrome", "chromium-browser"];

/// What a render run produced.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub artifacts: Vec<Artifact>,
    pub failed_frames: usize,
}

/// Resolve the browser binary to use.
///
/// An explicit override is trusted as-is; otherwise the first candidate
/// found on PATH wins.
pub fn detect_browser(explicit: Option<&str>) -> Option<String> {
    if let Some(binary) = explicit {
        return Some(binary.to_string());
    }
    for candidate in CANDIDATE_BROWSERS {
        if on_path(candidate) {
            debug!(browser = *candidate, "headless browser detected on PATH");
            return Some((*candidate).to_string());
        }
    }
    None
}

/// Check if a binary is available on PATH using `which` semantics.
fn on_path(binary: &str) -> bool {
    if let Ok(path_var) = std::env::var("PATH") {
        for dir in path_var.split(':') {
            let candidate = Path::new(dir).join(binary);
            if candidate.is_file() {
                return true;
            }
        }
    }
    false
}

/// Generate all six frames: write the HTML documents, then rasterize each
/// to a PNG unless `html_only` is set.
pub async fn render_all(opts: &RenderOptions) -> Result<RenderSummary, RenderError> {
    std::fs::create_dir_all(&opts.frames_dir)?;
    std::fs::create_dir_all(&opts.out_dir)?;

    let browser = if opts.html_only {
        None
    } else {
        Some(detect_browser(opts.browser.as_deref()).ok_or(RenderError::NoBrowser)?)
    };

    let mut summary = RenderSummary::default();

    for (i, frame) in FRAMES.iter().enumerate() {
        info!("[{}/{}] {}", i + 1, FRAMES.len(), frame.name);

        let html = (frame.build)();
        let html_path = opts.frames_dir.join(format!("{}.html", frame.name));
        std::fs::write(&html_path, &html)?;
        debug!(path = %html_path.display(), "frame HTML written");

        let Some(browser) = browser.as_deref() else {
            continue;
        };

        let png_path = opts.out_dir.join(format!("{}.png", frame.name));
        match render_frame(browser, &html_path, &png_path, opts.timeout_secs).await {
            Ok(bytes) => {
                info!(name = frame.name, kb = bytes / 1024, "saved {}", png_path.display());
                summary.artifacts.push(Artifact::new(
                    frame.name,
                    &format!("{}.png", frame.name),
                    bytes,
                ));
            }
            Err(e) => {
                warn!(name = frame.name, error = %e, "frame render failed — continuing");
                summary.failed_frames += 1;
            }
        }
    }

    if !opts.html_only {
        if let Err(e) = manifest::write(&opts.out_dir, &summary.artifacts) {
            warn!(error = %e, "could not write manifest.json");
        }
    }

    Ok(summary)
}

/// Rasterize one HTML document to `png_path` at the fixed frame size.
///
/// Returns the PNG size in bytes.
async fn render_frame(
    browser: &str,
    html_path: &Path,
    png_path: &Path,
    timeout_secs: u64,
) -> Result<u64, RenderError> {
    let url = format!("file://{}", html_path.display());
    let window_size = format!("--window-size={FRAME_WIDTH},{FRAME_HEIGHT}");
    let screenshot_arg = format!("--screenshot={}", png_path.display());

    let mut cmd = Command::new(browser);
    cmd.arg("--headless")
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg("--disable-dev-shm-usage")
        .arg("--hide-scrollbars")
        .arg("--force-device-scale-factor=1")
        .arg(screenshot_arg)
        .arg(window_size)
        .arg(&url)
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    debug!(browser = %browser, url = %url, "spawning headless browser");

    let mut child = cmd
        .spawn()
        .map_err(|e| RenderError::SpawnFailed(e.to_string()))?;

    match timeout(Duration::from_secs(timeout_secs), child.wait()).await {
        Err(_elapsed) => {
            // Timeout — kill the child to avoid zombie processes.
            let _ = child.kill().await;
            return Err(RenderError::Timeout(timeout_secs));
        }
        Ok(Err(e)) => {
            return Err(RenderError::SpawnFailed(e.to_string()));
        }
        Ok(Ok(status)) => {
            if !status.success() {
                warn!(browser = %browser, status = ?status, "browser exited with non-zero status");
                // Fall through: check if a screenshot was written anyway.
            }
        }
    }

    if !png_path.exists() {
        return Err(RenderError::NoOutput);
    }

    validate_png(png_path)
}

/// Confirm the PNG exists, is non-empty, and is exactly the frame size.
fn validate_png(path: &Path) -> Result<u64, RenderError> {
    let bytes = std::fs::metadata(path)
        .map_err(|e| RenderError::ReadFailed(e.to_string()))?
        .len();
    if bytes == 0 {
        return Err(RenderError::NoOutput);
    }

    let (w, h) = image::image_dimensions(path).map_err(|e| RenderError::ReadFailed(e.to_string()))?;
    if (w, h) != (FRAME_WIDTH, FRAME_HEIGHT) {
        return Err(RenderError::DimensionMismatch {
            expected_w: FRAME_WIDTH,
            expected_h: FRAME_HEIGHT,
            actual_w: w,
            actual_h: h,
        });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_browser_override_wins() {
        assert_eq!(
            detect_browser(Some("/opt/custom/chromium")),
            Some("/opt/custom/chromium".to_string())
        );
    }

    #[test]
    fn on_path_finds_binaries_in_path_var() {
        let tmp = TempDir::new().unwrap();
        let fake = tmp.path().join("fake-browser-bin");
        std::fs::write(&fake, "").unwrap();

        let old_path = std::env::var("PATH").unwrap_or_default();
        std::env::set_var("PATH", format!("{}:{old_path}", tmp.path().display()));
        assert!(on_path("fake-browser-bin"));
        assert!(!on_path("definitely-not-a-browser-zzz"));
        std::env::set_var("PATH", old_path);
    }

    #[test]
    fn validate_png_rejects_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.png");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(validate_png(&path), Err(RenderError::NoOutput)));
    }

    #[test]
    fn validate_png_rejects_wrong_dimensions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("small.png");
        image::RgbaImage::new(10, 10).save(&path).unwrap();
        assert!(matches!(
            validate_png(&path),
            Err(RenderError::DimensionMismatch { actual_w: 10, actual_h: 10, .. })
        ));
    }

    #[test]
    fn validate_png_accepts_exact_frame_size() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("full.png");
        image::GrayImage::new(FRAME_WIDTH, FRAME_HEIGHT).save(&path).unwrap();
        let bytes = validate_png(&path).unwrap();
        assert!(bytes > 0);
    }
}

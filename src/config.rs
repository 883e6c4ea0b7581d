// SPDX-License-Identifier: MIT
//! Tool configuration (`vantag-shots.toml`).
//!
//! Every field has a default, so the file is optional and may be partial.
//! CLI flags override whatever the file says.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file, looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "vantag-shots.toml";

// ─── OutputConfig ────────────────────────────────────────────────────────────

/// Where artifacts land (`[output]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for PNGs and manifest.json.
    pub dir: PathBuf,
    /// Subdirectory of `dir` holding the intermediate HTML frames.
    pub frames_subdir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs/screenshots"),
            frames_subdir: "frames".to_string(),
        }
    }
}

// ─── CaptureConfig ───────────────────────────────────────────────────────────

/// Simulator capture settings (`[capture]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// simctl device selector: "booted" or an explicit UDID.
    pub device: String,
    /// Multiplier on every settle delay. Raise above 1.0 on slow machines.
    pub settle_scale: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device: "booted".to_string(),
            settle_scale: 1.0,
        }
    }
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

/// Headless render settings (`[render]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Explicit browser binary. None = probe PATH.
    pub browser: Option<String>,
    /// Per-frame browser timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            browser: None,
            timeout_secs: 15,
        }
    }
}

// ─── ShotsConfig ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShotsConfig {
    pub output: OutputConfig,
    pub capture: CaptureConfig,
    pub render: RenderConfig,
}

impl ShotsConfig {
    /// Load configuration.
    ///
    /// An explicit `--config` path must exist and parse. The implicit
    /// `vantag-shots.toml` is optional — absent means all defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE} — using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let config: ShotsConfig = toml::from_str(&raw)
            .with_context(|| format!("could not parse {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Directory the intermediate HTML frames go into.
    pub fn frames_dir(&self) -> PathBuf {
        self.output.dir.join(&self.output.frames_subdir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let c = ShotsConfig::default();
        assert_eq!(c.output.dir, PathBuf::from("docs/screenshots"));
        assert_eq!(c.capture.device, "booted");
        assert_eq!(c.render.timeout_secs, 15);
        assert!(c.render.browser.is_none());
        assert_eq!(c.frames_dir(), PathBuf::from("docs/screenshots/frames"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let raw = r#"
            [capture]
            device = "AAAA-BBBB"

            [render]
            timeout_secs = 30
        "#;
        let c: ShotsConfig = toml::from_str(raw).unwrap();
        assert_eq!(c.capture.device, "AAAA-BBBB");
        assert_eq!(c.capture.settle_scale, 1.0);
        assert_eq!(c.render.timeout_secs, 30);
        assert_eq!(c.output.frames_subdir, "frames");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = ShotsConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(err.is_err());
    }

    #[test]
    fn explicit_config_file_is_loaded() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("shots.toml");
        std::fs::write(&path, "[output]\ndir = \"/tmp/out\"\n").unwrap();
        let c = ShotsConfig::load(Some(&path)).unwrap();
        assert_eq!(c.output.dir, PathBuf::from("/tmp/out"));
    }
}

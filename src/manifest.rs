// SPDX-License-Identifier: MIT
//! Run manifest — a small JSON record of every artifact a run produced.
//!
//! Written next to the outputs as `manifest.json`. Informational only: a
//! manifest write failure is logged by callers, never fatal.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One produced output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Logical name (e.g. "raw_1_home", "appstore_2_home").
    pub name: String,
    /// File name relative to the manifest location.
    pub file: String,
    /// Size on disk in bytes.
    pub bytes: u64,
    /// RFC 3339 timestamp of when the artifact was produced.
    pub captured_at: String,
}

impl Artifact {
    pub fn new(name: &str, file: &str, bytes: u64) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            bytes,
            captured_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: String,
    pub artifacts: Vec<Artifact>,
}

/// Write `manifest.json` into `dir`.
pub fn write(dir: &Path, artifacts: &[Artifact]) -> std::io::Result<()> {
    let manifest = Manifest {
        generated_at: Utc::now().to_rfc3339(),
        artifacts: artifacts.to_vec(),
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(dir.join("manifest.json"), json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_readable_manifest() {
        let tmp = TempDir::new().unwrap();
        let artifacts = vec![
            Artifact::new("raw_1_home", "raw_1_home.png", 1024),
            Artifact::new("raw_2_reports", "raw_2_reports.png", 2048),
        ];
        write(tmp.path(), &artifacts).unwrap();

        let raw = std::fs::read_to_string(tmp.path().join("manifest.json")).unwrap();
        let parsed: Manifest = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.artifacts.len(), 2);
        assert_eq!(parsed.artifacts[0].name, "raw_1_home");
        assert_eq!(parsed.artifacts[1].bytes, 2048);
    }

    #[test]
    fn timestamps_are_rfc3339() {
        let a = Artifact::new("x", "x.png", 1);
        assert!(chrono::DateTime::parse_from_rfc3339(&a.captured_at).is_ok());
    }
}

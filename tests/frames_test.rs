// SPDX-License-Identifier: MIT
//! Integration tests for the App Store frame generator.
//!
//! Browser rendering needs a Chromium binary, so these tests exercise the
//! html-only path and the structural guarantees of the generated documents.

use std::collections::BTreeSet;
use tempfile::TempDir;
use vantag_shots::appstore::frames::FRAMES;
use vantag_shots::appstore::model::RenderOptions;
use vantag_shots::appstore::renderer::render_all;

fn html_only_options(tmp: &TempDir) -> RenderOptions {
    RenderOptions {
        out_dir: tmp.path().to_path_buf(),
        frames_dir: tmp.path().join("frames"),
        browser: None,
        timeout_secs: 15,
        html_only: true,
    }
}

#[tokio::test]
async fn html_only_run_writes_all_six_documents() {
    let tmp = TempDir::new().unwrap();
    let opts = html_only_options(&tmp);

    let summary = render_all(&opts).await.unwrap();
    assert_eq!(summary.failed_frames, 0);
    // html-only produces no PNG artifacts
    assert!(summary.artifacts.is_empty());

    for frame in FRAMES {
        let path = opts.frames_dir.join(format!("{}.html", frame.name));
        assert!(path.is_file(), "missing {}", path.display());
        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(html, (frame.build)());
    }
}

#[tokio::test]
async fn html_only_run_needs_no_browser_and_writes_no_manifest() {
    let tmp = TempDir::new().unwrap();
    let opts = RenderOptions {
        // An impossible browser binary must not matter in html-only mode.
        browser: Some("/nonexistent/browser".to_string()),
        ..html_only_options(&tmp)
    };
    render_all(&opts).await.unwrap();
    assert!(!tmp.path().join("manifest.json").exists());
}

/// Collect every `class="…"` token used in the document body.
fn classes_used(doc: &str) -> BTreeSet<String> {
    let body = doc.split("<body>").nth(1).unwrap_or(doc);
    let mut used = BTreeSet::new();
    for chunk in body.split("class=\"").skip(1) {
        let attr = chunk.split('"').next().unwrap_or("");
        for class in attr.split_whitespace() {
            used.insert(class.to_string());
        }
    }
    used
}

#[test]
fn every_used_class_is_styled() {
    for frame in FRAMES {
        let doc = (frame.build)();
        let style = doc
            .split("<style>")
            .nth(1)
            .and_then(|s| s.split("</style>").next())
            .expect("style block");
        for class in classes_used(&doc) {
            assert!(
                style.contains(&format!(".{class}")),
                "{}: class '{class}' used but not styled",
                frame.name
            );
        }
    }
}

#[test]
fn documents_carry_the_frame_viewport() {
    for frame in FRAMES {
        let doc = (frame.build)();
        assert!(
            doc.contains("width=1320, height=2868"),
            "{}: wrong viewport meta",
            frame.name
        );
    }
}

// SPDX-License-Identifier: MIT

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use vantag_shots::appstore::model::RenderOptions;
use vantag_shots::appstore::renderer;
use vantag_shots::config::ShotsConfig;
use vantag_shots::doctor;
use vantag_shots::simulator::runner::{self, CaptureOptions};

#[derive(Parser)]
#[command(
    name = "vantag-shots",
    about = "Vantag screenshot automation — simulator capture + App Store frames",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Config file (default: ./vantag-shots.toml, optional)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "VANTAG_SHOTS_LOG", global = true)]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "VANTAG_SHOTS_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    /// Suppress progress output. Errors are still printed to stderr.
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Capture six raw screenshots from the running iOS Simulator.
    ///
    /// Locates the Simulator window, foregrounds it, and navigates the app
    /// by tapping tab-bar positions, saving a device-level screenshot per
    /// screen via `xcrun simctl`. macOS only; the Simulator must be booted
    /// with the app running.
    ///
    /// Examples:
    ///   vantag-shots capture
    ///   vantag-shots capture --out docs/screenshots --device AAAA-BBBB
    Capture {
        /// Output directory (default from config: docs/screenshots)
        #[arg(long)]
        out: Option<PathBuf>,
        /// simctl device selector ("booted" or a UDID)
        #[arg(long)]
        device: Option<String>,
    },
    /// Generate the six App Store marketing frames.
    ///
    /// Writes each frame as an HTML document, then rasterizes it to a
    /// 1320×2868 PNG with headless Chromium. Works anywhere a Chromium
    /// binary is available.
    ///
    /// Examples:
    ///   vantag-shots appstore
    ///   vantag-shots appstore --html-only
    Appstore {
        /// Output directory (default from config: docs/screenshots)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Only write the HTML documents; skip browser rendering
        #[arg(long)]
        html_only: bool,
    },
    /// Run pre-flight environment checks.
    ///
    /// Verifies xcrun, a booted simulator, osascript, a headless browser,
    /// and output-directory permissions. Exits non-zero if any check fails.
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Init once — must happen before any tracing calls.
    let log_level = args.log.as_deref().unwrap_or("info").to_owned();
    let _file_guard = setup_logging(&log_level, args.log_file.as_deref(), args.quiet);

    let config = ShotsConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Capture { out, device } => {
            let opts = CaptureOptions {
                out_dir: out.unwrap_or_else(|| config.output.dir.clone()),
                device: device.unwrap_or_else(|| config.capture.device.clone()),
                settle_scale: config.capture.settle_scale,
            };
            let summary = runner::run(&opts)
                .await
                .context("simulator capture failed")?;
            info!(
                saved = summary.artifacts.len(),
                failed = summary.failed_steps,
                "capture run finished"
            );
            if summary.artifacts.is_empty() {
                bail!("no screenshots were captured");
            }
            if summary.failed_steps > 0 {
                warn!("{} step(s) failed — check the output", summary.failed_steps);
            }
        }
        Command::Appstore { out, html_only } => {
            let out_dir = out.unwrap_or_else(|| config.output.dir.clone());
            let frames_dir = out_dir.join(&config.output.frames_subdir);
            let opts = RenderOptions {
                out_dir,
                frames_dir,
                browser: config.render.browser.clone(),
                timeout_secs: config.render.timeout_secs,
                html_only,
            };
            let summary = renderer::render_all(&opts)
                .await
                .context("frame rendering failed")?;
            info!(
                saved = summary.artifacts.len(),
                failed = summary.failed_frames,
                "appstore run finished"
            );
            if summary.failed_frames > 0 {
                bail!("{} frame(s) failed to render", summary.failed_frames);
            }
        }
        Command::Doctor => {
            let results = doctor::run_doctor(&config).await;
            doctor::print_doctor_results(&results);
            let failed = results.iter().filter(|r| !r.passed).count();
            std::process::exit(if failed == 0 { 0 } else { 1 });
        }
    }

    Ok(())
}

/// Initialize the tracing subscriber.
/// If `log_file` is set, logs go to both stdout and a daily-rolling file.
/// Returns a `WorkerGuard` that must stay alive for the process lifetime.
///
/// `VANTAG_SHOTS_LOG_FORMAT=json` switches to structured JSON output.
/// If the log directory cannot be created, falls back to stdout-only
/// logging with a warning — never panics.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    quiet: bool,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if quiet { "error" } else { log_level };
    let use_json = std::env::var("VANTAG_SHOTS_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("vantag-shots.log"));

        // Ensure the directory exists before tracing-appender tries to open it.
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!(
                "warn: could not create log directory '{}': {e} — falling back to stdout",
                dir.display()
            );
            if use_json {
                tracing_subscriber::fmt().json().with_env_filter(log_level).init();
            } else {
                tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
            }
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }

        Some(guard)
    } else if use_json {
        tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        None
    } else {
        tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        None
    }
}

// SPDX-License-Identifier: MIT
//! vantag-shots — screenshot automation for the Vantag app.
//!
//! Two independent pipelines behind one CLI: `simulator` captures raw
//! screenshots from the running iOS Simulator, `appstore` renders the six
//! marketing frames with headless Chromium. They share nothing but the
//! output layout and the run manifest.

pub mod appstore;
pub mod config;
pub mod doctor;
pub mod manifest;
pub mod simulator;

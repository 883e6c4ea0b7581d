// SPDX-License-Identifier: MIT
//! App Store marketing pipeline — builds six HTML mockup frames and
//! rasterizes them to fixed-size PNGs with headless Chromium.

pub mod frames;
pub mod model;
pub mod renderer;
pub mod theme;

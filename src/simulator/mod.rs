// SPDX-License-Identifier: MIT
//! Simulator capture pipeline — drives the running iOS Simulator via
//! synthetic taps and saves device-level screenshots with `simctl`.

pub mod input;
pub mod model;
pub mod runner;
pub mod simctl;
pub mod window;

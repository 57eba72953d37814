// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Fling: inertial scrolling that decelerates to rest inside bounds.
//!
//! A [`FlingRun`] is started from a position, a release velocity and a pair of
//! [`FlingBounds`], and is then advanced one fixed time step at a time by
//! whoever drives the animation. Each axis is simulated independently:
//!
//! - Speed decays exponentially (`v(t) = v0 * e^(-k t)`) and the position
//!   follows the exact integral of that velocity, so the result does not
//!   depend on frame rate drift.
//! - The position is clamped into the bounds on every step.
//! - An axis comes to rest once its speed drops below
//!   [`FlingParams::settle_velocity`] or it is pinned against a bound it is
//!   moving towards.
//!
//! Because input speed is capped at [`FlingParams::max_velocity`], every run
//! reaches rest after a bounded number of steps. A zero velocity finishes on
//! the first step.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use panorama_fling::{FlingBounds, FlingParams, FlingRun};
//!
//! let bounds = FlingBounds::new(Point::new(0.0, 0.0), Point::new(500.0, 0.0));
//! let mut run = FlingRun::new(Point::ORIGIN, Vec2::new(300.0, 0.0), bounds, &FlingParams::default());
//!
//! while !run.is_finished() {
//!     let pos = run.advance();
//!     assert!(pos.x >= 0.0 && pos.x <= 500.0);
//! }
//! ```
//!
//! This crate owns no threads; see `panorama_gesture` for the animation driver.

mod params;
mod run;

pub use params::FlingParams;
pub use run::{FlingBounds, FlingRun};

// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Gesture: turn pointer events into viewport drags and flings.
//!
//! [`GestureController`] is a small state machine sitting between a host's
//! input handling and a [`panorama_viewport::Scene`]:
//!
//! - [`GestureController::down`], [`GestureController::move_to`],
//!   [`GestureController::up`] and [`GestureController::cancel`] drag the
//!   viewport so the content follows the pointer.
//! - [`GestureController::fling`] arms an inertial scroll
//!   ([`panorama_fling::FlingRun`]) bounded by the scene, suspends background
//!   tile work, and wakes the animation thread.
//! - The animation thread, spawned by [`GestureController::start`], parks
//!   until a fling is armed, then advances it one frame at a time and calls
//!   the host's redraw callback after each frame. [`GestureController::stop`]
//!   joins it.
//!
//! Event methods may be called from any thread. State transitions and
//! viewport writes share one lock; the redraw callback always runs with that
//! lock released.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kurbo::{Point, Vec2};
//! use panorama_gesture::GestureController;
//! use panorama_viewport::{BasicScene, Scene, ScenePoint, SceneSize};
//!
//! let scene = Arc::new(BasicScene::new(SceneSize::new(4_000, 3_000)));
//! scene.viewport().set_size(SceneSize::new(800, 600));
//!
//! let controller = GestureController::new(scene.clone(), || {
//!     // Ask the UI toolkit to repaint.
//! });
//! controller.start().expect("spawn animation thread");
//!
//! // Drag the content 30 px left and 20 px up.
//! controller.down(Point::new(400.0, 300.0));
//! controller.move_to(Point::new(370.0, 280.0));
//! controller.up();
//! assert_eq!(scene.viewport().origin(), ScenePoint::new(30, 20));
//!
//! // Release with some velocity; the animation thread takes it from here.
//! controller.fling(Vec2::new(-1_200.0, 0.0));
//!
//! controller.stop();
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`GestureConfig`].

mod animation;
mod config;
mod controller;
mod error;
mod state;

pub use config::GestureConfig;
pub use controller::GestureController;
pub use error::GestureError;
pub use state::GestureState;

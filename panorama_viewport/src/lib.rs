// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Viewport: the window into a scene that is too large to hold in memory.
//!
//! This crate provides the data contracts shared by the gesture engine, the
//! renderer and background tile streaming:
//! - [`Viewport`]: origin, size and zoom of the visible window, in scene units.
//! - [`SharedViewport`]: a lock-guarded [`Viewport`] that several threads can
//!   read and write.
//! - [`Scene`]: the full content extent, the single viewport, and a suspend
//!   flag that pauses background work while the view is in rapid motion.
//! - [`BasicScene`]: a ready-made [`Scene`] for hosts that do not need their
//!   own implementation.
//!
//! It does **not** decode, cache or draw anything. Callers are expected to:
//! - Size the viewport from their rendering surface with [`Viewport::set_size`].
//! - Read [`SharedViewport::get`] at redraw time to decide what to draw.
//! - Watch [`Scene::is_suspended`] from their tile loader.
//!
//! ## Minimal example
//!
//! ```rust
//! use panorama_viewport::{BasicScene, Scene, ScenePoint, SceneSize};
//!
//! let scene = BasicScene::new(SceneSize::new(10_000, 6_000));
//! scene.viewport().set_size(SceneSize::new(800, 600));
//! scene.viewport().set_origin(ScenePoint::new(1_200, 300));
//!
//! let visible = scene.viewport().get().visible_rect();
//! assert_eq!(visible.x0, 1_200.0);
//! assert_eq!(visible.width(), 800.0);
//! ```
//!
//! ## Coordinates
//!
//! Scene coordinates are integers with the origin at the top-left corner of
//! the scene. Screen coordinates (pointer positions, zoom focus points) are
//! `kurbo` points in device pixels; [`Viewport::zoom`] maps device pixels to
//! scene units.

mod geometry;
mod scene;
mod viewport;

pub use geometry::{ScenePoint, SceneSize};
pub use scene::{BasicScene, Scene};
pub use viewport::{MINIMUM_PIXELS_IN_VIEW, SharedViewport, Viewport};

// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use parking_lot::Mutex;

use crate::geometry::SceneSize;
use crate::viewport::{SharedViewport, Viewport};

/// The full pannable content: its extent, its single viewport, and a flag
/// that pauses background work while the view is moving quickly.
///
/// Implementations are shared between the event side and the fling animation
/// thread, so every method takes `&self`.
pub trait Scene: Send + Sync {
    /// Returns the full content extent.
    fn scene_size(&self) -> SceneSize;

    /// Returns the viewport onto this scene.
    fn viewport(&self) -> &SharedViewport;

    /// Pauses (`true`) or resumes (`false`) background work such as tile streaming.
    fn set_suspend(&self, suspend: bool);

    /// Returns `true` while background work is paused.
    fn is_suspended(&self) -> bool;
}

/// A [`Scene`] that only tracks state, for hosts that stream tiles elsewhere.
///
/// Tile loaders poll [`Scene::is_suspended`] and skip work while it is set.
#[derive(Debug, Default)]
pub struct BasicScene {
    size: Mutex<SceneSize>,
    viewport: SharedViewport,
    suspended: AtomicBool,
}

impl BasicScene {
    /// Creates a scene of the given extent with an empty viewport at its origin.
    #[must_use]
    pub fn new(size: SceneSize) -> Self {
        Self {
            size: Mutex::new(size),
            viewport: SharedViewport::new(Viewport::default()),
            suspended: AtomicBool::new(false),
        }
    }

    /// Changes the content extent, for example once the image header is decoded.
    pub fn set_scene_size(&self, size: SceneSize) {
        *self.size.lock() = size;
    }
}

impl Scene for BasicScene {
    fn scene_size(&self) -> SceneSize {
        *self.size.lock()
    }

    fn viewport(&self) -> &SharedViewport {
        &self.viewport
    }

    fn set_suspend(&self, suspend: bool) {
        let was = self.suspended.swap(suspend, Ordering::AcqRel);
        if was != suspend {
            debug!("scene background work {}", if suspend { "suspended" } else { "resumed" });
        }
    }

    fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::Acquire)
    }
}

// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use parking_lot::Mutex;

use crate::geometry::{ScenePoint, SceneSize};

/// Smallest extent, in scene units, that [`Viewport::zoom_about`] lets the
/// window shrink to along either axis.
pub const MINIMUM_PIXELS_IN_VIEW: i32 = 50;

/// Rectangular window into scene coordinate space.
///
/// `Viewport` is plain data: it does not clamp its origin against the scene,
/// so a drag may legitimately move it past the scene edges. Callers that need
/// the window kept inside the scene (for example, an inertial fling) clamp
/// before calling [`Viewport::set_origin`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    origin: ScenePoint,
    size: SceneSize,
    zoom: f64,
}

impl Viewport {
    /// Creates a viewport of the given size at the scene origin with zoom `1.0`.
    #[must_use]
    pub fn new(size: SceneSize) -> Self {
        Self {
            origin: ScenePoint::ZERO,
            size,
            zoom: 1.0,
        }
    }

    /// Returns the top-left corner of the window in scene coordinates.
    #[must_use]
    pub fn origin(&self) -> ScenePoint {
        self.origin
    }

    /// Moves the window so that its top-left corner is at `origin`.
    pub fn set_origin(&mut self, origin: ScenePoint) {
        self.origin = origin;
    }

    /// Returns the window extent in scene units.
    #[must_use]
    pub fn size(&self) -> SceneSize {
        self.size
    }

    /// Sets the window extent. Negative extents are clamped to zero.
    ///
    /// This is owned by the rendering surface; the gesture engine only reads it.
    pub fn set_size(&mut self, size: SceneSize) {
        self.size = SceneSize::new(size.width.max(0), size.height.max(0));
    }

    /// Returns the scale factor mapping screen pixels to scene units.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor. Non-finite or non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
    }

    /// Returns the visible window as a rectangle in scene coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_points(self.origin.to_point(), (self.origin + self.size).to_point())
    }

    /// Converts a screen-space point into scene coordinates.
    #[must_use]
    pub fn screen_to_scene_point(&self, pt: Point) -> Point {
        let origin = self.origin.to_point();
        Point::new(origin.x + pt.x * self.zoom, origin.y + pt.y * self.zoom)
    }

    /// Rescales the window by `factor` around a screen-space focus point.
    ///
    /// `physical_size` is the size of the rendering surface in device pixels
    /// and `scene_size` the full scene extent. The scene point under
    /// `screen_focus` stays fixed where possible. The resulting window is at
    /// least [`MINIMUM_PIXELS_IN_VIEW`] scene units on each side, no larger
    /// than the scene, keeps the aspect ratio of the surface, and lies inside
    /// the scene.
    ///
    /// Returns `false` without changing anything if `factor` is `1.0`,
    /// non-positive or non-finite, or if either size is empty.
    pub fn zoom_about(
        &mut self,
        factor: f64,
        screen_focus: Point,
        physical_size: SceneSize,
        scene_size: SceneSize,
    ) -> bool {
        if !factor.is_finite() || factor <= 0.0 || factor == 1.0 {
            return false;
        }
        if physical_size.is_empty() || scene_size.is_empty() {
            return false;
        }

        let screen = physical_size.to_size();
        let scene = scene_size.to_size();
        let min_extent = f64::from(MINIMUM_PIXELS_IN_VIEW);
        let aspect = screen.height / screen.width;

        let fx = screen_focus.x / screen.width;
        let fy = screen_focus.y / screen.height;
        let window = self.visible_rect();
        let scene_focus = Point::new(
            window.x0 + fx * window.width(),
            window.y0 + fy * window.height(),
        );

        let mut width = (screen.width * self.zoom * factor).min(scene.width);
        width = width.max(min_extent);
        let mut height = width * aspect;
        if height > scene.height {
            height = scene.height;
            width = height / aspect;
        }
        if height < min_extent {
            height = min_extent;
            width = height / aspect;
        }

        let mut left = (scene_focus.x - fx * width).max(0.0);
        let mut top = (scene_focus.y - fy * height).max(0.0);
        if left + width > scene.width {
            left = scene.width - width;
        }
        if top + height > scene.height {
            top = scene.height - height;
        }

        let min = ScenePoint::trunc_from(Point::new(left, top));
        let max = ScenePoint::trunc_from(Point::new(left + width, top + height));
        self.origin = min;
        self.size = SceneSize::new(max.x - min.x, max.y - min.y);
        self.zoom = width / screen.width;
        true
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(SceneSize::ZERO)
    }
}

/// A [`Viewport`] behind a lock, shared between the event side, the fling
/// animation and the renderer.
///
/// Each accessor takes the lock for the duration of a single read or write.
/// Use [`SharedViewport::update`] to make several changes atomically.
#[derive(Debug, Default)]
pub struct SharedViewport {
    inner: Mutex<Viewport>,
}

impl SharedViewport {
    /// Wraps `viewport` for shared access.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Mutex::new(viewport),
        }
    }

    /// Returns a snapshot of the whole viewport.
    #[must_use]
    pub fn get(&self) -> Viewport {
        *self.inner.lock()
    }

    /// Returns the current origin.
    #[must_use]
    pub fn origin(&self) -> ScenePoint {
        self.inner.lock().origin()
    }

    /// Sets the origin.
    pub fn set_origin(&self, origin: ScenePoint) {
        self.inner.lock().set_origin(origin);
    }

    /// Returns the current window extent.
    #[must_use]
    pub fn size(&self) -> SceneSize {
        self.inner.lock().size()
    }

    /// Sets the window extent.
    pub fn set_size(&self, size: SceneSize) {
        self.inner.lock().set_size(size);
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.inner.lock().zoom()
    }

    /// Runs `f` with exclusive access to the viewport.
    pub fn update<R>(&self, f: impl FnOnce(&mut Viewport) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

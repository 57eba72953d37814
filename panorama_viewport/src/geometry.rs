// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, Sub};

use kurbo::{Point, Size};

/// An integer position in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScenePoint {
    /// Horizontal position, increasing to the right.
    pub x: i32,
    /// Vertical position, increasing downwards.
    pub y: i32,
}

impl ScenePoint {
    /// The scene origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds a floating point position to the nearest scene point.
    ///
    /// Values outside the `i32` range saturate; NaN maps to zero.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "saturating float to int conversion")]
    pub fn round_from(pt: Point) -> Self {
        Self::new(pt.x.round() as i32, pt.y.round() as i32)
    }

    /// Truncates a floating point position toward zero.
    ///
    /// Values outside the `i32` range saturate; NaN maps to zero.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "saturating float to int conversion")]
    pub fn trunc_from(pt: Point) -> Self {
        Self::new(pt.x as i32, pt.y as i32)
    }

    /// Returns this point as a `kurbo` point.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<ScenePoint> for Point {
    fn from(pt: ScenePoint) -> Self {
        pt.to_point()
    }
}

impl Add<SceneSize> for ScenePoint {
    type Output = Self;

    fn add(self, rhs: SceneSize) -> Self {
        Self::new(
            self.x.saturating_add(rhs.width),
            self.y.saturating_add(rhs.height),
        )
    }
}

/// An integer extent in scene units.
///
/// Extents are signed so that differences such as `scene - view` can be
/// expressed directly; a well-formed size is never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SceneSize {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl SceneSize {
    /// An empty extent.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either extent is zero or negative.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns this size as a `kurbo` size.
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl Sub for SceneSize {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.width.saturating_sub(rhs.width),
            self.height.saturating_sub(rhs.height),
        )
    }
}

// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use panorama_fling::FlingParams;

/// Tuning for a [`crate::GestureController`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Fling simulation parameters.
    pub fling: FlingParams,
    /// Wall-clock pause between fling frames.
    pub frame_interval: Duration,
    /// Pause after the last frame of a fling before the animator re-checks
    /// for new work.
    pub settle_pause: Duration,
    /// Pointer moves arriving this soon after a zoom step are ignored.
    pub scale_move_guard: Duration,
    /// Name given to the animation thread.
    pub thread_name: String,
    /// Accept flings while the animation thread is not running.
    ///
    /// For hosts that drive flings from their own frame clock through
    /// [`crate::GestureController::advance_fling_frame`]. When unset, a fling
    /// without a running animation thread is ignored.
    pub manual_frames: bool,
}

impl GestureConfig {
    /// Replaces the fling parameters.
    #[must_use]
    pub fn with_fling(mut self, fling: FlingParams) -> Self {
        self.fling = fling;
        self
    }

    /// Replaces the frame interval.
    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Replaces the end-of-fling pause.
    #[must_use]
    pub fn with_settle_pause(mut self, pause: Duration) -> Self {
        self.settle_pause = pause;
        self
    }

    /// Replaces the move guard after zoom steps.
    #[must_use]
    pub fn with_scale_move_guard(mut self, guard: Duration) -> Self {
        self.scale_move_guard = guard;
        self
    }

    /// Replaces the animation thread name.
    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Sets whether flings are accepted without a running animation thread.
    #[must_use]
    pub fn with_manual_frames(mut self, manual: bool) -> Self {
        self.manual_frames = manual;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            fling: FlingParams::default(),
            frame_interval: Duration::from_millis(16),
            settle_pause: Duration::from_millis(5),
            scale_move_guard: Duration::from_millis(500),
            thread_name: String::from("panorama-fling"),
            manual_frames: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::GestureConfig;

    #[test]
    fn builders_override_defaults() {
        let config = GestureConfig::default()
            .with_frame_interval(Duration::from_millis(1))
            .with_settle_pause(Duration::ZERO)
            .with_scale_move_guard(Duration::from_secs(1))
            .with_thread_name("test-fling")
            .with_manual_frames(true);
        assert!(config.manual_frames);
        assert!(!GestureConfig::default().manual_frames);
        assert_eq!(config.frame_interval, Duration::from_millis(1));
        assert_eq!(config.settle_pause, Duration::ZERO);
        assert_eq!(config.scale_move_guard, Duration::from_secs(1));
        assert_eq!(config.thread_name, "test-fling");
        assert_eq!(config.fling, GestureConfig::default().fling);
    }
}

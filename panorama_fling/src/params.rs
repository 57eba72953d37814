// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Tuning for a [`crate::FlingRun`].
///
/// Invalid values (non-finite, zero or negative) are replaced by the defaults
/// when a run is created, so a misconfigured host still gets a fling that
/// terminates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlingParams {
    /// Exponential decay constant of the speed, per second.
    ///
    /// Larger values stop the fling sooner; after `1 / decay_rate` seconds the
    /// speed has dropped to about 37% of its initial value.
    pub decay_rate: f64,
    /// Speed, in scene units per second, below which an axis is at rest.
    pub settle_velocity: f64,
    /// Largest accepted release speed per axis, in scene units per second.
    pub max_velocity: f64,
    /// Simulated time covered by one call to [`crate::FlingRun::advance`].
    pub tick: Duration,
}

impl FlingParams {
    /// Returns a copy with every invalid field replaced by its default.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let positive = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            decay_rate: positive(self.decay_rate, defaults.decay_rate),
            settle_velocity: positive(self.settle_velocity, defaults.settle_velocity),
            max_velocity: positive(self.max_velocity, defaults.max_velocity),
            tick: if self.tick.is_zero() {
                defaults.tick
            } else {
                self.tick
            },
        }
    }
}

impl Default for FlingParams {
    fn default() -> Self {
        Self {
            decay_rate: 4.0,
            settle_velocity: 20.0,
            max_velocity: 8_000.0,
            tick: Duration::from_millis(16),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::FlingParams;

    #[test]
    fn sanitized_keeps_valid_values() {
        let params = FlingParams {
            decay_rate: 2.0,
            settle_velocity: 5.0,
            max_velocity: 100.0,
            tick: Duration::from_millis(8),
        };
        assert_eq!(params.sanitized(), params);
    }

    #[test]
    fn sanitized_replaces_invalid_values() {
        let params = FlingParams {
            decay_rate: 0.0,
            settle_velocity: -1.0,
            max_velocity: f64::NAN,
            tick: Duration::ZERO,
        };
        assert_eq!(params.sanitized(), FlingParams::default());
    }
}

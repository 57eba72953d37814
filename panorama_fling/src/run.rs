// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Vec2};
use panorama_viewport::SceneSize;

use crate::params::FlingParams;

/// Axis-aligned limits for a fling, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingBounds {
    /// Smallest allowed position on each axis.
    pub min: Point,
    /// Largest allowed position on each axis.
    pub max: Point,
}

impl FlingBounds {
    /// Creates bounds from the two corners.
    #[must_use]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Bounds that keep a window of `view` size inside a scene of `scene` size:
    /// `[0, scene - view]` on each axis.
    ///
    /// When the scene is smaller than the view on an axis the upper bound is
    /// negative; [`FlingRun`] then pins that axis at `0`.
    #[must_use]
    pub fn for_window(scene: SceneSize, view: SceneSize) -> Self {
        let travel = scene - view;
        Self::new(
            Point::ORIGIN,
            Point::new(f64::from(travel.width), f64::from(travel.height)),
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct AxisFling {
    position: f64,
    velocity: f64,
    min: f64,
    max: f64,
    at_rest: bool,
}

impl AxisFling {
    fn new(start: f64, velocity: f64, min: f64, max: f64, max_velocity: f64) -> Self {
        let velocity = if velocity.is_finite() {
            velocity.clamp(-max_velocity, max_velocity)
        } else {
            0.0
        };
        Self {
            position: start,
            velocity,
            min,
            // Inverted bounds collapse onto the lower edge.
            max: max.max(min),
            at_rest: false,
        }
    }

    fn step(&mut self, dt: f64, params: &FlingParams) {
        if self.at_rest {
            return;
        }
        let retained = (-params.decay_rate * dt).exp();
        let travel = self.velocity * (1.0 - retained) / params.decay_rate;
        self.position = (self.position + travel).clamp(self.min, self.max);
        self.velocity *= retained;

        let pinned = (self.position <= self.min && self.velocity <= 0.0)
            || (self.position >= self.max && self.velocity >= 0.0);
        if pinned || self.velocity.abs() < params.settle_velocity {
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }

    fn final_position(&self, decay_rate: f64) -> f64 {
        (self.position + self.velocity / decay_rate).clamp(self.min, self.max)
    }
}

/// One inertial scroll, from release until rest.
///
/// The run is advanced by [`FlingRun::advance`], one [`FlingParams::tick`] at
/// a time. Positions returned from `advance` always lie inside the bounds.
#[derive(Clone, Debug)]
pub struct FlingRun {
    x: AxisFling,
    y: AxisFling,
    params: FlingParams,
    ticks: u32,
}

impl FlingRun {
    /// Starts a fling at `start` moving with `velocity` (scene units per second).
    ///
    /// Velocities are capped at `±params.max_velocity` per axis; non-finite
    /// velocities are treated as zero.
    #[must_use]
    pub fn new(start: Point, velocity: Vec2, bounds: FlingBounds, params: &FlingParams) -> Self {
        let params = params.sanitized();
        Self {
            x: AxisFling::new(
                start.x,
                velocity.x,
                bounds.min.x,
                bounds.max.x,
                params.max_velocity,
            ),
            y: AxisFling::new(
                start.y,
                velocity.y,
                bounds.min.y,
                bounds.max.y,
                params.max_velocity,
            ),
            params,
            ticks: 0,
        }
    }

    /// Advances the simulation by one tick and returns the new position.
    ///
    /// Once finished, further calls return the resting position unchanged.
    pub fn advance(&mut self) -> Point {
        if !self.is_finished() {
            let dt = self.params.tick.as_secs_f64();
            self.x.step(dt, &self.params);
            self.y.step(dt, &self.params);
            self.ticks = self.ticks.saturating_add(1);
        }
        self.position()
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x.position, self.y.position)
    }

    /// Returns the current velocity in scene units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity, self.y.velocity)
    }

    /// Returns `true` once both axes are at rest.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.x.at_rest && self.y.at_rest
    }

    /// Returns where the fling would come to rest if left undisturbed.
    #[must_use]
    pub fn final_position(&self) -> Point {
        Point::new(
            self.x.final_position(self.params.decay_rate),
            self.y.final_position(self.params.decay_rate),
        )
    }

    /// Returns the number of ticks simulated so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Returns the simulated time elapsed so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.params.tick.saturating_mul(self.ticks)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use panorama_viewport::SceneSize;

    use super::{FlingBounds, FlingRun};
    use crate::params::FlingParams;

    fn run_to_rest(run: &mut FlingRun) -> Vec<Point> {
        let mut positions = Vec::new();
        for _ in 0..10_000 {
            if run.is_finished() {
                break;
            }
            positions.push(run.advance());
        }
        assert!(run.is_finished(), "fling did not come to rest");
        positions
    }

    #[test]
    fn bounds_for_window_span_scene_minus_view() {
        let bounds = FlingBounds::for_window(SceneSize::new(1000, 500), SceneSize::new(500, 500));
        assert_eq!(bounds.min, Point::new(0.0, 0.0));
        assert_eq!(bounds.max, Point::new(500.0, 0.0));
    }

    #[test]
    fn zero_velocity_finishes_on_first_tick() {
        let bounds = FlingBounds::new(Point::ORIGIN, Point::new(100.0, 100.0));
        let mut run = FlingRun::new(
            Point::new(40.0, 60.0),
            Vec2::ZERO,
            bounds,
            &FlingParams::default(),
        );
        assert!(!run.is_finished());
        assert_eq!(run.advance(), Point::new(40.0, 60.0));
        assert!(run.is_finished());
        assert_eq!(run.ticks(), 1);
    }

    #[test]
    fn positions_stay_within_bounds() {
        let bounds = FlingBounds::new(Point::ORIGIN, Point::new(500.0, 0.0));
        let mut run = FlingRun::new(
            Point::ORIGIN,
            Vec2::new(-300.0, 0.0),
            bounds,
            &FlingParams::default(),
        );
        let positions = run_to_rest(&mut run);
        assert!(!positions.is_empty());
        for pos in positions {
            assert!((0.0..=500.0).contains(&pos.x), "x out of bounds: {}", pos.x);
            assert_eq!(pos.y, 0.0);
        }
    }

    #[test]
    fn positive_velocity_travels_and_decelerates() {
        let bounds = FlingBounds::new(Point::ORIGIN, Point::new(10_000.0, 10_000.0));
        let mut run = FlingRun::new(
            Point::new(100.0, 100.0),
            Vec2::new(2_000.0, 0.0),
            bounds,
            &FlingParams::default(),
        );
        let mut last_speed = run.velocity().x.abs();
        let mut last_x = run.position().x;
        while !run.is_finished() {
            let pos = run.advance();
            let speed = run.velocity().x.abs();
            assert!(speed <= last_speed, "speed increased");
            assert!(pos.x >= last_x, "moved backwards");
            last_speed = speed;
            last_x = pos.x;
        }
        // 2000 / 4.0 = 500 units of travel if never cut short.
        assert!(last_x > 500.0 && last_x <= 600.0, "rested at {last_x}");
    }

    #[test]
    fn final_position_predicts_rest() {
        let bounds = FlingBounds::new(Point::ORIGIN, Point::new(10_000.0, 10_000.0));
        let mut run = FlingRun::new(
            Point::new(1_000.0, 1_000.0),
            Vec2::new(1_500.0, -800.0),
            bounds,
            &FlingParams::default(),
        );
        let predicted = run.final_position();
        run_to_rest(&mut run);
        let rest = run.position();
        // The settle threshold cuts off the last few units of travel.
        assert!((predicted.x - rest.x).abs() < 10.0);
        assert!((predicted.y - rest.y).abs() < 10.0);
    }

    #[test]
    fn hitting_a_bound_stops_the_axis() {
        let bounds = FlingBounds::new(Point::ORIGIN, Point::new(50.0, 1_000.0));
        let mut run = FlingRun::new(
            Point::new(40.0, 0.0),
            Vec2::new(5_000.0, 0.0),
            bounds,
            &FlingParams::default(),
        );
        let pos = run.advance();
        assert_eq!(pos.x, 50.0);
        assert!(run.is_finished());
    }

    #[test]
    fn inverted_bounds_pin_at_lower_edge() {
        let bounds = FlingBounds::for_window(SceneSize::new(300, 300), SceneSize::new(500, 500));
        let mut run = FlingRun::new(
            Point::new(-20.0, 30.0),
            Vec2::new(400.0, -400.0),
            bounds,
            &FlingParams::default(),
        );
        for pos in run_to_rest(&mut run) {
            assert_eq!(pos, Point::ORIGIN);
        }
    }

    #[test]
    fn out_of_bounds_start_is_pulled_inside() {
        let bounds = FlingBounds::new(Point::ORIGIN, Point::new(200.0, 200.0));
        let mut run = FlingRun::new(
            Point::new(-80.0, 260.0),
            Vec2::new(100.0, 100.0),
            bounds,
            &FlingParams::default(),
        );
        let pos = run.advance();
        assert!((0.0..=200.0).contains(&pos.x));
        assert_eq!(pos.y, 200.0);
    }

    #[test]
    fn huge_and_non_finite_velocities_terminate() {
        let bounds = FlingBounds::new(Point::ORIGIN, Point::new(1e9, 1e9));
        let params = FlingParams::default();
        for velocity in [
            Vec2::new(1e300, -1e300),
            Vec2::new(f64::INFINITY, f64::NAN),
        ] {
            let mut run = FlingRun::new(Point::new(5e8, 5e8), velocity, bounds, &params);
            run_to_rest(&mut run);
            assert!(run.ticks() < 500, "took {} ticks", run.ticks());
        }
    }

    #[test]
    fn elapsed_tracks_ticks() {
        let bounds = FlingBounds::new(Point::ORIGIN, Point::new(10_000.0, 0.0));
        let params = FlingParams::default();
        let mut run = FlingRun::new(Point::ORIGIN, Vec2::new(1_000.0, 0.0), bounds, &params);
        run.advance();
        run.advance();
        assert_eq!(run.elapsed(), params.tick * 2);
    }
}

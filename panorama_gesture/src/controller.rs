// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use kurbo::{Point, Vec2};
use log::{debug, error, trace};
use panorama_fling::{FlingBounds, FlingRun};
use panorama_viewport::{Scene, ScenePoint};
use parking_lot::{Condvar, Mutex};

use crate::animation::{self, AnimatorPhase};
use crate::config::GestureConfig;
use crate::error::GestureError;
use crate::state::GestureState;

/// Pointer and viewport position captured at pointer-down.
#[derive(Clone, Copy, Debug, Default)]
struct TouchAnchor {
    view_down: Point,
    origin_at_down: ScenePoint,
}

/// Everything guarded by the controller lock.
#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) state: GestureState,
    pub(crate) phase: AnimatorPhase,
    anchor: TouchAnchor,
    fling: Option<FlingRun>,
    last_zoom: Option<Instant>,
}

/// State shared between the event side and the animation thread.
pub(crate) struct Shared {
    scene: Arc<dyn Scene>,
    redraw: Box<dyn Fn() + Send + Sync>,
    pub(crate) config: GestureConfig,
    pub(crate) inner: Mutex<Inner>,
    /// Signalled whenever the animation thread may have work or must exit.
    pub(crate) wake: Condvar,
}

impl Shared {
    pub(crate) fn redraw(&self) {
        (self.redraw)();
    }

    /// Applies one fling frame. Returns `true` if the viewport origin was written.
    pub(crate) fn advance_fling_frame(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.state == GestureState::StartFling {
            inner.state = GestureState::InFling;
        }
        if inner.state != GestureState::InFling {
            return false;
        }
        let Some(run) = inner.fling.as_mut() else {
            inner.state = GestureState::Untouched;
            return false;
        };

        let pos = ScenePoint::round_from(run.advance());
        self.scene.viewport().set_origin(pos);
        trace!("fling frame {} at ({}, {})", run.ticks(), pos.x, pos.y);
        if !run.is_finished() {
            return true;
        }

        debug!("fling finished after {:?} at ({}, {})", run.elapsed(), pos.x, pos.y);
        self.scene.set_suspend(false);
        inner.state = GestureState::Untouched;
        inner.fling = None;
        let pause = self.config.settle_pause;
        if !pause.is_zero() {
            // Releases the lock while paused; an early wake-up just ends the pause.
            let _ = self.wake.wait_for(&mut inner, pause);
        }
        true
    }
}

/// Translates pointer events into viewport motion.
///
/// Drags move the [`Scene`]'s viewport directly from the calling thread.
/// Flings are handed to a dedicated animation thread (see
/// [`GestureController::start`]) that advances them frame by frame and
/// requests a redraw after each one.
///
/// All state transitions and origin writes happen under a single lock owned
/// by the controller. The redraw callback is always invoked with that lock
/// released, from either the event thread or the animation thread.
pub struct GestureController {
    shared: Arc<Shared>,
    animator: Mutex<Option<JoinHandle<()>>>,
}

impl GestureController {
    /// Creates a controller over `scene` with the default configuration.
    ///
    /// `redraw` is called after every origin change.
    pub fn new(scene: Arc<dyn Scene>, redraw: impl Fn() + Send + Sync + 'static) -> Self {
        Self::with_config(scene, redraw, GestureConfig::default())
    }

    /// Creates a controller over `scene` with an explicit configuration.
    pub fn with_config(
        scene: Arc<dyn Scene>,
        redraw: impl Fn() + Send + Sync + 'static,
        config: GestureConfig,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                scene,
                redraw: Box::new(redraw),
                config,
                inner: Mutex::new(Inner {
                    state: GestureState::Untouched,
                    phase: AnimatorPhase::Idle,
                    anchor: TouchAnchor::default(),
                    fling: None,
                    last_zoom: None,
                }),
                wake: Condvar::new(),
            }),
            animator: Mutex::new(None),
        }
    }

    /// Returns the configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.shared.config
    }

    /// Returns the current gesture state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.shared.inner.lock().state
    }

    /// Pointer went down at `pos` (screen coordinates).
    ///
    /// Resumes background work and stops any fling in progress; the
    /// animation thread applies no further frames of it.
    pub fn down(&self, pos: Point) {
        let scene = &self.shared.scene;
        scene.set_suspend(false);
        let mut inner = self.shared.inner.lock();
        if inner.state.is_flinging() {
            debug!("fling interrupted by pointer down");
        }
        inner.state = GestureState::InTouch;
        inner.fling = None;
        inner.anchor = TouchAnchor {
            view_down: pos,
            origin_at_down: scene.viewport().origin(),
        };
        debug!("pointer down at ({}, {})", pos.x, pos.y);
    }

    /// Pointer moved to `pos` (screen coordinates).
    ///
    /// While touching, moves the viewport opposite to the pointer so the
    /// content follows the finger. The origin is not clamped to the scene.
    /// Ignored shortly after a zoom step, see [`GestureConfig::scale_move_guard`].
    pub fn move_to(&self, pos: Point) {
        {
            let inner = self.shared.inner.lock();
            if inner.state != GestureState::InTouch {
                return;
            }
            if inner
                .last_zoom
                .is_some_and(|at| at.elapsed() < self.shared.config.scale_move_guard)
            {
                trace!("move ignored after zoom");
                return;
            }
            let viewport = self.shared.scene.viewport();
            let delta = (pos - inner.anchor.view_down) * viewport.zoom();
            let origin = ScenePoint::trunc_from(inner.anchor.origin_at_down.to_point() - delta);
            viewport.set_origin(origin);
            trace!("drag to ({}, {})", origin.x, origin.y);
        }
        self.shared.redraw();
    }

    /// Pointer went up. Ends a touch; has no effect in any other state.
    pub fn up(&self) {
        let mut inner = self.shared.inner.lock();
        if inner.state == GestureState::InTouch {
            inner.state = GestureState::Untouched;
            debug!("pointer up");
        }
    }

    /// The platform cancelled the gesture. Same effect as [`GestureController::up`].
    pub fn cancel(&self) {
        let mut inner = self.shared.inner.lock();
        if inner.state == GestureState::InTouch {
            inner.state = GestureState::Untouched;
            debug!("pointer cancelled");
        }
    }

    /// The pointer was released with `velocity` (screen pixels per second).
    ///
    /// Arms a fling in the opposite direction, bounded so the window stays
    /// inside the scene, suspends background work, and wakes the animation
    /// thread. The motion itself is delivered asynchronously.
    ///
    /// Ignored unless the animation thread is running or
    /// [`GestureConfig::manual_frames`] is set.
    pub fn fling(&self, velocity: Vec2) {
        let scene = &self.shared.scene;
        let viewport = scene.viewport();
        let origin = viewport.origin();
        let view_size = viewport.size();
        let scene_size = scene.scene_size();
        let bounds = FlingBounds::for_window(scene_size, view_size);

        let mut inner = self.shared.inner.lock();
        if inner.phase != AnimatorPhase::Running && !self.shared.config.manual_frames {
            debug!("fling ignored: animator not running");
            return;
        }
        inner.state = GestureState::StartFling;
        scene.set_suspend(true);
        inner.fling = Some(FlingRun::new(
            origin.to_point(),
            -velocity,
            bounds,
            &self.shared.config.fling,
        ));
        debug!(
            "fling armed from ({}, {}) with velocity ({}, {}) within {:?}",
            origin.x, origin.y, -velocity.x, -velocity.y, bounds
        );
        self.shared.wake.notify_all();
    }

    /// Returns `true` while a fling is armed or running.
    #[must_use]
    pub fn in_fling(&self) -> bool {
        self.shared.inner.lock().state.is_flinging()
    }

    /// Applies one fling frame to the viewport.
    ///
    /// This is what the animation thread calls; it is public so hosts with
    /// their own frame clock can drive flings without [`GestureController::start`]
    /// (see [`GestureConfig::manual_frames`]).
    /// Does nothing unless a fling is armed or running, and does not request
    /// a redraw. Returns `true` if the viewport origin was written.
    pub fn advance_fling_frame(&self) -> bool {
        self.shared.advance_fling_frame()
    }

    /// Records that the host just applied a zoom step to the viewport.
    ///
    /// Zooming itself belongs to the host (see
    /// [`panorama_viewport::Viewport::zoom_about`]); this only starts the
    /// [`GestureConfig::scale_move_guard`] window, during which pointer moves
    /// are ignored so the tail of a pinch does not turn into a drag.
    pub fn note_zoom(&self) {
        self.shared.inner.lock().last_zoom = Some(Instant::now());
        trace!("zoom noted; guarding moves");
    }

    /// Spawns the animation thread.
    ///
    /// Pair every successful call with [`GestureController::stop`] (dropping
    /// the controller also stops the thread).
    pub fn start(&self) -> Result<(), GestureError> {
        let mut animator = self.animator.lock();
        if animator.is_some() {
            return Err(GestureError::AlreadyStarted);
        }
        self.shared.inner.lock().phase = AnimatorPhase::Running;
        match animation::spawn(Arc::clone(&self.shared)) {
            Ok(handle) => {
                *animator = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.shared.inner.lock().phase = AnimatorPhase::Idle;
                Err(GestureError::Spawn(err))
            }
        }
    }

    /// Stops the animation thread and waits for it to exit.
    ///
    /// No redraw is requested by the thread after this returns. Does nothing
    /// if the thread is not running.
    ///
    /// When called from the redraw callback (that is, on the animation thread
    /// itself) the thread is told to exit but not joined; it leaves its loop
    /// as soon as the callback returns. The callback must not call `start`,
    /// `stop` or `is_animating` while another thread may be stopping the
    /// controller, since that thread holds the lifecycle lock until the join
    /// completes.
    pub fn stop(&self) {
        let mut animator = self.animator.lock();
        let Some(handle) = animator.take() else {
            return;
        };
        self.shared.inner.lock().phase = AnimatorPhase::Stopped;
        self.shared.wake.notify_all();
        if handle.thread().id() == thread::current().id() {
            debug!("fling animator stopped from its own thread");
            return;
        }
        if handle.join().is_err() {
            error!("fling animator panicked");
        }
    }

    /// Returns `true` while the animation thread is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.lock().is_some()
    }
}

impl Drop for GestureController {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for GestureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("state", &self.state())
            .field("animating", &self.is_animating())
            .finish_non_exhaustive()
    }
}

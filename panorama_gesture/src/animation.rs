// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fling animation thread.
//!
//! The thread parks on the controller's condition variable until a fling is
//! armed or it is told to exit; it never polls. While a fling runs it applies
//! one frame per [`crate::GestureConfig::frame_interval`] and requests a
//! redraw after each frame.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::info;

use crate::controller::Shared;

/// Lifecycle of the animation thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AnimatorPhase {
    /// Never started.
    Idle,
    Running,
    /// Asked to exit; the thread leaves its loop at the next wake-up.
    Stopped,
}

pub(crate) fn spawn(shared: Arc<Shared>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(shared.config.thread_name.clone())
        .spawn(move || run(&shared))
}

fn run(shared: &Shared) {
    info!("fling animator started");
    while wait_for_fling(shared) {
        if shared.advance_fling_frame() {
            shared.redraw();
        }
        pace_frame(shared);
    }
    info!("fling animator stopped");
}

/// Blocks until a fling is armed. Returns `false` once the thread must exit.
fn wait_for_fling(shared: &Shared) -> bool {
    let mut inner = shared.inner.lock();
    while inner.phase == AnimatorPhase::Running && !inner.state.is_flinging() {
        shared.wake.wait(&mut inner);
    }
    inner.phase == AnimatorPhase::Running
}

/// Waits out the rest of the frame interval, returning early on stop or when
/// the fling ends.
fn pace_frame(shared: &Shared) {
    let interval = shared.config.frame_interval;
    if interval.is_zero() {
        return;
    }
    let deadline = Instant::now() + interval;
    let mut inner = shared.inner.lock();
    while inner.phase == AnimatorPhase::Running && inner.state.is_flinging() {
        if shared.wake.wait_until(&mut inner, deadline).timed_out() {
            break;
        }
    }
}

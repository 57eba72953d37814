// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors from starting the fling animation thread.
#[derive(Debug, Error)]
pub enum GestureError {
    /// [`crate::GestureController::start`] was called while the thread is running.
    #[error("fling animator is already running")]
    AlreadyStarted,
    /// The operating system refused to create the thread.
    #[error("failed to spawn fling animator thread")]
    Spawn(#[source] std::io::Error),
}

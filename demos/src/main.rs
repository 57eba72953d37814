// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough of a drag followed by a fling over a large scene.
//!
//! Run with `RUST_LOG=debug cargo run -p panorama_demos` to see every state
//! transition; `RUST_LOG=trace` also logs each fling frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use kurbo::{Point, Vec2};
use log::{info, trace, warn};
use panorama_gesture::{GestureController, GestureError};
use panorama_viewport::{BasicScene, Scene, ScenePoint, SceneSize};

fn main() -> Result<(), GestureError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A 20k x 10k world map shown on a 1280x720 surface.
    let scene = Arc::new(BasicScene::new(SceneSize::new(20_000, 10_000)));
    scene.viewport().set_size(SceneSize::new(1_280, 720));
    scene.viewport().set_origin(ScenePoint::new(9_000, 4_000));

    let frames = Arc::new(AtomicUsize::new(0));
    let redraw_scene = Arc::clone(&scene);
    let redraw_frames = Arc::clone(&frames);
    let controller = GestureController::new(scene.clone(), move || {
        redraw_frames.fetch_add(1, Ordering::Relaxed);
        let visible = redraw_scene.viewport().get().visible_rect();
        trace!("redraw {visible:?}");
    });
    controller.start()?;

    info!("dragging 200 px to the right");
    controller.down(Point::new(300.0, 360.0));
    for step in 1..=10 {
        controller.move_to(Point::new(300.0 + f64::from(step) * 20.0, 360.0));
    }
    controller.up();
    info!("origin after drag: {:?}", scene.viewport().origin());

    info!("flinging up and to the left");
    controller.down(Point::new(600.0, 400.0));
    controller.move_to(Point::new(560.0, 380.0));
    controller.fling(Vec2::new(-2_500.0, -1_200.0));
    info!("background work suspended: {}", scene.is_suspended());

    let deadline = Instant::now() + Duration::from_secs(5);
    while controller.in_fling() {
        if Instant::now() > deadline {
            warn!("fling still running after 5 s");
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    info!(
        "fling settled at {:?} after {} redraws; suspended: {}",
        scene.viewport().origin(),
        frames.load(Ordering::Relaxed),
        scene.is_suspended()
    );

    controller.stop();
    Ok(())
}

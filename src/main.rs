use anyhow::Result;
use log::{debug, info};
use serde::Serialize;
use vector2d::Vec2;

// Define modules used by main
mod widget;

use widget::{DragGesture, FreeTransform, HandleLayout};

/// Final state of the replayed session, printed as JSON.
#[derive(Debug, Serialize)]
struct Report {
    transform: FreeTransform,
    handles: HandleLayout,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();

    info!("Starting free-transform drag replay...");

    // --- Shape Setup ---
    let half_extent = Vec2::new(120.0, 80.0);
    let mut transform = FreeTransform::at(Vec2::new(400.0, 300.0));
    info!(
        "Shape of {}x{} centered at {:?}.",
        half_extent.x * 2.0,
        half_extent.y * 2.0,
        transform.position
    );

    // --- Move Gesture ---
    // Grab the body and drag it down and to the right.
    let move_path = [
        Vec2::new(410.0, 310.0),
        Vec2::new(430.0, 318.0),
        Vec2::new(470.0, 334.0),
        Vec2::new(500.0, 360.0),
    ];
    transform = replay(transform, DragGesture::Move, &move_path);
    info!("After move gesture: position {:?}.", transform.position);

    // --- Rotate Gesture ---
    // Swing the pointer around below the shape.
    let center = transform.position;
    let rotate_path = [
        center.add(Vec2::new(0.0, 150.0)),
        center.add(Vec2::new(0.0, 150.0).rotate(-0.3)),
        center.add(Vec2::new(0.0, 150.0).rotate(-0.6)),
        center.add(Vec2::new(0.0, 150.0).rotate(-1.2)),
    ];
    transform = replay(transform, DragGesture::Rotate, &rotate_path);
    info!("After rotate gesture: rotation {:.4} rad.", transform.rotation);

    // --- Scale Gesture ---
    // Pull a corner handle outward to grow the shape.
    let scale_path = [
        center.add(Vec2::new(60.0, 80.0)),
        center.add(Vec2::new(75.0, 100.0)),
        center.add(Vec2::new(90.0, 120.0)),
    ];
    transform = replay(transform, DragGesture::Scale, &scale_path);
    info!("After scale gesture: scale {:.4}.", transform.scale);

    // --- Final Report ---
    let report = Report {
        transform,
        handles: transform.handle_layout(half_extent),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Folds a sequence of pointer samples into the transform, one consecutive
/// pair at a time, the way a pointer-move handler would.
fn replay(mut transform: FreeTransform, gesture: DragGesture, path: &[Vec2]) -> FreeTransform {
    for pair in path.windows(2) {
        transform = transform.apply_drag(gesture, pair[0], pair[1]);
        debug!("{:?} sample {:?} -> {:?}", gesture, pair[1], transform);
    }
    transform
}

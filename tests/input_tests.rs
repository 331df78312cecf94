// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use desk_core::{CameraCommand, DeskAnimation, OrbitConfig, SteamConfig};
use input::*;

#[test]
fn mouse_and_touch_map_to_drag_commands() {
    assert_eq!(
        pointer_command(PointerInput::Down {
            client_x: 10.0,
            client_y: 20.0
        }),
        CameraCommand::BeginDrag { x: 10.0, y: 20.0 }
    );
    assert_eq!(
        pointer_command(PointerInput::Move {
            client_x: 15.5,
            client_y: -3.0
        }),
        CameraCommand::UpdateDrag { x: 15.5, y: -3.0 }
    );
    for end in [PointerInput::Up, PointerInput::Leave, PointerInput::Cancel] {
        assert_eq!(pointer_command(end), CameraCommand::EndDrag);
    }
}

#[test]
fn wheel_delta_is_normalised_by_mode() {
    assert!((wheel_zoom_delta(100.0, 0) - 1.5).abs() < 1e-6);
    assert!((wheel_zoom_delta(3.0, 1) - 3.0 * 16.0 * 0.015).abs() < 1e-6);
    assert!((wheel_zoom_delta(1.0, 2) - 800.0 * 0.015).abs() < 1e-4);
    assert!(wheel_zoom_delta(-100.0, 0) < 0.0);
}

#[test]
fn wheel_scroll_up_zooms_in_to_floor() {
    let mut anim =
        DeskAnimation::new(OrbitConfig::default(), SteamConfig::default(), 1).expect("valid");
    for _ in 0..50 {
        anim.handle(CameraCommand::Zoom {
            delta: wheel_zoom_delta(-120.0, 0),
        });
    }
    assert_eq!(anim.camera.target_distance(), desk_core::DIST_MIN);
}

#[test]
fn backing_size_caps_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0, 2.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 3.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 1.5, 2.0), (1200, 900));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0, 2.0), (1, 1));
    assert_eq!(backing_size(100.0, 50.0, f64::NAN, 2.0), (100, 50));
    assert_eq!(backing_size(-5.0, 10.0, 1.0, 2.0), (1, 10));
}

#[test]
fn aspect_ratio_handles_zero_height() {
    assert_eq!(aspect_ratio(1600, 800), 2.0);
    assert_eq!(aspect_ratio(10, 0), 10.0);
}

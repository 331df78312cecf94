// Host-side tests for the orbit camera controller.

use desk_core::*;
use glam::{Vec2, Vec3};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn defaults_match_desk_scene() {
    let cam = OrbitCamera::default();
    assert_eq!(cam.azimuth(), 0.7);
    assert_eq!(cam.polar(), 0.4);
    assert_eq!(cam.current_distance(), 12.0);
    assert_eq!(cam.target_distance(), 12.0);
    assert_eq!(cam.state(), DragState::Idle);
    assert!(cam.last_pointer().is_none());
}

#[test]
fn drag_right_increases_azimuth_by_sensitivity() {
    let mut cam = OrbitCamera::default();
    let polar = cam.polar();
    let azimuth = cam.azimuth();
    cam.begin_drag(Vec2::new(100.0, 100.0));
    cam.update_drag(Vec2::new(150.0, 100.0));
    assert!(approx(cam.azimuth() - azimuth, 0.25));
    assert_eq!(cam.polar(), polar);
    assert_eq!(cam.last_pointer(), Some(Vec2::new(150.0, 100.0)));
}

#[test]
fn update_drag_while_idle_is_a_no_op() {
    let mut cam = OrbitCamera::default();
    let before = cam.clone();
    for p in [(0.0, 0.0), (500.0, -300.0), (1e6, 1e6), (-42.0, 17.0)] {
        cam.update_drag(Vec2::new(p.0, p.1));
    }
    assert_eq!(cam.azimuth(), before.azimuth());
    assert_eq!(cam.polar(), before.polar());
    assert_eq!(cam.view(), before.view());
    assert_eq!(cam.state(), DragState::Idle);

    // Also after a finished drag
    cam.begin_drag(Vec2::ZERO);
    cam.end_drag();
    let after_drag = cam.view();
    cam.update_drag(Vec2::new(300.0, 300.0));
    assert_eq!(cam.view(), after_drag);
}

#[test]
fn polar_stays_clamped_for_any_drag_sequence() {
    let mut cam = OrbitCamera::default();
    cam.begin_drag(Vec2::ZERO);
    let mut y = 0.0;
    for step in [5000.0, -12000.0, 37.0, 90000.0, -3.0, -88888.0, 1.0, 420.0] {
        y += step;
        cam.update_drag(Vec2::new(0.0, y));
        assert!(cam.polar() >= POLAR_MIN && cam.polar() <= POLAR_MAX, "polar {}", cam.polar());
    }
}

#[test]
fn polar_clamps_at_bounds_exactly() {
    let mut cam = OrbitCamera::default();
    cam.begin_drag(Vec2::ZERO);
    cam.update_drag(Vec2::new(0.0, 10_000.0));
    assert_eq!(cam.polar(), POLAR_MAX);
    cam.update_drag(Vec2::new(0.0, -10_000.0));
    assert_eq!(cam.polar(), POLAR_MIN);
}

#[test]
fn azimuth_is_unbounded() {
    let mut cam = OrbitCamera::default();
    cam.begin_drag(Vec2::ZERO);
    cam.update_drag(Vec2::new(10_000.0, 0.0));
    assert!((cam.azimuth() - 50.7).abs() < 1e-3);
}

#[test]
fn zoom_target_stays_clamped() {
    let mut cam = OrbitCamera::default();
    for delta in [100.0, -3.0, -500.0, 7.5, 0.25, 1e9, -1e9] {
        cam.zoom_by(delta);
        let t = cam.target_distance();
        assert!((DIST_MIN..=DIST_MAX).contains(&t), "target {}", t);
    }
}

#[test]
fn three_zoom_ins_land_on_floor() {
    let mut cam = OrbitCamera::default();
    for _ in 0..3 {
        cam.apply(CameraCommand::Zoom { delta: -2.0 });
    }
    assert_eq!(cam.target_distance(), 6.0);
    cam.zoom_by(-2.0);
    assert_eq!(cam.target_distance(), 6.0);
}

#[test]
fn end_drag_is_idempotent() {
    let mut once = OrbitCamera::default();
    once.begin_drag(Vec2::new(3.0, 4.0));
    once.end_drag();

    let mut twice = OrbitCamera::default();
    twice.begin_drag(Vec2::new(3.0, 4.0));
    twice.end_drag();
    twice.end_drag();

    assert_eq!(once.state(), twice.state());
    assert_eq!(once.view(), twice.view());
    assert_eq!(once.last_pointer(), twice.last_pointer());
}

#[test]
fn begin_drag_resets_reference_point() {
    let mut cam = OrbitCamera::default();
    cam.begin_drag(Vec2::new(0.0, 0.0));
    cam.end_drag();
    // A new drag starting far away must not jump by the distance between drags
    cam.begin_drag(Vec2::new(400.0, 0.0));
    let azimuth = cam.azimuth();
    cam.update_drag(Vec2::new(410.0, 0.0));
    assert!(approx(cam.azimuth() - azimuth, 10.0 * ORBIT_SENSITIVITY));
}

#[test]
fn tick_converges_monotonically_within_200_ticks() {
    let mut cam = OrbitCamera::new(OrbitConfig {
        initial_distance: 6.0,
        ..OrbitConfig::default()
    });
    cam.zoom_by(19.0);
    assert_eq!(cam.target_distance(), 25.0);

    let mut gap = cam.target_distance() - cam.current_distance();
    let mut ticks = 0;
    while gap.abs() > 1e-6 {
        cam.tick();
        let next = cam.target_distance() - cam.current_distance();
        assert!(next >= 0.0, "overshot target");
        assert!(next < gap, "gap did not shrink: {} -> {}", gap, next);
        gap = next;
        ticks += 1;
        assert!(ticks <= 200, "not converged after 200 ticks");
    }
    assert_eq!(cam.current_distance(), 25.0);
}

#[test]
fn first_tick_closes_eight_percent_of_gap() {
    let mut cam = OrbitCamera::default();
    cam.zoom_by(10.0); // 12 -> 22
    cam.tick();
    assert!(approx(cam.current_distance(), 12.0 + 10.0 * 0.08));
}

#[test]
fn tick_elapsed_matches_tick_at_reference_rate() {
    let mut a = OrbitCamera::default();
    let mut b = OrbitCamera::default();
    a.zoom_by(8.0);
    b.zoom_by(8.0);
    for _ in 0..10 {
        a.tick();
        b.tick_elapsed(1.0 / 60.0);
    }
    assert!((a.current_distance() - b.current_distance()).abs() < 1e-4);
}

#[test]
fn tick_elapsed_is_frame_rate_independent() {
    let mut at_60 = OrbitCamera::default();
    let mut at_120 = OrbitCamera::default();
    at_60.zoom_by(-6.0);
    at_120.zoom_by(-6.0);
    for _ in 0..30 {
        at_60.tick_elapsed(1.0 / 60.0);
    }
    for _ in 0..60 {
        at_120.tick_elapsed(1.0 / 120.0);
    }
    assert!((at_60.current_distance() - at_120.current_distance()).abs() < 1e-3);
}

#[test]
fn tick_elapsed_ignores_bad_dt() {
    let mut cam = OrbitCamera::default();
    cam.zoom_by(5.0);
    let before = cam.current_distance();
    cam.tick_elapsed(f32::NAN);
    cam.tick_elapsed(-1.0);
    cam.tick_elapsed(0.0);
    assert_eq!(cam.current_distance(), before);
}

#[test]
fn non_finite_inputs_are_ignored() {
    let mut cam = OrbitCamera::default();
    cam.zoom_by(f32::NAN);
    cam.zoom_by(f32::INFINITY);
    assert_eq!(cam.target_distance(), 12.0);

    cam.begin_drag(Vec2::new(f32::NAN, 0.0));
    assert_eq!(cam.state(), DragState::Idle);

    cam.begin_drag(Vec2::new(10.0, 10.0));
    let view = cam.view();
    cam.update_drag(Vec2::new(f32::NAN, 50.0));
    assert_eq!(cam.view(), view);
    assert_eq!(cam.last_pointer(), Some(Vec2::new(10.0, 10.0)));
}

#[test]
fn view_follows_orbit_formula() {
    let cam = OrbitCamera::default();
    let view = cam.view();
    let expected = Vec3::new(0.7f32.sin() * 12.0, 2.0 + 0.4 * 6.0, 0.7f32.cos() * 12.0);
    assert!(view.eye.abs_diff_eq(expected, 1e-5));
    assert_eq!(view.target, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn commands_route_to_operations() {
    let mut cam = OrbitCamera::default();
    cam.apply(CameraCommand::BeginDrag { x: 1.0, y: 1.0 });
    assert_eq!(cam.state(), DragState::Dragging);
    cam.apply(CameraCommand::UpdateDrag { x: 1.0, y: 21.0 });
    assert!(approx(cam.polar(), 0.4 + 0.1));
    cam.apply(CameraCommand::EndDrag);
    assert_eq!(cam.state(), DragState::Idle);
}

#[test]
fn config_validation_rejects_bad_ranges() {
    let inverted = OrbitConfig {
        polar_min: 1.0,
        polar_max: 0.0,
        ..OrbitConfig::default()
    };
    assert!(matches!(
        inverted.validate(),
        Err(ConfigError::InvertedRange { field: "polar", .. })
    ));

    let smoothing = OrbitConfig {
        smoothing: 1.5,
        ..OrbitConfig::default()
    };
    assert!(matches!(
        smoothing.validate(),
        Err(ConfigError::OutOfRange { field: "smoothing", .. })
    ));

    let nan = OrbitConfig {
        sensitivity: f32::NAN,
        ..OrbitConfig::default()
    };
    assert!(matches!(nan.validate(), Err(ConfigError::NotFinite { .. })));

    assert!(OrbitConfig::default().validate().is_ok());
}

#[test]
fn initial_values_are_clamped_into_ranges() {
    let cam = OrbitCamera::new(OrbitConfig {
        initial_polar: 5.0,
        initial_distance: 100.0,
        ..OrbitConfig::default()
    });
    assert_eq!(cam.polar(), POLAR_MAX);
    assert_eq!(cam.current_distance(), DIST_MAX);
    assert_eq!(cam.target_distance(), DIST_MAX);
}

#[test]
fn projection_looks_at_target() {
    let view = OrbitCamera::default().view();
    let camera = Camera::new(view, 16.0 / 9.0);
    let clip = camera.view_projection() * view.target.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn overflowing_drag_is_ignored() {
    let mut cam = OrbitCamera::default();
    cam.begin_drag(Vec2::new(-3e38, 0.0));
    let view = cam.view();
    cam.update_drag(Vec2::new(3e38, 0.0));
    assert_eq!(cam.azimuth(), 0.7);
    assert_eq!(cam.view(), view);
    assert!(cam.view().eye.is_finite());
    assert_eq!(cam.last_pointer(), Some(Vec2::new(-3e38, 0.0)));

    // The drag keeps working with sane moves afterwards
    cam.update_drag(Vec2::new(-3e38, 20.0));
    assert!(approx(cam.polar(), 0.4 + 20.0 * ORBIT_SENSITIVITY));
}

// Host-side tests for the per-frame driver and pulsing lights.

use desk_core::pulse::{led_opacity, screen_glow_intensity};
use desk_core::*;

fn animation() -> DeskAnimation {
    DeskAnimation::new(OrbitConfig::default(), SteamConfig::default(), 42).expect("valid config")
}

#[test]
fn frame_advances_camera_and_steam() {
    let mut anim = animation();
    anim.handle(CameraCommand::Zoom { delta: 4.0 });
    let before = anim.steam.positions().to_vec();
    let update = anim.frame(0.0, 1.0 / 60.0).expect("running");
    assert!(anim.camera.current_distance() > 12.0);
    assert_eq!(update.view, anim.camera.view());
    assert_ne!(anim.steam.positions(), before.as_slice());
}

#[test]
fn stop_ends_frames() {
    let mut anim = animation();
    assert!(anim.is_running());
    anim.stop();
    anim.stop();
    assert!(!anim.is_running());
    let steam = anim.steam.positions().to_vec();
    assert!(anim.frame(1.0, 0.016).is_none());
    assert_eq!(anim.steam.positions(), steam.as_slice());
}

#[test]
fn invalid_config_is_rejected() {
    let err = DeskAnimation::new(
        OrbitConfig::default(),
        SteamConfig {
            dissipation_height: 0.0,
            ..SteamConfig::default()
        },
        0,
    );
    assert!(matches!(err, Err(ConfigError::EmptyBand { .. })));
}

#[test]
fn pulses_stay_in_range() {
    for step in 0..1000 {
        let t = step as f64 * 0.0173;
        let glow = screen_glow_intensity(t);
        let led = led_opacity(t);
        assert!((0.6 - 1e-6..=1.0 + 1e-6).contains(&glow));
        assert!((0.4 - 1e-6..=1.0 + 1e-6).contains(&led));
    }
    assert!((screen_glow_intensity(0.0) - 0.8).abs() < 1e-6);
    assert!((led_opacity(0.0) - 0.7).abs() < 1e-6);
}

#[test]
fn frame_reports_pulses() {
    let mut anim = animation();
    let update = anim.frame(0.5, 0.016).expect("running");
    assert_eq!(update.screen_glow, screen_glow_intensity(0.5));
    assert_eq!(update.led_opacity, led_opacity(0.5));
}

#[test]
fn resume_after_stop_continues_where_it_left_off() {
    let mut anim = animation();
    anim.handle(CameraCommand::Zoom { delta: 6.0 });
    anim.frame(0.0, 1.0 / 60.0).expect("running");
    let distance = anim.camera.current_distance();
    let steam = anim.steam.positions().to_vec();

    anim.stop();
    for i in 0..5 {
        assert!(anim.frame(i as f64, 0.016).is_none());
    }
    anim.resume();
    anim.resume();
    assert!(anim.is_running());
    assert_eq!(anim.camera.current_distance(), distance);
    assert_eq!(anim.steam.positions(), steam.as_slice());

    let update = anim.frame(1.0, 1.0 / 60.0).expect("running again");
    assert!(anim.camera.current_distance() > distance);
    assert_eq!(update.view, anim.camera.view());
}

use crate::constants::*;

/// Point-light intensity behind the monitor at wall-clock `time_sec`.
#[inline]
pub fn screen_glow_intensity(time_sec: f64) -> f32 {
    SCREEN_GLOW_BASE + (time_sec * SCREEN_GLOW_FREQ as f64).sin() as f32 * SCREEN_GLOW_SWING
}

/// Opacity of the monitor's power LED.
#[inline]
pub fn led_opacity(time_sec: f64) -> f32 {
    LED_OPACITY_BASE + (time_sec * LED_FREQ as f64).sin() as f32 * LED_OPACITY_SWING
}

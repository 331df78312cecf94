use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX, WHEEL_ZOOM_SCALE};
use desk_core::CameraCommand;

/// Browser pointer inputs reduced to what the orbit camera cares about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { client_x: f64, client_y: f64 },
    Move { client_x: f64, client_y: f64 },
    Up,
    Leave,
    Cancel,
}

#[inline]
pub fn pointer_command(input: PointerInput) -> CameraCommand {
    match input {
        PointerInput::Down { client_x, client_y } => CameraCommand::BeginDrag {
            x: client_x as f32,
            y: client_y as f32,
        },
        PointerInput::Move { client_x, client_y } => CameraCommand::UpdateDrag {
            x: client_x as f32,
            y: client_y as f32,
        },
        PointerInput::Up | PointerInput::Leave | PointerInput::Cancel => CameraCommand::EndDrag,
    }
}

/// Scale a wheel `deltaY` (in `deltaMode` units: 0 pixel, 1 line, 2 page)
/// into a target-distance change.
#[inline]
pub fn wheel_zoom_delta(delta_y: f64, delta_mode: u32) -> f32 {
    let px = match delta_mode {
        1 => delta_y as f32 * WHEEL_LINE_PX,
        2 => delta_y as f32 * WHEEL_PAGE_PX,
        _ => delta_y as f32,
    };
    px * WHEEL_ZOOM_SCALE
}

/// Backing-store size for a CSS box, honoring the pixel ratio cap.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64, max_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max_ratio)
    } else {
        1.0
    };
    let w = (css_width.max(0.0) * dpr).round() as u32;
    let h = (css_height.max(0.0) * dpr).round() as u32;
    (w.max(1), h.max(1))
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

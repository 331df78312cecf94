//! Monitor screen artwork as a display list.
//!
//! [`paint`] turns a wall-clock time into a list of 2D drawing operations
//! (grid backdrop, spinning wireframe globe with a pulsing location marker,
//! labels). The front-end replays the list on a canvas and uploads the
//! result as the monitor texture, so everything here stays host-testable.

use crate::constants::*;
use glam::Vec2;
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const ACCENT_COLOR: Color = Color::hex(0x2dd4bf);
pub const GRID_COLOR: Color = Color::hex(0x1a2a2a);
pub const WIRE_COLOR: Color = Color::hex(0x1a8a7a);
pub const BG_TOP: Color = Color::hex(0x0a0f0f);
pub const BG_BOTTOM: Color = Color::hex(0x0d1414);
pub const NAME_COLOR: Color = Color::hex(0xe8f0f0);
pub const MUTED_COLOR: Color = Color::hex(0x7a9999);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScreenOp<'a> {
    /// Fill the whole surface with a top-to-bottom gradient.
    VerticalGradient { top: Color, bottom: Color },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    RadialGlow {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Color,
        outer: Color,
    },
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: &'a str,
        position: Vec2,
        font: &'static str,
        color: Color,
        align: TextAlign,
    },
}

/// Static text shown on the monitor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLabels<'a> {
    pub coordinates: &'a str,
    pub place: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub status: &'a str,
}

pub fn paint<'a>(time_sec: f64, labels: &ScreenLabels<'a>) -> Vec<ScreenOp<'a>> {
    let mut ops = Vec::with_capacity(160);
    paint_into(&mut ops, time_sec, labels);
    ops
}

/// Like [`paint`] but reuses `ops`' allocation across frames.
pub fn paint_into<'a>(ops: &mut Vec<ScreenOp<'a>>, time_sec: f64, labels: &ScreenLabels<'a>) {
    ops.clear();
    let w = SCREEN_TEX_WIDTH as f32;
    let h = SCREEN_TEX_HEIGHT as f32;

    ops.push(ScreenOp::VerticalGradient {
        top: BG_TOP,
        bottom: BG_BOTTOM,
    });

    let mut x = 0.0;
    while x < w {
        ops.push(grid_line(Vec2::new(x, 0.0), Vec2::new(x, h)));
        x += SCREEN_GRID_STEP;
    }
    let mut y = 0.0;
    while y < h {
        ops.push(grid_line(Vec2::new(0.0, y), Vec2::new(w, y)));
        y += SCREEN_GRID_STEP;
    }

    paint_globe(ops, time_sec);
    paint_marker(ops, time_sec);
    paint_labels(ops, labels);
}

fn grid_line(from: Vec2, to: Vec2) -> ScreenOp<'static> {
    ScreenOp::Line {
        from,
        to,
        color: GRID_COLOR,
        width: 0.5,
    }
}

fn paint_globe(ops: &mut Vec<ScreenOp<'_>>, time_sec: f64) {
    let center = Vec2::from(GLOBE_CENTER);
    let r = GLOBE_RADIUS;

    ops.push(ScreenOp::RadialGlow {
        center,
        inner_radius: r * 0.3,
        outer_radius: r * 1.8,
        inner: ACCENT_COLOR.with_alpha(0.25),
        outer: ACCENT_COLOR.with_alpha(0.0),
    });
    ops.push(ScreenOp::StrokeEllipse {
        center,
        radii: Vec2::splat(r),
        color: ACCENT_COLOR,
        width: 1.5,
    });

    for i in 0..GLOBE_MERIDIANS {
        ops.push(ScreenOp::StrokeEllipse {
            center,
            radii: Vec2::new(meridian_half_width(time_sec, i), r),
            color: WIRE_COLOR,
            width: 0.8,
        });
    }

    for i in [-2i32, -1, 1, 2] {
        let y_off = i as f32 * (r / 3.0);
        let ring = (r * r - y_off * y_off).sqrt();
        ops.push(ScreenOp::StrokeEllipse {
            center: center + Vec2::new(0.0, y_off),
            radii: Vec2::new(ring, ring * 0.25),
            color: WIRE_COLOR,
            width: 0.8,
        });
    }

    ops.push(ScreenOp::StrokeEllipse {
        center,
        radii: Vec2::new(r, r * 0.25),
        color: ACCENT_COLOR,
        width: 1.0,
    });

    for i in 0..GLOBE_DOTS {
        if let Some((pos, alpha)) = globe_dot(time_sec, i) {
            ops.push(ScreenOp::FillCircle {
                center: pos,
                radius: 2.0,
                color: ACCENT_COLOR.with_alpha(alpha),
            });
        }
    }
}

/// Horizontal radius of meridian `index`; the globe spins at 0.3 rad/s.
pub fn meridian_half_width(time_sec: f64, index: usize) -> f32 {
    let angle = (index as f64 / GLOBE_MERIDIANS as f64) * PI + time_sec * 0.3;
    angle.cos().abs() as f32 * GLOBE_RADIUS
}

/// Position and opacity of spiral dot `index`, or `None` while it faces away.
pub fn globe_dot(time_sec: f64, index: usize) -> Option<(Vec2, f32)> {
    let n = GLOBE_DOTS as f64;
    let phi = (-1.0 + (2.0 * index as f64) / n).acos();
    let theta = (n * PI).sqrt() * phi + time_sec * 0.5;
    let facing = (theta + time_sec * 0.5).sin();
    if facing <= -0.2 {
        return None;
    }
    let reach = (GLOBE_RADIUS * 0.85) as f64;
    let pos = Vec2::new(
        GLOBE_CENTER[0] + (reach * theta.cos() * phi.sin()) as f32,
        GLOBE_CENTER[1] + (reach * phi.cos()) as f32,
    );
    Some((pos, (0.3 + facing * 0.7) as f32))
}

/// Location marker on the front face of the globe, hidden while it is round
/// the back.
pub fn marker_position(time_sec: f64) -> Option<Vec2> {
    let lon = time_sec * 0.3;
    if lon.cos() <= -0.3 {
        return None;
    }
    Some(Vec2::new(
        GLOBE_CENTER[0] + GLOBE_RADIUS * 0.85 * lon.sin() as f32,
        GLOBE_CENTER[1] - GLOBE_RADIUS * 0.05,
    ))
}

/// Growth of pulse ring `ring`, cycling through 0..24 px every second.
pub fn pulse_ring_growth(time_sec: f64, ring: usize) -> f32 {
    ((time_sec * 2.0 + ring as f64 * 0.7).rem_euclid(2.0) * 12.0) as f32
}

fn paint_marker(ops: &mut Vec<ScreenOp<'_>>, time_sec: f64) {
    let Some(pos) = marker_position(time_sec) else {
        return;
    };
    for ring in 0..3 {
        let growth = pulse_ring_growth(time_sec, ring);
        ops.push(ScreenOp::StrokeEllipse {
            center: pos,
            radii: Vec2::splat(4.0 + growth),
            color: ACCENT_COLOR.with_alpha((1.0 - growth / 24.0).max(0.0)),
            width: 1.5,
        });
    }
    ops.push(ScreenOp::FillCircle {
        center: pos,
        radius: 5.0,
        color: ACCENT_COLOR,
    });
    ops.push(ScreenOp::FillCircle {
        center: pos,
        radius: 2.0,
        color: BG_TOP,
    });
}

fn paint_labels<'a>(ops: &mut Vec<ScreenOp<'a>>, labels: &ScreenLabels<'a>) {
    let text = |text, x, y, font, color, align| ScreenOp::Text {
        text,
        position: Vec2::new(x, y),
        font,
        color,
        align,
    };
    let mid = SCREEN_TEX_WIDTH as f32 / 2.0;
    ops.push(text(labels.coordinates, 15.0, 25.0, "11px monospace", ACCENT_COLOR, TextAlign::Left));
    ops.push(text(labels.place, 15.0, 42.0, "11px monospace", ACCENT_COLOR, TextAlign::Left));
    ops.push(text(labels.name, mid, 280.0, "bold 28px sans-serif", NAME_COLOR, TextAlign::Center));
    ops.push(text(labels.title, mid, 305.0, "14px sans-serif", MUTED_COLOR, TextAlign::Center));

    ops.push(ScreenOp::FillCircle {
        center: Vec2::new(520.0, 25.0),
        radius: 5.0,
        color: ACCENT_COLOR,
    });
    ops.push(text(labels.status, 532.0, 29.0, "10px sans-serif", MUTED_COLOR, TextAlign::Left));
}

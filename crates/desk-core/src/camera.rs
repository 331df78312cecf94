//! Orbit camera driven by drag, wheel and button input.
//!
//! The camera sits on a sphere-like path around [`LOOK_AT`](crate::constants::LOOK_AT):
//! azimuth spins it around the vertical axis, polar raises it, and the
//! distance is eased toward a clamped target so zooming never jumps.
//! Nothing here touches rendering state; callers apply the returned
//! [`CameraView`] to whatever camera they draw with.

use crate::constants::*;
use crate::error::{finite, ordered, within, ConfigError};
use glam::{Mat4, Vec2, Vec3};

/// Tuning for [`OrbitCamera`]. `Default` reproduces the desk scene.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub sensitivity: f32,
    pub polar_min: f32,
    pub polar_max: f32,
    pub dist_min: f32,
    pub dist_max: f32,
    pub smoothing: f32,
    pub base_height: f32,
    pub height_scale: f32,
    pub look_at: Vec3,
    pub initial_azimuth: f32,
    pub initial_polar: f32,
    pub initial_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            sensitivity: ORBIT_SENSITIVITY,
            polar_min: POLAR_MIN,
            polar_max: POLAR_MAX,
            dist_min: DIST_MIN,
            dist_max: DIST_MAX,
            smoothing: ZOOM_SMOOTHING,
            base_height: CAMERA_BASE_HEIGHT,
            height_scale: CAMERA_HEIGHT_SCALE,
            look_at: LOOK_AT,
            initial_azimuth: INITIAL_AZIMUTH,
            initial_polar: INITIAL_POLAR,
            initial_distance: INITIAL_DISTANCE,
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("sensitivity", self.sensitivity)?;
        ordered("polar", self.polar_min, self.polar_max)?;
        ordered("distance", self.dist_min, self.dist_max)?;
        if self.dist_min <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "dist_min",
                value: self.dist_min,
                min: f32::MIN_POSITIVE,
                max: self.dist_max,
            });
        }
        within("smoothing", self.smoothing, 0.0, 1.0)?;
        finite("base_height", self.base_height)?;
        finite("height_scale", self.height_scale)?;
        if !self.look_at.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "look_at",
                value: f32::NAN,
            });
        }
        finite("initial_azimuth", self.initial_azimuth)?;
        finite("initial_polar", self.initial_polar)?;
        finite("initial_distance", self.initial_distance)?;
        Ok(())
    }
}

/// Input translated into camera terms, one per DOM event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
    BeginDrag { x: f32, y: f32 },
    UpdateDrag { x: f32, y: f32 },
    EndDrag,
    Zoom { delta: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Eye position and look-at target for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    config: OrbitConfig,
    azimuth: f32,
    polar: f32,
    current_distance: f32,
    target_distance: f32,
    dragging: bool,
    last_pointer: Vec2,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl OrbitCamera {
    /// Initial polar and distance are clamped into the configured ranges.
    pub fn new(config: OrbitConfig) -> Self {
        let polar = config
            .initial_polar
            .clamp(config.polar_min, config.polar_max);
        let distance = config
            .initial_distance
            .clamp(config.dist_min, config.dist_max);
        Self {
            azimuth: config.initial_azimuth,
            polar,
            current_distance: distance,
            target_distance: distance,
            dragging: false,
            last_pointer: Vec2::ZERO,
            config,
        }
    }

    pub fn apply(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::BeginDrag { x, y } => self.begin_drag(Vec2::new(x, y)),
            CameraCommand::UpdateDrag { x, y } => self.update_drag(Vec2::new(x, y)),
            CameraCommand::EndDrag => self.end_drag(),
            CameraCommand::Zoom { delta } => self.zoom_by(delta),
        }
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        if !pointer.is_finite() {
            log::debug!("[camera] ignoring non-finite drag start {:?}", pointer);
            return;
        }
        self.last_pointer = pointer;
        self.dragging = true;
    }

    pub fn update_drag(&mut self, pointer: Vec2) {
        if !self.dragging {
            return;
        }
        if !pointer.is_finite() {
            log::debug!("[camera] ignoring non-finite drag move {:?}", pointer);
            return;
        }
        let delta = pointer - self.last_pointer;
        let azimuth = self.azimuth + delta.x * self.config.sensitivity;
        let polar = self.polar + delta.y * self.config.sensitivity;
        // Huge but finite pointer jumps can still overflow
        if !azimuth.is_finite() || !polar.is_finite() {
            log::debug!("[camera] ignoring overflowing drag move {:?}", pointer);
            return;
        }
        self.azimuth = azimuth;
        self.polar = polar.clamp(self.config.polar_min, self.config.polar_max);
        self.last_pointer = pointer;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn zoom_by(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::debug!("[camera] ignoring non-finite zoom {}", delta);
            return;
        }
        self.target_distance =
            (self.target_distance + delta).clamp(self.config.dist_min, self.config.dist_max);
    }

    /// Advance one reference tick and return the resulting view.
    pub fn tick(&mut self) -> CameraView {
        self.ease_distance(self.config.smoothing);
        self.view()
    }

    /// Same easing as [`tick`](Self::tick) but scaled by elapsed time so the
    /// zoom settles equally fast at any refresh rate. A 1/60 s step matches
    /// one `tick`.
    pub fn tick_elapsed(&mut self, dt_sec: f32) -> CameraView {
        let ticks = if dt_sec.is_finite() {
            dt_sec.max(0.0) * REFERENCE_TICK_HZ
        } else {
            0.0
        };
        let alpha = 1.0 - (1.0 - self.config.smoothing).powf(ticks);
        self.ease_distance(alpha);
        self.view()
    }

    fn ease_distance(&mut self, alpha: f32) {
        let gap = self.target_distance - self.current_distance;
        if gap.abs() <= DISTANCE_SNAP {
            self.current_distance = self.target_distance;
        } else {
            self.current_distance += gap * alpha;
        }
    }

    /// View for the current state without advancing the easing.
    pub fn view(&self) -> CameraView {
        let d = self.current_distance;
        CameraView {
            eye: Vec3::new(
                self.azimuth.sin() * d,
                self.config.base_height + self.polar * self.config.height_scale,
                self.azimuth.cos() * d,
            ),
            target: self.config.look_at,
        }
    }

    pub fn state(&self) -> DragState {
        if self.dragging {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn current_distance(&self) -> f32 {
        self.current_distance
    }

    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    /// Last pointer seen by a drag; only meaningful while dragging.
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.dragging.then_some(self.last_pointer)
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(view: CameraView, aspect: f32) -> Self {
        Self {
            eye: view.eye,
            target: view.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

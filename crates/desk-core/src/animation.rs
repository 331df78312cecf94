//! Per-frame driver tying the camera, steam and pulsing lights together.

use crate::camera::{CameraCommand, CameraView, OrbitCamera, OrbitConfig};
use crate::error::ConfigError;
use crate::pulse;
use crate::steam::{ParticlePool, SteamConfig};

/// Everything the renderer needs to draw one frame besides the steam
/// positions, which it reads straight from [`DeskAnimation::steam`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUpdate {
    pub view: CameraView,
    pub screen_glow: f32,
    pub led_opacity: f32,
}

pub struct DeskAnimation {
    pub camera: OrbitCamera,
    pub steam: ParticlePool,
    running: bool,
}

impl DeskAnimation {
    pub fn new(orbit: OrbitConfig, steam: SteamConfig, seed: u64) -> Result<Self, ConfigError> {
        orbit.validate()?;
        steam.validate()?;
        Ok(Self {
            camera: OrbitCamera::new(orbit),
            steam: ParticlePool::new(steam, seed),
            running: true,
        })
    }

    pub fn handle(&mut self, command: CameraCommand) {
        self.camera.apply(command);
    }

    /// Advance one frame. `time_sec` is wall-clock time for the periodic
    /// effects, `dt_sec` the time since the previous frame for the zoom
    /// easing. Returns `None` once stopped.
    pub fn frame(&mut self, time_sec: f64, dt_sec: f32) -> Option<FrameUpdate> {
        if !self.running {
            return None;
        }
        let view = self.camera.tick_elapsed(dt_sec);
        self.steam.tick(time_sec);
        Some(FrameUpdate {
            view,
            screen_glow: pulse::screen_glow_intensity(time_sec),
            led_opacity: pulse::led_opacity(time_sec),
        })
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("[animation] stopped");
        }
        self.running = false;
    }

    /// Pick up again after [`stop`](Self::stop), e.g. when the page comes
    /// back from the back/forward cache. Camera and steam continue from
    /// where they were.
    pub fn resume(&mut self) {
        if !self.running {
            log::info!("[animation] resumed");
        }
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

//! Steam above the coffee mug: a fixed pool of rising points that are
//! recycled onto the emission disc once they drift past the dissipation
//! height.
//!
//! Positions live in one flat `[x, y, z, x, y, z, ...]` buffer so the
//! renderer can upload them without repacking.

use crate::constants::*;
use crate::error::{finite, non_negative, ordered, ConfigError};
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct SteamConfig {
    pub count: usize,
    /// Disc center on the XZ plane.
    pub center: Vec2,
    pub radius: f32,
    pub emission_height: f32,
    pub dissipation_height: f32,
    /// Extra height spread given to particles at construction so the first
    /// frames already show a full plume.
    pub initial_spread: f32,
    pub jitter: f32,
    pub rise_min: f32,
    pub rise_max: f32,
    pub wobble_amplitude: f32,
    pub wobble_freq: f32,
    /// Draw a fresh velocity whenever a particle is recycled. Off by default:
    /// the desk scene keeps each particle's launch velocity for its lifetime.
    pub rerandomize_velocity_on_respawn: bool,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            count: STEAM_COUNT,
            center: Vec2::from(STEAM_CENTER),
            radius: STEAM_RADIUS,
            emission_height: STEAM_EMISSION_HEIGHT,
            dissipation_height: STEAM_DISSIPATION_HEIGHT,
            initial_spread: STEAM_INITIAL_SPREAD,
            jitter: STEAM_JITTER,
            rise_min: STEAM_RISE_MIN,
            rise_max: STEAM_RISE_MAX,
            wobble_amplitude: STEAM_WOBBLE_AMPLITUDE,
            wobble_freq: STEAM_WOBBLE_FREQ,
            rerandomize_velocity_on_respawn: false,
        }
    }
}

impl SteamConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("center.x", self.center.x)?;
        finite("center.y", self.center.y)?;
        non_negative("radius", self.radius)?;
        finite("emission_height", self.emission_height)?;
        finite("dissipation_height", self.dissipation_height)?;
        if self.dissipation_height <= self.emission_height {
            return Err(ConfigError::EmptyBand {
                emission: self.emission_height,
                dissipation: self.dissipation_height,
            });
        }
        non_negative("initial_spread", self.initial_spread)?;
        non_negative("jitter", self.jitter)?;
        ordered("rise", self.rise_min, self.rise_max)?;
        non_negative("wobble_amplitude", self.wobble_amplitude)?;
        finite("wobble_freq", self.wobble_freq)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub velocity: Vec3,
    /// Random phase assigned at spawn. Nothing reads it yet.
    pub life: f32,
}

pub struct ParticlePool {
    config: SteamConfig,
    positions: Vec<f32>,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticlePool {
    pub fn new(config: SteamConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SteamConfig, mut rng: StdRng) -> Self {
        let band = (config.dissipation_height - config.emission_height).max(0.0);
        let spread = config.initial_spread.min(band);
        let mut positions = Vec::with_capacity(config.count * 3);
        let mut particles = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let p = disc_point(&mut rng, config.center, config.radius);
            positions.extend_from_slice(&[
                p.x,
                config.emission_height + rng.gen::<f32>() * spread,
                p.y,
            ]);
            particles.push(Particle {
                velocity: launch_velocity(&mut rng, &config),
                life: rng.gen(),
            });
        }
        log::debug!("[steam] spawned {} particles", particles.len());
        Self {
            config,
            positions,
            particles,
            rng,
        }
    }

    /// Integrate one frame. `time_sec` only feeds the sideways wobble, so any
    /// monotonically increasing clock works.
    pub fn tick(&mut self, time_sec: f64) {
        let amp = self.config.wobble_amplitude;
        let base_phase = time_sec * self.config.wobble_freq as f64;
        for (i, (pos, particle)) in self
            .positions
            .chunks_exact_mut(3)
            .zip(self.particles.iter_mut())
            .enumerate()
        {
            let phase = base_phase + i as f64;
            let v = particle.velocity;
            pos[0] += v.x + phase.sin() as f32 * amp;
            pos[1] += v.y;
            pos[2] += v.z + phase.cos() as f32 * amp;

            if pos[1] > self.config.dissipation_height {
                let p = disc_point(&mut self.rng, self.config.center, self.config.radius);
                pos[0] = p.x;
                pos[1] = self.config.emission_height;
                pos[2] = p.y;
                if self.config.rerandomize_velocity_on_respawn {
                    particle.velocity = launch_velocity(&mut self.rng, &self.config);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Flat xyz buffer, three floats per particle.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions
            .get(index * 3..index * 3 + 3)
            .map(Vec3::from_slice)
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn config(&self) -> &SteamConfig {
        &self.config
    }
}

/// Uniform sample inside the disc, returned as (x, z).
fn disc_point(rng: &mut StdRng, center: Vec2, radius: f32) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    let r = radius * rng.gen::<f32>().sqrt();
    center + Vec2::new(angle.cos(), angle.sin()) * r
}

fn launch_velocity(rng: &mut StdRng, config: &SteamConfig) -> Vec3 {
    let vx = signed_unit(rng) * config.jitter;
    let vy = config.rise_min + rng.gen::<f32>() * (config.rise_max - config.rise_min);
    let vz = signed_unit(rng) * config.jitter;
    Vec3::new(vx, vy, vz)
}

fn signed_unit(rng: &mut StdRng) -> f32 {
    rng.gen::<f32>() * 2.0 - 1.0
}

use glam::Vec3;

// Shared tuning constants for the desk vignette.

// Orbit camera
pub const ORBIT_SENSITIVITY: f32 = 0.005; // radians per pixel of drag
pub const POLAR_MIN: f32 = -0.3; // keeps the camera from flipping under the desk
pub const POLAR_MAX: f32 = 1.2;
pub const DIST_MIN: f32 = 6.0;
pub const DIST_MAX: f32 = 25.0;
pub const ZOOM_SMOOTHING: f32 = 0.08; // fraction of the remaining gap closed per tick
pub const REFERENCE_TICK_HZ: f32 = 60.0; // tick rate the smoothing factor was tuned at
pub const DISTANCE_SNAP: f32 = 1e-4; // below this gap f32 steps stall, so land on the target
pub const CAMERA_BASE_HEIGHT: f32 = 2.0;
pub const CAMERA_HEIGHT_SCALE: f32 = 6.0; // world units of height per radian of polar
pub const LOOK_AT: Vec3 = Vec3::new(0.0, 1.0, 0.0);

pub const INITIAL_AZIMUTH: f32 = 0.7;
pub const INITIAL_POLAR: f32 = 0.4;
pub const INITIAL_DISTANCE: f32 = 12.0;

// Projection
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Steam
pub const STEAM_COUNT: usize = 80;
pub const STEAM_CENTER: [f32; 2] = [-3.5, 1.0]; // x, z above the mug
pub const STEAM_RADIUS: f32 = 0.25;
pub const STEAM_EMISSION_HEIGHT: f32 = 1.5;
pub const STEAM_DISSIPATION_HEIGHT: f32 = 4.0;
pub const STEAM_INITIAL_SPREAD: f32 = 1.5; // extra height given to the first batch
pub const STEAM_JITTER: f32 = 0.0015; // max horizontal speed per axis
pub const STEAM_RISE_MIN: f32 = 0.008;
pub const STEAM_RISE_MAX: f32 = 0.02;
pub const STEAM_WOBBLE_AMPLITUDE: f32 = 0.002;
pub const STEAM_WOBBLE_FREQ: f32 = 2.0; // rad/s
pub const STEAM_POINT_SIZE: f32 = 0.08;
pub const STEAM_OPACITY: f32 = 0.35;
pub const STEAM_COLOR: [f32; 3] = [0.533, 0.533, 0.533];

// Pulsing lights
pub const SCREEN_GLOW_BASE: f32 = 0.8;
pub const SCREEN_GLOW_SWING: f32 = 0.2;
pub const SCREEN_GLOW_FREQ: f32 = 2.0; // rad/s
pub const LED_OPACITY_BASE: f32 = 0.7;
pub const LED_OPACITY_SWING: f32 = 0.3;
pub const LED_FREQ: f32 = 3.0; // rad/s

// Monitor screen texture
pub const SCREEN_TEX_WIDTH: u32 = 580;
pub const SCREEN_TEX_HEIGHT: u32 = 330;
pub const SCREEN_GRID_STEP: f32 = 25.0;
pub const GLOBE_CENTER: [f32; 2] = [290.0, 150.0];
pub const GLOBE_RADIUS: f32 = 70.0;
pub const GLOBE_DOTS: usize = 60;
pub const GLOBE_MERIDIANS: usize = 6;

// Palette
pub const ACCENT: [f32; 3] = [0.176, 0.831, 0.749]; // #2dd4bf
pub const BACKGROUND: [f32; 3] = [0.039, 0.059, 0.059]; // #0a0f0f

pub mod animation;
pub mod camera;
pub mod constants;
pub mod error;
pub mod mesh;
pub mod page;
pub mod pulse;
pub mod scene;
pub mod screen;
pub mod steam;

pub use animation::*;
pub use camera::*;
pub use constants::*;
pub use error::ConfigError;
pub use scene::{DeskScene, SceneVertex};
pub use steam::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SCREEN_WGSL: &str = include_str!("../shaders/screen.wgsl");
pub static STEAM_WGSL: &str = include_str!("../shaders/steam.wgsl");

//! Static layout of the desk vignette: which shapes sit where, what they
//! are made of and how the room is lit. Units are world units with the desk
//! top at y = 0 and the viewer on the +Z side.

use crate::mesh::{self, MeshData};
use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Cuboid {
        size: Vec3,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Lathe {
        profile: Vec<Vec2>,
        segments: u32,
    },
    Tube {
        path: Vec<Vec3>,
        tubular_segments: u32,
        radius: f32,
        radial_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

impl Shape {
    pub fn tessellate(&self) -> MeshData {
        match self {
            Shape::Cuboid { size } => mesh::cuboid(*size),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => mesh::cylinder(*radius_top, *radius_bottom, *height, *segments),
            Shape::Sphere {
                radius,
                width_segments,
                height_segments,
            } => mesh::uv_sphere(*radius, *width_segments, *height_segments),
            Shape::Lathe { profile, segments } => mesh::lathe(profile, *segments),
            Shape::Tube {
                path,
                tubular_segments,
                radius,
                radial_segments,
            } => mesh::tube(path, *tubular_segments, *radius, *radial_segments),
            Shape::Plane { width, height } => mesh::plane(*width, *height),
        }
    }
}

/// How the fragment shader treats a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    Standard,
    Unlit,
    /// Unlit, with opacity driven by the LED pulse each frame.
    Led,
}

impl Shading {
    fn code(self) -> f32 {
        match self {
            Shading::Standard => 0.0,
            Shading::Unlit => 1.0,
            Shading::Led => 2.0,
        }
    }
}

/// Colors are stored linear; constructors take sRGB hex like a CSS color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub shading: Shading,
}

impl Material {
    pub fn standard(hex: u32, roughness: f32, metalness: f32) -> Self {
        Self {
            color: srgb_hex_to_linear(hex),
            roughness,
            metalness,
            emissive: [0.0; 3],
            shading: Shading::Standard,
        }
    }

    pub fn unlit(hex: u32) -> Self {
        Self {
            shading: Shading::Unlit,
            ..Self::standard(hex, 1.0, 0.0)
        }
    }

    pub fn led(hex: u32) -> Self {
        Self {
            shading: Shading::Led,
            ..Self::standard(hex, 1.0, 0.0)
        }
    }

    pub fn with_emissive(mut self, hex: u32) -> Self {
        self.emissive = srgb_hex_to_linear(hex);
        self
    }
}

pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub name: &'static str,
    pub shape: Shape,
    pub material: Material,
    pub transform: Mat4,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Light shines from here toward the origin.
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub name: &'static str,
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the light has faded out.
    pub range: f32,
}

/// Where the monitor texture is drawn: a +Z facing rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenQuad {
    pub center: Vec3,
    pub size: Vec2,
}

pub const SCREEN_GLOW_LIGHT: &str = "screen_glow";

#[derive(Clone, Debug)]
pub struct DeskScene {
    pub background: [f32; 3],
    pub primitives: Vec<Primitive>,
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    pub point_lights: Vec<PointLight>,
    pub screen: ScreenQuad,
}

fn at(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

fn placed(position: Vec3, euler: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        scale,
        Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z),
        position,
    )
}

fn cuboid(x: f32, y: f32, z: f32) -> Shape {
    Shape::Cuboid {
        size: Vec3::new(x, y, z),
    }
}

fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Shape {
    Shape::Cylinder {
        radius_top,
        radius_bottom,
        height,
        segments,
    }
}

struct Builder {
    primitives: Vec<Primitive>,
}

impl Builder {
    fn add(&mut self, name: &'static str, shape: Shape, material: Material, transform: Mat4) {
        self.primitives.push(Primitive {
            name,
            shape,
            material,
            transform,
        });
    }
}

impl DeskScene {
    /// Lay out the desk. `seed` only jitters the plant leaves.
    pub fn build(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut b = Builder {
            primitives: Vec::with_capacity(128),
        };

        let wood = Material::standard(0x2d2418, 0.7, 0.0);
        let monitor = Material::standard(0x0a0a0a, 0.1, 0.9);
        let keyboard = Material::standard(0x1a1a1a, 0.4, 0.3);
        let mug = Material::standard(0x1a1a1a, 0.2, 0.8);
        let coffee = Material::standard(0x3d2517, 0.1, 0.0);
        let accent = Material::standard(0x2dd4bf, 0.3, 0.5);
        let frame = Material::standard(0x111111, 0.2, 0.8);

        // Desk
        b.add("desk_top", cuboid(12.0, 0.15, 6.0), wood, Mat4::IDENTITY);
        b.add("desk_frame", cuboid(12.0, 0.08, 6.0), frame, at(0.0, -0.1, 0.0));
        for (x, z) in [(-5.5, -2.5), (5.5, -2.5), (-5.5, 2.5), (5.5, 2.5)] {
            b.add("desk_leg", cuboid(0.1, 3.5, 0.1), frame, at(x, -1.75, z));
        }
        for z in [-2.5, 2.5] {
            b.add("cross_bar", cuboid(11.0, 0.05, 0.05), frame, at(0.0, -1.0, z));
        }

        // Monitor
        b.add("bezel", cuboid(6.0, 3.5, 0.15), monitor, at(0.0, 2.0, -2.0));
        b.add(
            "screen_border",
            cuboid(5.8, 3.3, 0.01),
            Material::unlit(0x1a2a2a),
            at(0.0, 2.0, -1.9),
        );
        b.add("stand_neck", cuboid(0.4, 1.5, 0.4), monitor, at(0.0, 0.6, -2.0));
        b.add("stand_base", cylinder(1.0, 1.2, 0.12, 32), monitor, at(0.0, 0.1, -2.0));
        b.add(
            "power_led",
            Shape::Sphere {
                radius: 0.03,
                width_segments: 8,
                height_segments: 8,
            },
            Material::led(0x2dd4bf),
            at(0.0, 0.35, -1.92),
        );

        // Keyboard
        b.add("keyboard_base", cuboid(3.5, 0.12, 1.2), keyboard, at(0.0, 0.15, 0.8));
        let key = Material::standard(0x2a2a2a, 0.5, 0.0);
        let accent_key = Material::standard(0x1a4a4a, 0.4, 0.0).with_emissive(0x0a2020);
        let key_at = |col: u32, row: u32| at(-1.5 + col as f32 * 0.23, 0.24, 0.35 + row as f32 * 0.22);
        for row in 0..5 {
            for col in 0..14 {
                b.add("key", cuboid(0.2, 0.06, 0.2), key, key_at(col, row));
            }
        }
        // WASD cluster, drawn over the plain keys
        for (col, row) in [(1, 1), (0, 2), (1, 2), (2, 2)] {
            b.add("accent_key", cuboid(0.2, 0.06, 0.2), accent_key, key_at(col, row));
        }

        // Mouse
        b.add("mouse_body", cuboid(0.5, 0.18, 0.8), keyboard, at(2.8, 0.15, 0.8));
        b.add(
            "mouse_wheel",
            cylinder(0.04, 0.04, 0.15, 16),
            accent,
            placed(Vec3::new(2.8, 0.26, 0.6), Vec3::new(0.0, 0.0, FRAC_PI_2), Vec3::ONE),
        );
        b.add(
            "mouse_pad",
            cuboid(2.0, 0.02, 1.5),
            Material::standard(0x151515, 0.9, 0.0),
            at(2.8, 0.05, 0.8),
        );
        b.add("pad_accent", cuboid(1.8, 0.025, 0.02), accent, at(2.8, 0.065, 0.1));

        // Mug
        let profile = (0..=10)
            .map(|i| {
                let t = i as f32 / 10.0;
                Vec2::new(0.4 + (t * PI * 0.3).sin() * 0.05, t * 1.4)
            })
            .collect();
        b.add(
            "mug",
            Shape::Lathe {
                profile,
                segments: 32,
            },
            mug,
            at(-3.5, 0.1, 1.0),
        );
        b.add(
            "mug_handle",
            Shape::Tube {
                path: vec![
                    Vec3::new(0.4, 0.4, 0.0),
                    Vec3::new(0.65, 0.6, 0.0),
                    Vec3::new(0.65, 1.1, 0.0),
                    Vec3::new(0.4, 1.3, 0.0),
                ],
                tubular_segments: 20,
                radius: 0.07,
                radial_segments: 8,
            },
            mug,
            at(-3.5, 0.1, 1.0),
        );
        b.add("coffee", cylinder(0.36, 0.36, 0.05, 32), coffee, at(-3.5, 1.4, 1.0));

        // Accessories
        let notebook_turn = Vec3::new(0.0, 0.15, 0.0);
        b.add(
            "notebook",
            cuboid(1.5, 0.08, 2.0),
            Material::standard(0x1a1a2e, 0.8, 0.0),
            placed(Vec3::new(-4.5, 0.12, 0.5), notebook_turn, Vec3::ONE),
        );
        b.add(
            "notebook_accent",
            cuboid(0.05, 0.085, 2.0),
            accent,
            placed(Vec3::new(-5.2, 0.12, 0.5), notebook_turn, Vec3::ONE),
        );
        b.add(
            "pen",
            cylinder(0.025, 0.025, 1.2, 8),
            accent,
            placed(Vec3::new(-4.2, 0.18, 0.8), Vec3::new(0.0, -0.3, FRAC_PI_2), Vec3::ONE),
        );

        // Plant
        b.add(
            "pot",
            cylinder(0.35, 0.28, 0.5, 16),
            Material::standard(0x3d3d3d, 0.8, 0.0),
            at(4.5, 0.35, -0.5),
        );
        b.add(
            "soil",
            cylinder(0.32, 0.32, 0.08, 16),
            Material::standard(0x2d1f1a, 1.0, 0.0),
            at(4.5, 0.58, -0.5),
        );
        let leaf = Material::standard(0x2d5a3d, 0.7, 0.0);
        for i in 0..5 {
            let angle = i as f32 / 5.0 * TAU;
            let tilt = (rng.gen::<f32>() - 0.5) * 0.5;
            b.add(
                "leaf",
                Shape::Sphere {
                    radius: 0.15,
                    width_segments: 8,
                    height_segments: 6,
                },
                leaf,
                placed(
                    Vec3::new(
                        4.5 + angle.cos() * 0.15,
                        0.8 + i as f32 * 0.12,
                        -0.5 + angle.sin() * 0.15,
                    ),
                    Vec3::new(0.0, 0.0, tilt),
                    Vec3::new(0.8, 1.5, 0.4),
                ),
            );
        }

        // Room
        b.add(
            "floor",
            Shape::Plane {
                width: 50.0,
                height: 50.0,
            },
            Material::standard(0x080a0a, 0.95, 0.0),
            placed(Vec3::new(0.0, -3.5, 0.0), Vec3::new(-FRAC_PI_2, 0.0, 0.0), Vec3::ONE),
        );
        b.add(
            "back_wall",
            Shape::Plane {
                width: 50.0,
                height: 20.0,
            },
            Material::standard(0x0a0c0c, 0.95, 0.0),
            at(0.0, 5.0, -10.0),
        );

        log::info!("[scene] built {} primitives", b.primitives.len());

        Self {
            background: srgb_hex_to_linear(0x0a0f0f),
            primitives: b.primitives,
            ambient: AmbientLight {
                color: srgb_hex_to_linear(0x404040),
                intensity: 0.4,
            },
            sun: DirectionalLight {
                position: Vec3::new(5.0, 10.0, 5.0),
                color: [1.0; 3],
                intensity: 0.6,
            },
            point_lights: vec![
                PointLight {
                    name: SCREEN_GLOW_LIGHT,
                    position: Vec3::new(0.0, 2.5, 0.0),
                    color: srgb_hex_to_linear(0x2dd4bf),
                    intensity: 1.0,
                    range: 8.0,
                },
                PointLight {
                    name: "coffee_glow",
                    position: Vec3::new(3.5, 1.8, 1.2),
                    color: srgb_hex_to_linear(0xffaa44),
                    intensity: 0.4,
                    range: 4.0,
                },
                PointLight {
                    name: "back_light",
                    position: Vec3::new(-5.0, 5.0, -5.0),
                    color: srgb_hex_to_linear(0x1a3a5c),
                    intensity: 0.3,
                    range: 15.0,
                },
            ],
            screen: ScreenQuad {
                center: Vec3::new(0.0, 2.0, -1.88),
                size: Vec2::new(5.5, 3.1),
            },
        }
    }

    pub fn point_light_index(&self, name: &str) -> Option<usize> {
        self.point_lights.iter().position(|l| l.name == name)
    }

    pub fn find(&self, name: &str) -> impl Iterator<Item = &Primitive> + '_ {
        let name = name.to_owned();
        self.primitives.iter().filter(move |p| p.name == name)
    }

    /// Tessellate every primitive into one vertex/index buffer pair.
    pub fn bake(&self) -> BakedMesh {
        let mut baked = BakedMesh::default();
        for prim in &self.primitives {
            let mesh = prim.shape.tessellate().transformed(prim.transform);
            let base = baked.vertices.len() as u32;
            let m = &prim.material;
            baked
                .vertices
                .extend(mesh.positions.iter().zip(&mesh.normals).map(|(p, n)| SceneVertex {
                    position: p.to_array(),
                    shading: m.shading.code(),
                    normal: n.to_array(),
                    roughness: m.roughness,
                    color: m.color,
                    metalness: m.metalness,
                    emissive: m.emissive,
                    _pad: 0.0,
                }));
            baked.indices.extend(mesh.indices.iter().map(|i| i + base));
        }
        baked
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub shading: f32,
    pub normal: [f32; 3],
    pub roughness: f32,
    pub color: [f32; 3],
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub _pad: f32,
}

#[derive(Clone, Debug, Default)]
pub struct BakedMesh {
    pub vertices: Vec<SceneVertex>,
    pub indices: Vec<u32>,
}

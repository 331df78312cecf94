//! Procedural geometry for the handful of primitive shapes the desk is made
//! of. Every generator returns an indexed triangle list with per-vertex
//! normals; faces wind counter-clockwise when seen from outside.

use glam::{Mat3, Mat4, Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    /// Copy with `transform` applied; normals use the inverse-transpose so
    /// non-uniform scales keep them perpendicular.
    pub fn transformed(&self, transform: Mat4) -> MeshData {
        let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
        MeshData {
            positions: self
                .positions
                .iter()
                .map(|p| transform.transform_point3(*p))
                .collect(),
            normals: self
                .normals
                .iter()
                .map(|n| (normal_matrix * *n).normalize_or_zero())
                .collect(),
            indices: self.indices.clone(),
        }
    }
}

/// Axis-aligned box centered on the origin.
pub fn cuboid(size: Vec3) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::default();
    // (normal, u axis, v axis); u x v == normal keeps the winding outward
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    for (n, u, v) in faces {
        let c = n * h;
        let hu = u * h;
        let hv = v * h;
        let a = mesh.push(c - hu - hv, n);
        let b = mesh.push(c + hu - hv, n);
        let cc = mesh.push(c + hu + hv, n);
        let d = mesh.push(c - hu + hv, n);
        mesh.quad(a, b, cc, d);
    }
    mesh
}

/// Capped frustum around the Y axis, centered on the origin.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let slope = if height.abs() > f32::EPSILON {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };
    let mut mesh = MeshData::default();

    let mut ring = Vec::with_capacity(segments as usize + 1);
    for s in 0..=segments {
        let theta = s as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        let normal = Vec3::new(sin, slope, cos).normalize();
        let top = mesh.push(Vec3::new(radius_top * sin, half, radius_top * cos), normal);
        let bottom = mesh.push(
            Vec3::new(radius_bottom * sin, -half, radius_bottom * cos),
            normal,
        );
        ring.push((top, bottom));
    }
    for w in ring.windows(2) {
        let (t0, b0) = w[0];
        let (t1, b1) = w[1];
        mesh.quad(b0, b1, t1, t0);
    }

    for (y, radius, normal) in [(half, radius_top, Vec3::Y), (-half, radius_bottom, Vec3::NEG_Y)] {
        if radius <= 0.0 {
            continue;
        }
        let center = mesh.push(Vec3::new(0.0, y, 0.0), normal);
        let first = mesh.positions.len() as u32;
        for s in 0..=segments {
            let theta = s as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.push(Vec3::new(radius * sin, y, radius * cos), normal);
        }
        for s in 0..segments {
            let a = first + s;
            if normal.y > 0.0 {
                mesh.indices.extend_from_slice(&[center, a, a + 1]);
            } else {
                mesh.indices.extend_from_slice(&[center, a + 1, a]);
            }
        }
    }
    mesh
}

pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for y in 0..=hs {
        let v = y as f32 / hs as f32;
        let polar = v * PI;
        for x in 0..=ws {
            let u = x as f32 / ws as f32;
            let azimuth = u * TAU;
            let dir = Vec3::new(
                -azimuth.cos() * polar.sin(),
                polar.cos(),
                azimuth.sin() * polar.sin(),
            );
            mesh.push(dir * radius, dir);
        }
    }
    let row = ws + 1;
    for y in 0..hs {
        for x in 0..ws {
            let a = y * row + x + 1;
            let b = y * row + x;
            let c = (y + 1) * row + x;
            let d = (y + 1) * row + x + 1;
            if y != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if y != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Surface of revolution: `profile` holds (radius, height) pairs swept
/// around the Y axis.
pub fn lathe(profile: &[Vec2], segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();
    if profile.len() < 2 {
        return mesh;
    }
    let last = profile.len() - 1;
    let profile_normals: Vec<Vec2> = (0..profile.len())
        .map(|i| {
            let tangent = profile[i.min(last - 1) + 1] - profile[i.saturating_sub(1).min(last - 1)];
            Vec2::new(tangent.y, -tangent.x).normalize_or_zero()
        })
        .collect();

    for s in 0..=segments {
        let phi = s as f32 / segments as f32 * TAU;
        let (sin, cos) = phi.sin_cos();
        for (p, n) in profile.iter().zip(&profile_normals) {
            mesh.push(
                Vec3::new(p.x * sin, p.y, p.x * cos),
                Vec3::new(n.x * sin, n.y, n.x * cos),
            );
        }
    }
    let stride = profile.len() as u32;
    for s in 0..segments {
        for j in 0..last as u32 {
            let a = s * stride + j;
            let b = (s + 1) * stride + j;
            mesh.quad(a, b, b + 1, a + 1);
        }
    }
    mesh
}

/// Uniform Catmull-Rom spline through `points`, `t` in [0, 1] spanning the
/// whole path. End segments reuse the end points as phantom neighbours.
pub fn catmull_rom(points: &[Vec3], t: f32) -> Vec3 {
    match points.len() {
        0 => Vec3::ZERO,
        1 => points[0],
        n => {
            let scaled = t.clamp(0.0, 1.0) * (n - 1) as f32;
            let seg = (scaled.floor() as usize).min(n - 2);
            let u = scaled - seg as f32;
            let p0 = points[seg.saturating_sub(1)];
            let p1 = points[seg];
            let p2 = points[seg + 1];
            let p3 = points[(seg + 2).min(n - 1)];
            let u2 = u * u;
            let u3 = u2 * u;
            0.5 * (2.0 * p1
                + (p2 - p0) * u
                + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u2
                + (3.0 * p1 - p0 - 3.0 * p2 + p3) * u3)
        }
    }
}

/// Open tube of constant `radius` following a Catmull-Rom path.
pub fn tube(path: &[Vec3], tubular_segments: u32, radius: f32, radial_segments: u32) -> MeshData {
    let ts = tubular_segments.max(1);
    let rs = radial_segments.max(3);
    let mut mesh = MeshData::default();
    if path.len() < 2 {
        return mesh;
    }
    let step = 1.0 / ts as f32;
    for i in 0..=ts {
        let t = i as f32 * step;
        let center = catmull_rom(path, t);
        let ahead = catmull_rom(path, (t + step * 0.5).min(1.0));
        let behind = catmull_rom(path, (t - step * 0.5).max(0.0));
        let tangent = (ahead - behind).normalize_or_zero();
        let reference = if tangent.dot(Vec3::Z).abs() > 0.9 {
            Vec3::X
        } else {
            Vec3::Z
        };
        let normal = tangent.cross(reference).normalize_or_zero();
        let binormal = tangent.cross(normal);
        for j in 0..=rs {
            let a = j as f32 / rs as f32 * TAU;
            let dir = normal * a.cos() + binormal * a.sin();
            mesh.push(center + dir * radius, dir);
        }
    }
    let stride = rs + 1;
    for i in 0..ts {
        for j in 0..rs {
            let a = i * stride + j;
            let b = (i + 1) * stride + j;
            mesh.quad(a, b, b + 1, a + 1);
        }
    }
    mesh
}

/// Rectangle in the XY plane facing +Z.
pub fn plane(width: f32, height: f32) -> MeshData {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let mut mesh = MeshData::default();
    let a = mesh.push(Vec3::new(-hw, -hh, 0.0), Vec3::Z);
    let b = mesh.push(Vec3::new(hw, -hh, 0.0), Vec3::Z);
    let c = mesh.push(Vec3::new(hw, hh, 0.0), Vec3::Z);
    let d = mesh.push(Vec3::new(-hw, hh, 0.0), Vec3::Z);
    mesh.quad(a, b, c, d);
    mesh
}

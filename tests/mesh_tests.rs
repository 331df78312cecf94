// Host-side tests for procedural geometry.

use desk_core::mesh::*;
use glam::{Mat4, Vec2, Vec3};

fn assert_indices_valid(mesh: &MeshData) {
    assert_eq!(mesh.positions.len(), mesh.normals.len());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|i| *i < n));
}

fn assert_unit_normals(mesh: &MeshData) {
    for n in &mesh.normals {
        assert!((n.length() - 1.0).abs() < 1e-4, "normal {:?}", n);
    }
}

#[test]
fn cuboid_has_flat_faces() {
    let mesh = cuboid(Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    assert_indices_valid(&mesh);
    assert_unit_normals(&mesh);
    for p in &mesh.positions {
        assert_eq!(p.abs(), Vec3::new(1.0, 2.0, 3.0));
    }
}

#[test]
fn cuboid_winds_outward() {
    let mesh = cuboid(Vec3::ONE);
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize]);
        let face_normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(face_normal.dot(centroid) > 0.0);
    }
}

#[test]
fn cylinder_radii_and_height() {
    let mesh = cylinder(1.0, 2.0, 3.0, 16);
    assert_indices_valid(&mesh);
    assert_unit_normals(&mesh);
    for p in &mesh.positions {
        assert!((p.y.abs() - 1.5).abs() < 1e-5);
        let r = Vec2::new(p.x, p.z).length();
        let max = if p.y > 0.0 { 1.0 } else { 2.0 };
        assert!(r <= max + 1e-5);
    }
}

#[test]
fn cone_skips_degenerate_cap() {
    let with_caps = cylinder(1.0, 1.0, 1.0, 8);
    let cone = cylinder(0.0, 1.0, 1.0, 8);
    assert_eq!(with_caps.triangle_count() - cone.triangle_count(), 8);
}

#[test]
fn sphere_points_lie_on_surface() {
    let mesh = uv_sphere(0.5, 12, 8);
    assert_indices_valid(&mesh);
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        assert!((p.length() - 0.5).abs() < 1e-5);
        assert!(p.normalize().abs_diff_eq(*n, 1e-4));
    }
}

#[test]
fn lathe_sweeps_profile() {
    let profile = [Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.5, 2.0)];
    let mesh = lathe(&profile, 10);
    assert_indices_valid(&mesh);
    assert_eq!(mesh.vertex_count(), 11 * 3);
    assert_eq!(mesh.triangle_count(), 10 * 2 * 2);
    assert!(lathe(&profile[..1], 10).positions.is_empty());
}

#[test]
fn catmull_rom_passes_through_ends() {
    let pts = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
    assert!(catmull_rom(&pts, 0.0).abs_diff_eq(pts[0], 1e-6));
    assert!(catmull_rom(&pts, 1.0).abs_diff_eq(pts[3], 1e-6));
    assert!(catmull_rom(&pts, 1.0 / 3.0).abs_diff_eq(pts[1], 1e-5));
}

#[test]
fn tube_keeps_constant_radius() {
    let path = [Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 2.0, 0.0)];
    let mesh = tube(&path, 12, 0.1, 6);
    assert_indices_valid(&mesh);
    assert_eq!(mesh.vertex_count(), 13 * 7);
    for ring in 0..=12 {
        let t = ring as f32 / 12.0;
        let c = catmull_rom(&path, t);
        for j in 0..7 {
            let p = mesh.positions[ring * 7 + j];
            assert!(((p - c).length() - 0.1).abs() < 1e-4);
        }
    }
}

#[test]
fn plane_faces_positive_z() {
    let mesh = plane(4.0, 2.0);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.normals.iter().all(|n| *n == Vec3::Z));
}

#[test]
fn transform_keeps_normals_perpendicular() {
    let mesh = cuboid(Vec3::ONE).transformed(Mat4::from_scale(Vec3::new(4.0, 1.0, 1.0)));
    assert_unit_normals(&mesh);
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize]);
        let n = mesh.normals[tri[0] as usize];
        assert!(n.dot(b - a).abs() < 1e-4);
        assert!(n.dot(c - a).abs() < 1e-4);
    }
}

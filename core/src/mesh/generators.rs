//! Polygon mesh generators for common shapes.
//!
//! These produce triangulated [`PolygonMesh`] values with geometric face
//! normals, useful as builder input in tests and benchmarks.

use std::f64::consts::PI;

use crate::math::{Vec3, triangle_normal, vec3_from_array};

use super::input::{Polygon, PolygonMesh};

/// Push one triangle, storing its corner UVs as three new loops.
fn push_triangle(mesh: &mut PolygonMesh, corners: [usize; 3], uvs: [[f64; 2]; 3], smooth: bool) {
    let p: [Vec3; 3] = corners.map(|c| vec3_from_array(mesh.positions[c]));
    let n = triangle_normal(&p[0], &p[1], &p[2]);
    let loop_start = mesh.uvs.len();
    mesh.uvs.extend_from_slice(&uvs);
    mesh.polygons
        .push(Polygon::triangle(corners, loop_start, [n.x, n.y, n.z], smooth));
}

/// Generate a UV sphere.
///
/// Creates a sphere with the given radius, number of longitudinal segments,
/// and number of latitudinal rings. Degenerate triangles at the poles are
/// left out, giving `2 * segments * (rings - 1)` triangles. The seam column
/// repeats its positions, so smooth shading merges normals across it.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `segments` - Number of longitudinal segments (around the equator)
/// * `rings` - Number of latitudinal rings (from pole to pole)
/// * `smooth` - Smoothing flag for every triangle
pub fn generate_sphere(radius: f64, segments: usize, rings: usize, smooth: bool) -> PolygonMesh {
    let mut mesh = PolygonMesh::new();
    let mut grid_uvs = Vec::new();

    for ring in 0..=rings {
        let theta = ring as f64 * PI / rings as f64;
        for segment in 0..=segments {
            let phi = segment as f64 * 2.0 * PI / segments as f64;
            let x = theta.sin() * phi.cos();
            let y = theta.cos();
            let z = theta.sin() * phi.sin();
            mesh.positions.push([x * radius, y * radius, z * radius]);
            grid_uvs.push([
                segment as f64 / segments as f64,
                ring as f64 / rings as f64,
            ]);
        }
    }

    for ring in 0..rings {
        for segment in 0..segments {
            let current = ring * (segments + 1) + segment;
            let next = current + segments + 1;

            if ring != 0 {
                let corners = [current, current + 1, next];
                push_triangle(&mut mesh, corners, corners.map(|c| grid_uvs[c]), smooth);
            }
            if ring != rings - 1 {
                let corners = [current + 1, next + 1, next];
                push_triangle(&mut mesh, corners, corners.map(|c| grid_uvs[c]), smooth);
            }
        }
    }

    mesh
}

/// Generate a quad on the XY plane as two triangles.
///
/// The quad is centered at the origin with the given half-width and
/// half-height and faces +Z. UV coordinates go from (0,0) at top-left to
/// (1,1) at bottom-right.
pub fn generate_quad(half_width: f64, half_height: f64, smooth: bool) -> PolygonMesh {
    let mut mesh = PolygonMesh {
        positions: vec![
            [-half_width, -half_height, 0.0],
            [half_width, -half_height, 0.0],
            [half_width, half_height, 0.0],
            [-half_width, half_height, 0.0],
        ],
        ..PolygonMesh::default()
    };
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    push_triangle(&mut mesh, [0, 1, 2], [uvs[0], uvs[1], uvs[2]], smooth);
    push_triangle(&mut mesh, [2, 3, 0], [uvs[2], uvs[3], uvs[0]], smooth);
    mesh
}

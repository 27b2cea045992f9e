//! Plain-data polygon input.
//!
//! A host application's mesh is reduced to a [`PolygonMesh`]: flat arrays of
//! positions and per-loop UVs plus a polygon list. Validation happens here,
//! before any vertex is built or any byte is written.

use crate::error::{KsmError, KsmResult};
use crate::math::{Vec2, Vec3, vec2_from_array, vec3_from_array};
use crate::profiling::profile_function;

use super::builder::{BuilderConfig, VertexBuilder};
use super::data::Mesh;

/// One polygon of a [`PolygonMesh`].
///
/// Corner `k` takes its position from `positions[vertices[k]]` and its UV
/// from `uvs[loop_start + k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Indices into [`PolygonMesh::positions`], one per corner.
    pub vertices: Vec<usize>,
    /// Index of the first corner's entry in [`PolygonMesh::uvs`].
    pub loop_start: usize,
    /// Face normal. Need not be unit length.
    pub normal: [f64; 3],
    /// Whether the corners of this polygon are smooth shaded.
    pub smooth: bool,
}

impl Polygon {
    /// Create a triangle polygon.
    pub fn triangle(vertices: [usize; 3], loop_start: usize, normal: [f64; 3], smooth: bool) -> Self {
        Self {
            vertices: vertices.to_vec(),
            loop_start,
            normal,
            smooth,
        }
    }
}

/// A polygon mesh as plain arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonMesh {
    /// Vertex positions.
    pub positions: Vec<[f64; 3]>,
    /// Per-loop (per polygon corner) texture coordinates. Empty means every
    /// corner gets `(0, 0)`.
    pub uvs: Vec<[f64; 2]>,
    /// Polygons in export order.
    pub polygons: Vec<Polygon>,
}

/// A validated triangle, ready for [`VertexBuilder::add_triangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Corner positions.
    pub positions: [Vec3; 3],
    /// Face normal.
    pub normal: Vec3,
    /// Corner texture coordinates.
    pub uvs: [Vec2; 3],
    /// Smoothing flag shared by all corners.
    pub smooth: bool,
}

impl PolygonMesh {
    /// Create an empty polygon mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every polygon is a triangle and references existing data.
    ///
    /// Reports the first offending polygon.
    pub fn validate(&self) -> KsmResult<()> {
        for (polygon_index, polygon) in self.polygons.iter().enumerate() {
            if polygon.vertices.len() != 3 {
                return Err(KsmError::NotTriangulated {
                    polygon: polygon_index,
                    corners: polygon.vertices.len(),
                });
            }
            if let Some(&vertex) = polygon
                .vertices
                .iter()
                .find(|&&v| v >= self.positions.len())
            {
                return Err(KsmError::VertexOutOfRange {
                    polygon: polygon_index,
                    vertex,
                    vertex_count: self.positions.len(),
                });
            }
            let loops_end = polygon.loop_start.checked_add(3);
            if !self.uvs.is_empty() && loops_end.is_none_or(|end| end > self.uvs.len()) {
                return Err(KsmError::LoopOutOfRange {
                    polygon: polygon_index,
                    loop_index: polygon.loop_start.max(self.uvs.len()),
                    loop_count: self.uvs.len(),
                });
            }
        }
        Ok(())
    }

    /// Validate, then iterate over all polygons as triangles.
    ///
    /// Every polygon yields exactly one triangle, in polygon order.
    pub fn triangles(&self) -> KsmResult<impl Iterator<Item = Triangle> + '_> {
        self.validate()?;
        Ok(self.polygons.iter().map(|polygon| {
            let corner = |k: usize| {
                let uv = if self.uvs.is_empty() {
                    Vec2::zeros()
                } else {
                    vec2_from_array(self.uvs[polygon.loop_start + k])
                };
                (vec3_from_array(self.positions[polygon.vertices[k]]), uv)
            };
            let [(p0, uv0), (p1, uv1), (p2, uv2)] = [corner(0), corner(1), corner(2)];
            Triangle {
                positions: [p0, p1, p2],
                normal: vec3_from_array(polygon.normal),
                uvs: [uv0, uv1, uv2],
                smooth: polygon.smooth,
            }
        }))
    }
}

/// Validate `input` and accumulate all of its triangles into a [`Mesh`].
pub fn build_mesh(input: &PolygonMesh, config: &BuilderConfig) -> KsmResult<Mesh> {
    profile_function!();
    let triangles = input.triangles()?;

    let mut builder = VertexBuilder::with_config(config);
    builder.reserve(input.polygons.len());
    builder.extend(triangles);

    let mesh = builder.into_mesh();
    log::debug!(
        "built mesh: {} polygons -> {} vertices, {} faces",
        input.polygons.len(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

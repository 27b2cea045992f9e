//! Vertex accumulation with smoothing-normal merges.
//!
//! Every corner handed to [`VertexBuilder::add_vertex`] gets a fresh vertex
//! slot. Smooth corners additionally average their normal with every earlier
//! smooth slot at the same position and write the result back into those
//! slots, so a later corner can correct the shading of earlier ones.

use crate::math::{Vec2, Vec3, normalize_or_zero};
use crate::profiling::profile_function;

use super::coincidence::{CoincidenceIndex, CoincidenceStrategy};
use super::data::{Mesh, VertexSlot};
use super::input::Triangle;

/// Settings for a [`VertexBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuilderConfig {
    /// How coincident smooth vertices are looked up.
    pub coincidence: CoincidenceStrategy,
}

impl BuilderConfig {
    /// Set the coincidence lookup strategy.
    pub fn with_coincidence(mut self, coincidence: CoincidenceStrategy) -> Self {
        self.coincidence = coincidence;
        self
    }
}

/// Accumulates triangles into a [`Mesh`].
///
/// # Example
///
/// ```
/// use ksm_core::math::{Vec2, Vec3};
/// use ksm_core::mesh::VertexBuilder;
///
/// let mut builder = VertexBuilder::new();
/// builder.add_face(
///     [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)],
///     Vec3::new(0.0, 0.0, 2.0),
///     [Vec2::zeros(); 3],
///     false,
/// );
/// let mesh = builder.into_mesh();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.faces(), &[[2, 1, 0]]);
/// ```
pub struct VertexBuilder {
    mesh: Mesh,
    index: CoincidenceIndex,
}

impl VertexBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&BuilderConfig::default())
    }

    /// Create a builder with the given configuration.
    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            mesh: Mesh::new(),
            index: CoincidenceIndex::new(config.coincidence),
        }
    }

    /// Reserve room for `triangles` more triangles.
    pub fn reserve(&mut self, triangles: usize) {
        self.mesh.reserve(triangles * 3, triangles);
    }

    /// Append one vertex and return its index.
    ///
    /// A new slot is always allocated, even when an identical vertex already
    /// exists. For smooth corners, every existing smooth slot whose position
    /// is coincident (see [`is_coincident`](crate::math::is_coincident)) has
    /// its normal replaced by the normalized sum of its own normal, the other
    /// coincident normals, and `normal`; the new slot receives the same
    /// averaged normal. Flat corners are stored exactly as given.
    pub fn add_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2, smooth: bool) -> u32 {
        if !smooth {
            let index = self.mesh.push_vertex(VertexSlot {
                position,
                normal,
                uv,
                smooth: false,
            });
            log::trace!("vertex {index}: flat at {:?}", position.as_slice());
            return index;
        }

        let overlap = self.index.overlapping(&self.mesh, &position);
        let normal = if overlap.is_empty() {
            normal
        } else {
            let sum = overlap
                .iter()
                .fold(normal, |acc, &i| acc + self.mesh.normals()[i as usize]);
            let averaged = normalize_or_zero(sum);
            for &i in &overlap {
                self.mesh.set_normal(i, averaged);
            }
            averaged
        };

        let index = self.mesh.push_vertex(VertexSlot {
            position,
            normal,
            uv,
            smooth: true,
        });
        self.index.insert(index, &position);
        log::trace!(
            "vertex {index}: smooth at {:?}, merged with {} earlier",
            position.as_slice(),
            overlap.len()
        );
        index
    }

    /// Append one triangle.
    ///
    /// `face_normal` is normalized once and shared by all three corners. The
    /// face is stored with its corner order reversed.
    pub fn add_face(&mut self, positions: [Vec3; 3], face_normal: Vec3, uvs: [Vec2; 3], smooth: bool) {
        let normal = normalize_or_zero(face_normal);
        let i0 = self.add_vertex(positions[0], normal, uvs[0], smooth);
        let i1 = self.add_vertex(positions[1], normal, uvs[1], smooth);
        let i2 = self.add_vertex(positions[2], normal, uvs[2], smooth);
        self.mesh.push_face([i2, i1, i0]);
    }

    /// Append one [`Triangle`].
    pub fn add_triangle(&mut self, triangle: &Triangle) {
        self.add_face(
            triangle.positions,
            triangle.normal,
            triangle.uvs,
            triangle.smooth,
        );
    }

    /// Append every triangle from an iterator.
    pub fn extend<I: IntoIterator<Item = Triangle>>(&mut self, triangles: I) {
        profile_function!();
        for triangle in triangles {
            self.add_triangle(&triangle);
        }
    }

    /// The mesh accumulated so far.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Finish building and take the mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

impl Default for VertexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

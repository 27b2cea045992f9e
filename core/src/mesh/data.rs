//! Accumulated mesh data.
//!
//! This module provides:
//! - [`Face`] - A triangle as three vertex indices
//! - [`VertexSlot`] - A copy of one vertex's attributes
//! - [`Mesh`] - Parallel vertex buffers plus the face list

use crate::math::{Vec2, Vec3};

/// A triangle as three indices into the vertex buffers of a [`Mesh`].
pub type Face = [u32; 3];

/// All attributes of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexSlot {
    /// Model-space position.
    pub position: Vec3,
    /// Unit normal, possibly averaged with coincident smooth vertices.
    pub normal: Vec3,
    /// Texture coordinate.
    pub uv: Vec2,
    /// Whether this vertex takes part in smoothing merges.
    pub smooth: bool,
}

/// A triangle mesh stored as parallel per-vertex buffers.
///
/// The four vertex buffers always have the same length and index `i` in one
/// refers to the same vertex in the others. Positions and UVs never change
/// after a vertex is pushed; only normals are rewritten by smoothing merges.
///
/// Meshes are filled through [`VertexBuilder`](super::VertexBuilder) and are
/// read-only from the outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    smooth: Vec<bool>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for `vertices` vertices and `faces` faces.
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            smooth: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the mesh has no vertices and no faces.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.faces.is_empty()
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex normals.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Vertex texture coordinates.
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Per-vertex smoothing flags.
    pub fn smooth_flags(&self) -> &[bool] {
        &self.smooth
    }

    /// Faces in insertion order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get all attributes of the vertex at `index`.
    pub fn vertex(&self, index: usize) -> Option<VertexSlot> {
        Some(VertexSlot {
            position: *self.positions.get(index)?,
            normal: self.normals[index],
            uv: self.uvs[index],
            smooth: self.smooth[index],
        })
    }

    /// Iterate over all vertices in index order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexSlot> + '_ {
        (0..self.vertex_count()).map(|i| VertexSlot {
            position: self.positions[i],
            normal: self.normals[i],
            uv: self.uvs[i],
            smooth: self.smooth[i],
        })
    }

    /// Append a vertex and return its index.
    pub(super) fn push_vertex(&mut self, slot: VertexSlot) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(slot.position);
        self.normals.push(slot.normal);
        self.uvs.push(slot.uv);
        self.smooth.push(slot.smooth);
        index
    }

    pub(super) fn reserve(&mut self, vertices: usize, faces: usize) {
        self.positions.reserve(vertices);
        self.normals.reserve(vertices);
        self.uvs.reserve(vertices);
        self.smooth.reserve(vertices);
        self.faces.reserve(faces);
    }

    /// Overwrite the normal of an existing vertex.
    pub(super) fn set_normal(&mut self, index: u32, normal: Vec3) {
        self.normals[index as usize] = normal;
    }

    pub(super) fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }
}

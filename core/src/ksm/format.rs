//! `.ksm` layout constants and decoded file types.
//!
//! ```text
//! "_KSM"                           file magic, no payload
//! "vert" i32 (BE) count            vertex chunk header
//!     f32 (LE) px pz py            position, file axis order
//!     f32 (LE) nx nz ny            normal, file axis order
//!     f32 (LE) u v                 texture coordinate
//! "face" i32 (BE) count            face chunk header
//!     i32 (LE) i0 i1 i2            vertex indices
//! ```

use crate::error::{KsmError, KsmResult};
use crate::math::{Vec3, from_ksm_axes, to_ksm_axes};
use crate::mesh::{Mesh, VertexSlot};

/// File magic tag.
pub const MAGIC: [u8; 4] = *b"_KSM";
/// Vertex chunk tag.
pub const VERTEX_TAG: [u8; 4] = *b"vert";
/// Face chunk tag.
pub const FACE_TAG: [u8; 4] = *b"face";

/// Size of a chunk header: tag plus element count.
pub const CHUNK_HEADER_SIZE: usize = 8;
/// Size of one serialized vertex.
pub const VERTEX_SIZE: usize = 32;
/// Size of one serialized face.
pub const FACE_SIZE: usize = 12;

/// Exact size of a `.ksm` file with the given element counts.
pub fn file_size(vertex_count: usize, face_count: usize) -> u64 {
    (MAGIC.len() + CHUNK_HEADER_SIZE * 2) as u64
        + vertex_count as u64 * VERTEX_SIZE as u64
        + face_count as u64 * FACE_SIZE as u64
}

/// Convert an element count to the signed 32-bit value stored in a chunk header.
pub(crate) fn chunk_count(chunk: &'static str, count: usize) -> KsmResult<i32> {
    i32::try_from(count).map_err(|_| KsmError::TooManyElements { chunk, count })
}

/// Check that a mesh fits the format before anything is written.
pub(crate) fn check_limits(mesh: &Mesh) -> KsmResult<()> {
    chunk_count("vert", mesh.vertex_count())?;
    chunk_count("face", mesh.face_count())?;
    Ok(())
}

/// A vertex as stored in a `.ksm` file.
///
/// Position and normal are in file axis order (`x, z, y`). The layout matches
/// the serialized payload on little-endian targets, so a slice of vertices
/// can be handed to a GPU buffer with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct KsmVertex {
    /// Position (`x, z, y`).
    pub position: [f32; 3],
    /// Normal (`x, z, y`).
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl KsmVertex {
    /// Narrow a builder vertex to its serialized form.
    pub fn from_slot(slot: &VertexSlot) -> Self {
        Self {
            position: to_ksm_axes(&slot.position),
            normal: to_ksm_axes(&slot.normal),
            uv: [slot.uv.x as f32, slot.uv.y as f32],
        }
    }

    /// Position converted back to `x, y, z` order.
    pub fn position_xyz(&self) -> Vec3 {
        from_ksm_axes(self.position)
    }

    /// Normal converted back to `x, y, z` order.
    pub fn normal_xyz(&self) -> Vec3 {
        from_ksm_axes(self.normal)
    }

    pub(crate) fn to_le_bytes(self) -> [u8; VERTEX_SIZE] {
        let mut bytes = [0u8; VERTEX_SIZE];
        let values = self.position.iter().chain(&self.normal).chain(&self.uv);
        for (dst, value) in bytes.chunks_exact_mut(4).zip(values) {
            dst.copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    pub(crate) fn from_le_bytes(bytes: &[u8; VERTEX_SIZE]) -> Self {
        let mut values = [0f32; 8];
        for (value, src) in values.iter_mut().zip(bytes.chunks_exact(4)) {
            *value = f32::from_le_bytes([src[0], src[1], src[2], src[3]]);
        }
        Self {
            position: [values[0], values[1], values[2]],
            normal: [values[3], values[4], values[5]],
            uv: [values[6], values[7]],
        }
    }
}

/// A decoded `.ksm` file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KsmFile {
    /// Vertices in file order.
    pub vertices: Vec<KsmVertex>,
    /// Faces as stored, three vertex indices each.
    pub faces: Vec<[i32; 3]>,
}

impl KsmFile {
    /// The serialized form of a mesh, without writing any bytes.
    pub fn from_mesh(mesh: &Mesh) -> KsmResult<Self> {
        check_limits(mesh)?;
        Ok(Self {
            vertices: mesh.vertices().map(|v| KsmVertex::from_slot(&v)).collect(),
            faces: mesh
                .faces()
                .iter()
                .map(|f| f.map(|i| i as i32))
                .collect(),
        })
    }

    /// Exact serialized size in bytes.
    pub fn byte_size(&self) -> u64 {
        file_size(self.vertices.len(), self.faces.len())
    }

    /// Axis-aligned bounds of all positions in file axis order, or `None`
    /// for a file without vertices.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(mut lo, mut hi), v| {
            for axis in 0..3 {
                lo[axis] = lo[axis].min(v.position[axis]);
                hi[axis] = hi[axis].max(v.position[axis]);
            }
            (lo, hi)
        }))
    }

    /// Index of the first face that references a missing vertex.
    pub fn find_invalid_face(&self) -> Option<usize> {
        let count = self.vertices.len() as i64;
        self.faces
            .iter()
            .position(|f| f.iter().any(|&i| i < 0 || i64::from(i) >= count))
    }
}

//! `.ksm` chunk writer.

use std::io::Write;

use crate::error::KsmResult;
use crate::mesh::Mesh;
use crate::profiling::profile_function;

use super::format::{
    FACE_SIZE, FACE_TAG, KsmVertex, MAGIC, VERTEX_TAG, check_limits, chunk_count,
};

/// Writes `.ksm` chunks to a byte sink.
///
/// Chunks must be written in file order: [`write_magic`](Self::write_magic),
/// then [`write_vertex_chunk`](Self::write_vertex_chunk), then
/// [`write_face_chunk`](Self::write_face_chunk). Use [`write_ksm`] to emit a
/// complete file in one call.
pub struct KsmWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> KsmWriter<W> {
    /// Wrap a byte sink.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Unwrap the byte sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn put(&mut self, bytes: &[u8]) -> KsmResult<()> {
        self.inner.write_all(bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    fn put_header(&mut self, tag: &[u8; 4], count: i32) -> KsmResult<()> {
        self.put(tag)?;
        self.put(&count.to_be_bytes())
    }

    /// Write the `_KSM` file magic. It carries no count and no payload.
    pub fn write_magic(&mut self) -> KsmResult<()> {
        self.put(&MAGIC)
    }

    /// Write the `vert` chunk: every vertex slot in index order.
    pub fn write_vertex_chunk(&mut self, mesh: &Mesh) -> KsmResult<()> {
        profile_function!();
        let count = chunk_count("vert", mesh.vertex_count())?;
        self.put_header(&VERTEX_TAG, count)?;
        for slot in mesh.vertices() {
            self.put(&KsmVertex::from_slot(&slot).to_le_bytes())?;
        }
        log::debug!("wrote vert chunk with {count} vertices");
        Ok(())
    }

    /// Write the `face` chunk: every face in insertion order.
    pub fn write_face_chunk(&mut self, mesh: &Mesh) -> KsmResult<()> {
        profile_function!();
        // Face indices are below the vertex count, so they fit once it does.
        check_limits(mesh)?;
        let count = chunk_count("face", mesh.face_count())?;
        self.put_header(&FACE_TAG, count)?;
        for face in mesh.faces() {
            let mut bytes = [0u8; FACE_SIZE];
            for (dst, &index) in bytes.chunks_exact_mut(4).zip(face) {
                dst.copy_from_slice(&(index as i32).to_le_bytes());
            }
            self.put(&bytes)?;
        }
        log::debug!("wrote face chunk with {count} faces");
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> KsmResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Write a complete `.ksm` file (magic, vertices, faces) and return the number
/// of bytes written.
///
/// Element counts are checked before the first byte goes out, so an oversized
/// mesh leaves the sink untouched.
pub fn write_ksm<W: Write>(mesh: &Mesh, sink: W) -> KsmResult<u64> {
    check_limits(mesh)?;
    let mut writer = KsmWriter::new(sink);
    writer.write_magic()?;
    writer.write_vertex_chunk(mesh)?;
    writer.write_face_chunk(mesh)?;
    writer.flush()?;
    Ok(writer.bytes_written())
}

/// Encode a mesh into an in-memory `.ksm` image.
pub fn encode_ksm(mesh: &Mesh) -> KsmResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(super::format::file_size(
        mesh.vertex_count(),
        mesh.face_count(),
    ) as usize);
    write_ksm(mesh, &mut bytes)?;
    Ok(bytes)
}

//! Binary `.ksm` mesh files.
//!
//! A `.ksm` file is a sequence of chunks, each starting with a four-byte ASCII
//! tag. Chunk element counts are big-endian `i32`; payload values are
//! little-endian. This module provides:
//!
//! - [`KsmWriter`] / [`write_ksm`] - Serialize a built [`Mesh`](crate::mesh::Mesh)
//! - [`read_ksm`] - Parse a file back into a [`KsmFile`]
//! - [`export_ksm`] - Validate, build and atomically write a polygon mesh
//!
//! # Example
//!
//! ```
//! use ksm_core::ksm::{decode_ksm, encode_ksm};
//! use ksm_core::mesh::{BuilderConfig, build_mesh, generators::generate_quad};
//!
//! let mesh = build_mesh(&generate_quad(1.0, 1.0, true), &BuilderConfig::default()).unwrap();
//! let bytes = encode_ksm(&mesh).unwrap();
//! let file = decode_ksm(&bytes).unwrap();
//! assert_eq!(file.vertices.len(), 6);
//! assert_eq!(file.byte_size(), bytes.len() as u64);
//! ```

mod export;
mod format;
mod reader;
#[cfg(test)]
mod tests;
mod writer;

pub use export::{ExportOptions, ExportSummary, export_ksm, temp_path, write_mesh_file};
pub use format::{
    CHUNK_HEADER_SIZE, FACE_SIZE, FACE_TAG, KsmFile, KsmVertex, MAGIC, VERTEX_SIZE, VERTEX_TAG,
    file_size,
};
pub use reader::{decode_ksm, read_ksm};
pub use writer::{KsmWriter, encode_ksm, write_ksm};

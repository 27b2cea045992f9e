//! glTF 2.0 source meshes.
//!
//! Reads one mesh of a `.glb` file, or of a `.gltf` file whose buffers are
//! embedded as data URIs, into a [`PolygonMesh`](crate::mesh::PolygonMesh)
//! ready for export. External buffer files are not resolved.
//!
//! # Example
//!
//! ```ignore
//! use ksm_core::gltf::{GltfSourceOptions, load_gltf_polygons};
//! use ksm_core::ksm::{ExportOptions, export_ksm};
//!
//! let data = std::fs::read("model.glb").unwrap();
//! let polygons = load_gltf_polygons(&data, &GltfSourceOptions::default()).unwrap();
//! export_ksm("model.ksm", &polygons, &ExportOptions::default()).unwrap();
//! ```

mod buffers;
mod error;
mod source;
#[cfg(test)]
mod tests;

pub use error::GltfError;
pub use source::{GltfSourceOptions, load_gltf_polygons};

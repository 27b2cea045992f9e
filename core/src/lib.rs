//! # ksm-core
//!
//! Conversion of triangulated polygon meshes into the binary `.ksm` format:
//! vertex building with smoothing-normal merges, the chunked file codec, and
//! an optional glTF source reader.

pub mod error;
#[cfg(feature = "gltf")]
pub mod gltf;
pub mod ksm;
pub mod math;
pub mod mesh;
pub mod profiling;

pub use error::{KsmError, KsmResult};
pub use ksm::{ExportOptions, ExportSummary, export_ksm};
pub use mesh::{BuilderConfig, CoincidenceStrategy, PolygonMesh};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Whole-file export of a polygon mesh.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::KsmResult;
use crate::mesh::{BuilderConfig, Mesh, PolygonMesh, build_mesh};
use crate::profiling::{profile_function, profile_message, profile_scope};

use super::format::check_limits;
use super::writer::write_ksm;

/// Options for [`export_ksm`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Vertex builder configuration.
    pub builder: BuilderConfig,
}

impl ExportOptions {
    /// Set the vertex builder configuration.
    pub fn with_builder(mut self, builder: BuilderConfig) -> Self {
        self.builder = builder;
        self
    }
}

/// What an export produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Vertices in the vertex chunk.
    pub vertex_count: usize,
    /// Faces in the face chunk.
    pub face_count: usize,
    /// Size of the written file.
    pub bytes_written: u64,
}

/// Sibling path a file is staged at before it replaces `path`.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Validate `input`, build it, and write it to `path` as a `.ksm` file.
///
/// Nothing touches the filesystem until the input has been validated and the
/// mesh fits the format. The file is staged next to `path` and renamed into
/// place, so on failure the destination keeps its previous contents.
pub fn export_ksm(
    path: impl AsRef<Path>,
    input: &PolygonMesh,
    options: &ExportOptions,
) -> KsmResult<ExportSummary> {
    profile_function!();
    let path = path.as_ref();
    let mesh = build_mesh(input, &options.builder)?;
    let bytes_written = write_mesh_file(path, &mesh)?;

    let summary = ExportSummary {
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        bytes_written,
    };
    log::info!(
        "exported {} ({} vertices, {} faces, {} bytes)",
        path.display(),
        summary.vertex_count,
        summary.face_count,
        summary.bytes_written
    );
    profile_message!("ksm export finished");
    Ok(summary)
}

/// Write an already built mesh to `path`, replacing it atomically.
pub fn write_mesh_file(path: &Path, mesh: &Mesh) -> KsmResult<u64> {
    check_limits(mesh)?;
    let staging = temp_path(path);

    let result = stage(&staging, mesh).and_then(|n| {
        fs::rename(&staging, path)?;
        Ok(n)
    });
    if result.is_err() && staging.exists() {
        log::warn!("discarding partial output {}", staging.display());
        if let Err(err) = fs::remove_file(&staging) {
            log::warn!("could not remove {}: {err}", staging.display());
        }
    }
    result
}

fn stage(staging: &Path, mesh: &Mesh) -> KsmResult<u64> {
    profile_scope!("stage_ksm");
    log::debug!("staging {}", staging.display());
    let mut out = BufWriter::new(File::create(staging)?);
    let n = write_ksm(mesh, &mut out)?;
    let file = out.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    Ok(n)
}

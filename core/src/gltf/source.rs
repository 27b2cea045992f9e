//! Reduction of one glTF mesh to a [`PolygonMesh`].

use crate::math::{triangle_normal, vec3_from_array};
use crate::mesh::{Polygon, PolygonMesh};
use crate::profiling::profile_function;

use super::buffers::resolve_buffers;
use super::error::GltfError;

/// Which mesh to read and how to flag its faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GltfSourceOptions {
    /// Mesh index in the glTF document.
    pub mesh: usize,
    /// Smoothing flag given to every face.
    pub smooth: bool,
}

impl Default for GltfSourceOptions {
    fn default() -> Self {
        Self {
            mesh: 0,
            smooth: true,
        }
    }
}

impl GltfSourceOptions {
    /// Select the mesh to read.
    pub fn with_mesh(mut self, mesh: usize) -> Self {
        self.mesh = mesh;
        self
    }

    /// Set the smoothing flag for every face.
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }
}

/// Read one mesh of a `.glb` or self-contained `.gltf` document as triangles.
///
/// Every primitive of the mesh is appended in order. Primitives must be
/// triangle lists; nothing is triangulated here. Node transforms and
/// materials are ignored.
pub fn load_gltf_polygons(
    data: &[u8],
    options: &GltfSourceOptions,
) -> Result<PolygonMesh, GltfError> {
    profile_function!();
    let gltf_dep::Gltf { document, blob } = gltf_dep::Gltf::from_slice(data)?;
    let buffers = resolve_buffers(&document, blob)?;

    let mesh_count = document.meshes().count();
    let mesh = document
        .meshes()
        .nth(options.mesh)
        .ok_or(GltfError::MeshNotFound {
            mesh: options.mesh,
            mesh_count,
        })?;

    let mut out = PolygonMesh::new();
    for primitive in mesh.primitives() {
        append_primitive(&mut out, &primitive, mesh.index(), &buffers, options.smooth)?;
    }

    log::debug!(
        "glTF mesh {} ({}): {} positions, {} triangles",
        mesh.index(),
        mesh.name().unwrap_or("unnamed"),
        out.positions.len(),
        out.polygons.len()
    );
    Ok(out)
}

fn append_primitive(
    out: &mut PolygonMesh,
    primitive: &gltf_dep::Primitive<'_>,
    mesh: usize,
    buffers: &[Vec<u8>],
    smooth: bool,
) -> Result<(), GltfError> {
    let index = primitive.index();
    if primitive.mode() != gltf_dep::mesh::Mode::Triangles {
        return Err(GltfError::UnsupportedTopology {
            mesh,
            primitive: index,
            mode: primitive.mode(),
        });
    }

    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));
    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or(GltfError::MissingPositions {
            mesh,
            primitive: index,
        })?
        .collect();
    let tex_coords: Option<Vec<[f32; 2]>> = reader
        .read_tex_coords(0)
        .map(|coords| coords.into_f32().collect());
    if let Some(coords) = &tex_coords
        && coords.len() != positions.len()
    {
        return Err(GltfError::AccessorError(format!(
            "mesh {mesh} primitive {index}: {} texture coordinates for {} positions",
            coords.len(),
            positions.len()
        )));
    }

    let indices: Vec<usize> = match reader.read_indices() {
        Some(indices) => indices.into_u32().map(|i| i as usize).collect(),
        None => (0..positions.len()).collect(),
    };
    if indices.len() % 3 != 0 {
        return Err(GltfError::AccessorError(format!(
            "mesh {mesh} primitive {index}: {} indices do not form whole triangles",
            indices.len()
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i >= positions.len()) {
        return Err(GltfError::AccessorError(format!(
            "mesh {mesh} primitive {index}: index {bad} out of range for {} positions",
            positions.len()
        )));
    }

    let base = out.positions.len();
    out.positions
        .extend(positions.iter().map(|p| p.map(f64::from)));

    for corners in indices.chunks_exact(3) {
        let [a, b, c] = [corners[0], corners[1], corners[2]];
        let p = [a, b, c].map(|i| vec3_from_array(positions[i].map(f64::from)));
        let normal = triangle_normal(&p[0], &p[1], &p[2]);

        let loop_start = out.uvs.len();
        for &corner in &[a, b, c] {
            let uv = tex_coords
                .as_ref()
                .map_or([0.0, 0.0], |coords| coords[corner].map(f64::from));
            out.uvs.push(uv);
        }
        out.polygons.push(Polygon::triangle(
            [base + a, base + b, base + c],
            loop_start,
            [normal.x, normal.y, normal.z],
            smooth,
        ));
    }
    Ok(())
}

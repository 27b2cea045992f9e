//! Error types for reading glTF source meshes.

/// Errors that can occur while reducing a glTF mesh to polygons.
#[derive(Debug)]
pub enum GltfError {
    /// Failed to parse the glTF document.
    Parse(gltf_dep::Error),
    /// The requested mesh index does not exist.
    MeshNotFound {
        /// Requested mesh index.
        mesh: usize,
        /// Number of meshes in the document.
        mesh_count: usize,
    },
    /// A primitive is not a triangle list.
    UnsupportedTopology {
        /// Mesh index in the glTF document.
        mesh: usize,
        /// Primitive index within the mesh.
        primitive: usize,
        /// The primitive's mode.
        mode: gltf_dep::mesh::Mode,
    },
    /// A primitive is missing position data.
    MissingPositions {
        /// Mesh index in the glTF document.
        mesh: usize,
        /// Primitive index within the mesh.
        primitive: usize,
    },
    /// Accessor data is inconsistent.
    AccessorError(String),
    /// A buffer could not be resolved.
    BufferError(String),
}

impl std::fmt::Display for GltfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "glTF parse error: {e}"),
            Self::MeshNotFound { mesh, mesh_count } => {
                write!(f, "mesh {mesh} not found, the document has {mesh_count} meshes")
            }
            Self::UnsupportedTopology {
                mesh,
                primitive,
                mode,
            } => write!(
                f,
                "mesh {mesh} primitive {primitive} uses {mode:?}, only triangle lists are supported"
            ),
            Self::MissingPositions { mesh, primitive } => {
                write!(
                    f,
                    "mesh {mesh} primitive {primitive} has no POSITION attribute"
                )
            }
            Self::AccessorError(msg) => write!(f, "accessor error: {msg}"),
            Self::BufferError(msg) => write!(f, "buffer error: {msg}"),
        }
    }
}

impl std::error::Error for GltfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<gltf_dep::Error> for GltfError {
    fn from(e: gltf_dep::Error) -> Self {
        Self::Parse(e)
    }
}

//! Error types for mesh input validation and `.ksm` encoding.

use std::fmt;

/// Errors that can occur while validating input, exporting or reading `.ksm` data.
#[derive(Debug)]
pub enum KsmError {
    /// An IO error occurred on the byte sink or source.
    Io(std::io::Error),
    /// A polygon does not have exactly three corners.
    NotTriangulated {
        /// Polygon index in the input mesh.
        polygon: usize,
        /// Number of corners the polygon has.
        corners: usize,
    },
    /// A polygon references a vertex that does not exist.
    VertexOutOfRange {
        /// Polygon index in the input mesh.
        polygon: usize,
        /// Referenced vertex index.
        vertex: usize,
        /// Number of vertices in the input mesh.
        vertex_count: usize,
    },
    /// A polygon references a UV loop that does not exist.
    LoopOutOfRange {
        /// Polygon index in the input mesh.
        polygon: usize,
        /// Referenced loop index.
        loop_index: usize,
        /// Number of loops in the input mesh.
        loop_count: usize,
    },
    /// A chunk holds more elements than its signed 32-bit count can express.
    TooManyElements {
        /// Chunk tag.
        chunk: &'static str,
        /// Element count that did not fit.
        count: usize,
    },
    /// The data does not start with the `_KSM` tag.
    BadMagic([u8; 4]),
    /// A chunk tag other than the expected one was found.
    UnexpectedTag {
        /// Expected chunk tag.
        expected: &'static str,
        /// Tag bytes actually read.
        found: [u8; 4],
    },
    /// A chunk declares a negative element count.
    NegativeCount {
        /// Chunk tag.
        chunk: &'static str,
        /// Declared count.
        count: i32,
    },
    /// The data ends before a chunk is complete.
    Truncated {
        /// Chunk tag being read.
        chunk: &'static str,
    },
    /// Bytes remain after the face chunk.
    TrailingBytes(usize),
}

impl fmt::Display for KsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::NotTriangulated { polygon, corners } => write!(
                f,
                "polygon {polygon} has {corners} corners, the mesh has not been fully triangulated"
            ),
            Self::VertexOutOfRange {
                polygon,
                vertex,
                vertex_count,
            } => write!(
                f,
                "polygon {polygon} references vertex {vertex}, but the mesh has {vertex_count} vertices"
            ),
            Self::LoopOutOfRange {
                polygon,
                loop_index,
                loop_count,
            } => write!(
                f,
                "polygon {polygon} references loop {loop_index}, but the mesh has {loop_count} loops"
            ),
            Self::TooManyElements { chunk, count } => {
                write!(f, "chunk \"{chunk}\" has {count} elements, limit is {}", i32::MAX)
            }
            Self::BadMagic(found) => write!(
                f,
                "not a ksm file: expected \"_KSM\", found {}",
                show_tag(found)
            ),
            Self::UnexpectedTag { expected, found } => write!(
                f,
                "expected chunk \"{expected}\", found {}",
                show_tag(found)
            ),
            Self::NegativeCount { chunk, count } => {
                write!(f, "chunk \"{chunk}\" declares a negative count ({count})")
            }
            Self::Truncated { chunk } => write!(f, "data ends inside chunk \"{chunk}\""),
            Self::TrailingBytes(n) => write!(f, "{n} unexpected bytes after the face chunk"),
        }
    }
}

impl std::error::Error for KsmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KsmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result alias used throughout the crate.
pub type KsmResult<T> = Result<T, KsmError>;

fn show_tag(tag: &[u8; 4]) -> String {
    if tag.iter().all(|b| b.is_ascii_graphic()) {
        format!("\"{}\"", String::from_utf8_lossy(tag))
    } else {
        format!("{tag:02x?}")
    }
}

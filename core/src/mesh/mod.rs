//! CPU-side mesh accumulation.
//!
//! This module turns triangle corners into indexed vertex data:
//!
//! - [`PolygonMesh`] - Plain-data input reduced from a host application
//! - [`VertexBuilder`] - Allocates vertex slots and merges smooth normals
//! - [`Mesh`] - The accumulated vertex buffers and face list
//!
//! [`build_mesh`] validates a [`PolygonMesh`] and runs it through a builder.
//! [`generators`] produces triangulated test shapes.

mod builder;
mod coincidence;
mod data;
pub mod generators;
mod input;

pub use builder::{BuilderConfig, VertexBuilder};
pub use coincidence::CoincidenceStrategy;
pub use data::{Face, Mesh, VertexSlot};
pub use input::{Polygon, PolygonMesh, Triangle, build_mesh};

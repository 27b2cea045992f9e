//! Reading glTF meshes into polygon input.

use super::{DocumentBuilder, primitive};
use crate::gltf::{GltfError, GltfSourceOptions, load_gltf_polygons};
use crate::mesh::{BuilderConfig, build_mesh};

const QUAD: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
];
const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// One indexed, textured quad as two triangles.
fn indexed_quad() -> DocumentBuilder {
    let mut doc = DocumentBuilder::default();
    let positions = doc.positions(&QUAD);
    let uvs = doc.tex_coords(&QUAD_UVS);
    let indices = doc.indices(&[0, 1, 2, 0, 2, 3]);
    doc.mesh(&[primitive(
        &[("POSITION", positions), ("TEXCOORD_0", uvs)],
        Some(indices),
        4,
    )]);
    doc
}

#[test]
fn test_indexed_glb() {
    let polygons = load_gltf_polygons(&indexed_quad().glb(), &GltfSourceOptions::default()).unwrap();

    assert!(polygons.validate().is_ok());
    assert_eq!(polygons.positions.len(), 4);
    assert_eq!(polygons.polygons.len(), 2);
    assert_eq!(polygons.uvs.len(), 6);
    assert_eq!(polygons.polygons[1].vertices, vec![0, 2, 3]);
    assert_eq!(polygons.polygons[1].loop_start, 3);
    assert_eq!(polygons.uvs[5], [0.0, 0.0]);
    assert_eq!(polygons.uvs[4], [1.0, 0.0]);
    for polygon in &polygons.polygons {
        assert_eq!(polygon.normal, [0.0, 0.0, 1.0]);
        assert!(polygon.smooth);
    }
}

#[test]
fn test_embedded_data_uri() {
    let doc = indexed_quad();
    let from_glb = load_gltf_polygons(&doc.glb(), &GltfSourceOptions::default()).unwrap();
    let from_json = load_gltf_polygons(&doc.embedded(), &GltfSourceOptions::default()).unwrap();
    assert_eq!(from_glb, from_json);
}

#[test]
fn test_flat_option() {
    let options = GltfSourceOptions::default().with_smooth(false);
    let polygons = load_gltf_polygons(&indexed_quad().glb(), &options).unwrap();
    assert!(polygons.polygons.iter().all(|p| !p.smooth));
}

#[test]
fn test_non_indexed_without_uvs() {
    let mut doc = DocumentBuilder::default();
    let positions = doc.positions(&[
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 0.0, 1.0],
        [3.0, 0.0, 0.0],
    ]);
    doc.mesh(&[primitive(&[("POSITION", positions)], None, 4)]);

    let polygons = load_gltf_polygons(&doc.glb(), &GltfSourceOptions::default()).unwrap();
    assert_eq!(polygons.polygons.len(), 2);
    assert_eq!(polygons.polygons[1].vertices, vec![3, 4, 5]);
    assert!(polygons.uvs.iter().all(|uv| *uv == [0.0, 0.0]));
    // (0,0,1) x (1,0,0) points along +Y
    assert_eq!(polygons.polygons[0].normal, [0.0, 1.0, 0.0]);
}

#[test]
fn test_primitives_are_concatenated() {
    let mut doc = DocumentBuilder::default();
    let positions = doc.positions(&QUAD);
    let first = doc.indices(&[0, 1, 2]);
    let second = doc.indices(&[0, 2, 3]);
    doc.mesh(&[
        primitive(&[("POSITION", positions)], Some(first), 4),
        primitive(&[("POSITION", positions)], Some(second), 4),
    ]);

    let polygons = load_gltf_polygons(&doc.glb(), &GltfSourceOptions::default()).unwrap();
    assert_eq!(polygons.positions.len(), 8);
    assert_eq!(polygons.polygons[0].vertices, vec![0, 1, 2]);
    assert_eq!(polygons.polygons[1].vertices, vec![4, 6, 7]);

    let mesh = build_mesh(&polygons, &BuilderConfig::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 6);
    assert!(mesh.normals().iter().all(|n| n.z > 0.999));
}

#[test]
fn test_mesh_selection() {
    let mut doc = indexed_quad();
    let positions = doc.positions(&[[0.0, 0.0, 5.0], [1.0, 0.0, 5.0], [0.0, 1.0, 5.0]]);
    doc.mesh(&[primitive(&[("POSITION", positions)], None, 4)]);
    let glb = doc.glb();

    let second = load_gltf_polygons(&glb, &GltfSourceOptions::default().with_mesh(1)).unwrap();
    assert_eq!(second.polygons.len(), 1);
    assert_eq!(second.positions[0], [0.0, 0.0, 5.0]);

    let err = load_gltf_polygons(&glb, &GltfSourceOptions::default().with_mesh(5)).unwrap_err();
    assert!(matches!(
        err,
        GltfError::MeshNotFound {
            mesh: 5,
            mesh_count: 2
        }
    ));
}

#[test]
fn test_rejects_triangle_strip() {
    let mut doc = DocumentBuilder::default();
    let positions = doc.positions(&QUAD);
    doc.mesh(&[primitive(&[("POSITION", positions)], None, 5)]);

    let err = load_gltf_polygons(&doc.glb(), &GltfSourceOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        GltfError::UnsupportedTopology {
            mesh: 0,
            primitive: 0,
            mode: gltf_dep::mesh::Mode::TriangleStrip
        }
    ));
    assert!(err.to_string().contains("only triangle lists"));
}

#[test]
fn test_rejects_partial_triangle() {
    let mut doc = DocumentBuilder::default();
    let positions = doc.positions(&QUAD);
    let indices = doc.indices(&[0, 1, 2, 3]);
    doc.mesh(&[primitive(&[("POSITION", positions)], Some(indices), 4)]);

    let err = load_gltf_polygons(&doc.glb(), &GltfSourceOptions::default()).unwrap_err();
    assert!(matches!(err, GltfError::AccessorError(_)));
}

#[test]
fn test_rejects_garbage() {
    let err = load_gltf_polygons(b"not a gltf file", &GltfSourceOptions::default()).unwrap_err();
    assert!(matches!(err, GltfError::Parse(_)));
    assert!(std::error::Error::source(&err).is_some());
}

use crate::mesh::{Polygon, PolygonMesh};


/// Two right triangles sharing the edge from (0,0,0) to (0,1,0).
///
/// The first lies in the XY plane facing +Z, the second in the YZ plane
/// facing +X. Shared corners are repeated in `positions`, as an exporter of
/// a split-edge mesh would produce them.
fn hinge(smooth: bool) -> PolygonMesh {
    PolygonMesh {
        positions: vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
        uvs: Vec::new(),
        polygons: vec![
            Polygon::triangle([0, 1, 2], 0, [0.0, 0.0, 1.0], smooth),
            Polygon::triangle([3, 4, 5], 3, [1.0, 0.0, 0.0], smooth),
        ],
    }
}

fn single_triangle(smooth: bool) -> PolygonMesh {
    PolygonMesh {
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        uvs: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
        polygons: vec![Polygon::triangle([0, 1, 2], 0, [0.0, 0.0, 1.0], smooth)],
    }
}

//! Lookup of smooth vertices that share a position.
//!
//! Two strategies return the same overlap sets: a linear scan over all
//! vertices, and a spatial hash keyed on the quantized position. Results are
//! always sorted by vertex index so that normal sums are accumulated in the
//! same order regardless of strategy.

use std::collections::HashMap;

use crate::math::{COINCIDENCE_TOLERANCE, Vec3, is_coincident};

use super::data::Mesh;

/// How [`VertexBuilder`](super::VertexBuilder) finds coincident smooth vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoincidenceStrategy {
    /// Compare against every existing vertex. O(n) per lookup.
    LinearScan,
    /// Bucket smooth vertices on a grid and compare only neighboring cells.
    #[default]
    SpatialHash,
}

/// Grid cell size. Twice the tolerance so that rounding in the division can
/// never push two coincident positions more than one cell apart.
const CELL_SIZE: f64 = 2.0 * COINCIDENCE_TOLERANCE;

type CellKey = (i64, i64, i64);

fn cell_of(position: &Vec3) -> CellKey {
    // `as` saturates on overflow and maps NaN to 0; the exact per-axis test
    // afterwards rejects any false candidates this produces.
    (
        (position.x / CELL_SIZE).floor() as i64,
        (position.y / CELL_SIZE).floor() as i64,
        (position.z / CELL_SIZE).floor() as i64,
    )
}

pub(super) enum CoincidenceIndex {
    LinearScan,
    SpatialHash(HashMap<CellKey, Vec<u32>>),
}

impl CoincidenceIndex {
    pub(super) fn new(strategy: CoincidenceStrategy) -> Self {
        match strategy {
            CoincidenceStrategy::LinearScan => Self::LinearScan,
            CoincidenceStrategy::SpatialHash => Self::SpatialHash(HashMap::new()),
        }
    }

    /// Register a smooth vertex. Flat vertices are never registered.
    pub(super) fn insert(&mut self, index: u32, position: &Vec3) {
        if let Self::SpatialHash(cells) = self {
            cells.entry(cell_of(position)).or_default().push(index);
        }
    }

    /// Indices of all smooth vertices in `mesh` coincident with `position`,
    /// in ascending order.
    pub(super) fn overlapping(&self, mesh: &Mesh, position: &Vec3) -> Vec<u32> {
        match self {
            Self::LinearScan => mesh
                .positions()
                .iter()
                .zip(mesh.smooth_flags())
                .enumerate()
                .filter(|(_, (p, smooth))| **smooth && is_coincident(p, position))
                .map(|(i, _)| i as u32)
                .collect(),
            Self::SpatialHash(cells) => {
                let (cx, cy, cz) = cell_of(position);
                let mut found = Vec::new();
                for dx in -1..=1i64 {
                    for dy in -1..=1i64 {
                        for dz in -1..=1i64 {
                            let key = (
                                cx.saturating_add(dx),
                                cy.saturating_add(dy),
                                cz.saturating_add(dz),
                            );
                            let Some(bucket) = cells.get(&key) else {
                                continue;
                            };
                            found.extend(bucket.iter().copied().filter(|&i| {
                                is_coincident(&mesh.positions()[i as usize], position)
                            }));
                        }
                    }
                }
                // Saturated keys can alias the same cell more than once.
                found.sort_unstable();
                found.dedup();
                found
            }
        }
    }
}

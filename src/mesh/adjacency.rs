//! Triangle-triangle adjacency construction.
//!
//! Builds the `FF` and `FFi` tables a [`TupleNavigator`] runs on from a plain
//! face list:
//!
//! - `FF(f, e)` is the face across local edge `e` of face `f`, or `-1`
//! - `FFi(f, e)` is the local index of the same edge inside `FF(f, e)`, or `-1`
//!
//! [`TupleNavigator`]: super::TupleNavigator

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::index::MeshIndex;
use super::table::{MeshTables, TriTable};
use crate::error::{MeshError, Result};

/// Options for building triangle adjacency.
#[derive(Debug, Clone)]
pub struct AdjacencyOptions {
    /// Leave edges shared by more than two faces as boundary edges instead
    /// of failing (default: false).
    pub allow_non_manifold: bool,

    /// Reject neighbouring faces that traverse their shared edge in the same
    /// direction (default: true).
    ///
    /// The navigator only keeps its active vertex across an edge when the
    /// two faces are consistently oriented.
    pub check_orientation: bool,
}

impl Default for AdjacencyOptions {
    fn default() -> Self {
        Self {
            allow_non_manifold: false,
            check_orientation: true,
        }
    }
}

impl AdjacencyOptions {
    /// Create options that tolerate non-manifold edges.
    pub fn allow_non_manifold(mut self) -> Self {
        self.allow_non_manifold = true;
        self
    }

    /// Create options that accept inconsistently oriented neighbours.
    pub fn skip_orientation_check(mut self) -> Self {
        self.check_orientation = false;
        self
    }
}

/// Owned `FF` / `FFi` tables for a triangle mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleAdjacency<I: MeshIndex = i32> {
    ff: Vec<[I; 3]>,
    ffi: Vec<[I; 3]>,
}

impl<I: MeshIndex> TriangleAdjacency<I> {
    /// Build adjacency tables from triangle faces.
    ///
    /// # Arguments
    /// * `faces` - List of triangle faces, each as [v0, v1, v2] indices
    /// * `options` - Which defects to tolerate
    ///
    /// # Example
    /// ```
    /// use trituple::mesh::{AdjacencyOptions, TriangleAdjacency};
    ///
    /// let faces: Vec<[i32; 3]> = vec![[0, 1, 2], [2, 1, 3]];
    /// let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
    ///
    /// assert_eq!(adjacency.ff(), &[[-1, 1, -1], [0, -1, -1]]);
    /// assert_eq!(adjacency.ffi(), &[[-1, 0, -1], [1, -1, -1]]);
    /// assert_eq!(adjacency.boundary_edge_count(), 4);
    /// ```
    pub fn build(faces: &[[I; 3]], options: &AdjacencyOptions) -> Result<Self> {
        if faces.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi.to_i64() < 0 {
                    return Err(MeshError::InvalidVertexIndex {
                        face: fi,
                        vertex: vi.to_i64(),
                    });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }

        // Undirected edge -> (face, local edge) of every face using it.
        // Ordered, so the first defect reported is the smallest edge.
        let mut edge_map: BTreeMap<(usize, usize), Vec<(usize, usize)>> = BTreeMap::new();
        for (fi, face) in faces.iter().enumerate() {
            for ei in 0..3 {
                let v0 = face[ei].to_usize();
                let v1 = face[(ei + 1) % 3].to_usize();
                edge_map
                    .entry(normalize_edge(v0, v1))
                    .or_default()
                    .push((fi, ei));
            }
        }

        let mut ff = vec![[I::NONE; 3]; faces.len()];
        let mut ffi = vec![[I::NONE; 3]; faces.len()];
        let mut non_manifold = 0usize;

        for (&(v0, v1), incident) in &edge_map {
            match incident.as_slice() {
                [_] => {}
                &[(f0, e0), (f1, e1)] => {
                    if options.check_orientation && faces[f0][e0] == faces[f1][e1] {
                        return Err(MeshError::InconsistentOrientation {
                            face: f0.min(f1),
                            other: f0.max(f1),
                        });
                    }
                    ff[f0][e0] = I::from_usize(f1);
                    ffi[f0][e0] = I::from_usize(e1);
                    ff[f1][e1] = I::from_usize(f0);
                    ffi[f1][e1] = I::from_usize(e0);
                }
                _ => {
                    if !options.allow_non_manifold {
                        return Err(MeshError::NonManifoldEdge { v0, v1 });
                    }
                    non_manifold += 1;
                }
            }
        }

        if non_manifold > 0 {
            warn!(
                edges = non_manifold,
                "non-manifold edges left as boundary edges"
            );
        }

        let adjacency = Self { ff, ffi };
        debug!(
            faces = faces.len(),
            edges = edge_map.len(),
            boundary_edges = adjacency.boundary_edge_count(),
            "built triangle adjacency"
        );
        Ok(adjacency)
    }

    /// The face adjacency table `FF`.
    #[inline]
    pub fn ff(&self) -> &[[I; 3]] {
        &self.ff
    }

    /// The adjacency edge index table `FFi`.
    #[inline]
    pub fn ffi(&self) -> &[[I; 3]] {
        &self.ffi
    }

    /// Number of faces the tables were built for.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.ff.len()
    }

    /// Number of (face, local edge) pairs without a neighbour.
    pub fn boundary_edge_count(&self) -> usize {
        self.ff.iter().flatten().filter(|f| f.is_none()).count()
    }

    /// Bind these tables together with the face list they were built from.
    pub fn tables<'a>(&'a self, faces: impl Into<TriTable<'a, I>>) -> Result<MeshTables<'a, I>> {
        MeshTables::new(faces, self.ff.as_slice(), self.ffi.as_slice())
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: usize, v1: usize) -> (usize, usize) {
    if v0 < v1 {
        (v0, v1)
    } else {
        (v1, v0)
    }
}

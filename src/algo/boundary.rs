//! Per-vertex scans over a whole mesh.
//!
//! Each scan splits the faces around every vertex into wedges (fans joined
//! by shared edges) and walks the one-ring of each wedge with a
//! [`TupleNavigator`]. The navigators share the borrowed tables read-only,
//! so the scans run in parallel by default.
//!
//! # Example
//!
//! ```
//! use trituple::prelude::*;
//! use trituple::algo::boundary::{boundary_vertices, BoundaryOptions};
//!
//! // A quad split into two triangles: every vertex is on the border
//! let faces: Vec<[i32; 3]> = vec![[0, 1, 2], [0, 2, 3]];
//! let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
//! let tables = adjacency.tables(&faces).unwrap();
//!
//! let flags = boundary_vertices(tables, &BoundaryOptions::default());
//! assert_eq!(flags, vec![true; 4]);
//! ```

use rayon::prelude::*;
use tracing::debug;

use crate::mesh::{MeshIndex, MeshTables, TupleNavigator, TupleState};

/// Options for per-vertex scans.
#[derive(Debug, Clone)]
pub struct BoundaryOptions {
    /// Whether to use parallel execution (default: true).
    pub parallel: bool,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl BoundaryOptions {
    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// One tuple per vertex with that vertex as its active vertex.
///
/// The tuple sits on the first corner of the vertex in face order. Vertex
/// ids that no face references get `None`.
pub fn vertex_tuples<I: MeshIndex>(tables: MeshTables<'_, I>) -> Vec<Option<TupleState>> {
    let mut tuples = vec![None; tables.vertex_count()];
    for (face, tri) in tables.faces().iter_rows().enumerate() {
        for (corner, v) in tri.iter().enumerate() {
            let slot = &mut tuples[v.to_usize()];
            if slot.is_none() {
                *slot = Some(TupleState {
                    face,
                    edge: corner,
                    reverse: false,
                    boundary: false,
                });
            }
        }
    }
    tuples
}

/// Flag every vertex that has at least one incident boundary edge.
///
/// Every wedge of faces around the vertex is checked, so a vertex where
/// separate fans touch is classified by all of them. Unreferenced vertex ids
/// are reported as `false`.
pub fn boundary_vertices<I: MeshIndex>(
    tables: MeshTables<'_, I>,
    options: &BoundaryOptions,
) -> Vec<bool> {
    let flags = per_vertex(tables, options, |wedges| {
        wedges.iter().any(|wedge| wedge.start.is_boundary_vertex())
    });
    debug!(
        vertices = flags.len(),
        boundary = flags.iter().filter(|&&b| b).count(),
        "classified boundary vertices"
    );
    flags
}

/// Count the edges incident to every vertex.
///
/// This is the sum of the [`VertexRing`](crate::mesh::VertexRing) lengths
/// over every wedge of faces around the vertex, so boundary edges are
/// counted once and fans touching only at the vertex all contribute.
/// Unreferenced vertex ids get 0.
pub fn vertex_valences<I: MeshIndex>(
    tables: MeshTables<'_, I>,
    options: &BoundaryOptions,
) -> Vec<usize> {
    let valences: Vec<usize> = per_vertex(tables, options, |wedges| {
        wedges.iter().map(|wedge| wedge.ring_len).sum()
    });
    debug!(
        vertices = valences.len(),
        max_valence = valences.iter().copied().max().unwrap_or(0),
        "computed vertex valences"
    );
    valences
}

/// One edge-connected fan of faces around a vertex.
struct Wedge<'a, I: MeshIndex> {
    start: TupleNavigator<'a, I>,
    ring_len: usize,
}

/// Every `(face, corner)` holding each vertex, in face order.
fn vertex_corners<I: MeshIndex>(tables: MeshTables<'_, I>) -> Vec<Vec<(usize, usize)>> {
    let mut corners = vec![Vec::new(); tables.vertex_count()];
    for (face, tri) in tables.faces().iter_rows().enumerate() {
        for (corner, v) in tri.iter().enumerate() {
            corners[v.to_usize()].push((face, corner));
        }
    }
    corners
}

/// Split the corners of one vertex into wedges by walking a ring from each
/// corner no earlier ring has reached.
fn wedges<'a, I: MeshIndex>(
    tables: MeshTables<'a, I>,
    corners: &[(usize, usize)],
) -> Vec<Wedge<'a, I>> {
    let mut reached: Vec<(usize, usize)> = Vec::with_capacity(corners.len());
    let mut wedges = Vec::new();
    for &(face, corner) in corners {
        if reached.contains(&(face, corner)) {
            continue;
        }
        let start = TupleNavigator::new(tables, face, corner);
        let mut ring_len = 0;
        for he in start.ring() {
            reached.push((he.face().index(), he.local_vertex()));
            ring_len += 1;
        }
        wedges.push(Wedge { start, ring_len });
    }
    wedges
}

fn per_vertex<I, T, F>(tables: MeshTables<'_, I>, options: &BoundaryOptions, f: F) -> Vec<T>
where
    I: MeshIndex,
    T: Send,
    F: Fn(&[Wedge<'_, I>]) -> T + Sync,
{
    let corners = vertex_corners(tables);
    let eval = |corners: &Vec<(usize, usize)>| f(wedges(tables, corners).as_slice());

    if options.parallel {
        corners.par_iter().map(eval).collect()
    } else {
        corners.iter().map(eval).collect()
    }
}

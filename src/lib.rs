//! # Trituple
//!
//! Tuple-based navigation over indexed triangle meshes.
//!
//! Trituple walks a triangle mesh directly on top of its face list and
//! triangle-triangle adjacency tables. A navigator is a small `Copy` value
//! holding a face, a local edge and an orientation; every move is O(1) and
//! nothing is allocated.
//!
//! ## Features
//!
//! - **Borrowed tables**: Row-major slices or column-major `nalgebra` matrices
//! - **Flexible indexing**: Support for 16-bit, 32-bit, and 64-bit indices
//! - **Boundary aware**: Virtual half-edges close one-rings across the border
//! - **Adjacency construction**: Build `FF` / `FFi` from a face list
//! - **Parallel scans**: Per-vertex queries over the whole mesh with rayon
//!
//! ## Quick Start
//!
//! ```
//! use trituple::prelude::*;
//!
//! let faces: Vec<[i32; 3]> = vec![
//!     [0, 2, 1], // bottom
//!     [0, 1, 3], // front
//!     [1, 2, 3], // right
//!     [2, 0, 3], // left
//! ];
//!
//! // Build the adjacency tables
//! let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
//! let tables = adjacency.tables(&faces).unwrap();
//!
//! // Walk around vertex 0
//! let nav = TupleNavigator::new(tables, 0, 0);
//! assert_eq!(nav.vertex(), VertexId::new(0));
//! assert!(!nav.is_boundary_vertex());
//!
//! for he in nav.ring() {
//!     println!("Neighbor: {:?}", he.flipped_vertex());
//! }
//! ```
//!
//! ## Elementary Moves
//!
//! ```
//! use trituple::prelude::*;
//!
//! # let faces: Vec<[i32; 3]> = vec![[0, 1, 2], [2, 1, 3]];
//! # let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
//! # let tables = adjacency.tables(&faces).unwrap();
//! let mut nav = TupleNavigator::new(tables, 0, 1);
//! let v = nav.vertex();
//!
//! // Cross the shared edge and come back
//! assert!(nav.flip_face());
//! assert_eq!(nav.face(), FaceId::new(1));
//! assert_eq!(nav.vertex(), v);
//! assert!(nav.flip_face());
//! assert_eq!(nav.face(), FaceId::new(0));
//!
//! // Move to the other end of the edge
//! nav.flip_vertex();
//! assert_ne!(nav.vertex(), v);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use trituple::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::boundary::{boundary_vertices, vertex_valences, BoundaryOptions};
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        AdjacencyOptions, FaceFan, FaceId, FanStep, HalfEdgeEnd, MeshIndex, MeshTables,
        TriTable, TriangleAdjacency, TupleNavigator, TupleState, VertexId, VertexRing,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_tetrahedron() {
        let faces: Vec<[i32; 3]> = vec![
            [0, 2, 1], // bottom
            [0, 1, 3], // front
            [1, 2, 3], // right
            [2, 0, 3], // left
        ];

        let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
        assert_eq!(adjacency.boundary_edge_count(), 0);

        let tables = adjacency.tables(&faces).unwrap();
        tables.validate().unwrap();

        // Closed mesh: every vertex has three neighbours and no border
        let flags = boundary_vertices(tables, &BoundaryOptions::default());
        assert_eq!(flags, vec![false; 4]);
        let valences = vertex_valences(tables, &BoundaryOptions::default());
        assert_eq!(valences, vec![3; 4]);
    }

    #[test]
    fn test_column_major_tables() {
        use nalgebra::DMatrix;

        let faces: DMatrix<i32> = DMatrix::from_row_slice(2, 3, &[0, 1, 2, 2, 1, 3]);
        let ff: DMatrix<i32> = DMatrix::from_row_slice(2, 3, &[-1, 1, -1, 0, -1, -1]);
        let ffi: DMatrix<i32> = DMatrix::from_row_slice(2, 3, &[-1, 0, -1, 1, -1, -1]);

        let tables = MeshTables::new(
            TriTable::from_dmatrix(&faces).unwrap(),
            TriTable::from_dmatrix(&ff).unwrap(),
            TriTable::from_dmatrix(&ffi).unwrap(),
        )
        .unwrap();

        let mut nav = TupleNavigator::new(tables, 0, 1);
        assert!(nav.flip_face());
        assert_eq!(nav.face(), FaceId::new(1));
        assert_eq!(nav.edge(), 0);
    }
}

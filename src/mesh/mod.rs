//! Core mesh navigation types.
//!
//! This module provides the table views and the tuple navigator used to
//! traverse triangle meshes without building a half-edge data structure.
//!
//! # Overview
//!
//! A triangle mesh is described by three `#F x 3` integer tables:
//!
//! - the face list `F`
//! - the face adjacency `FF` ([`TriangleAdjacency`] can build it)
//! - the adjacency edge index `FFi`
//!
//! [`MeshTables`] borrows the three of them, and a [`TupleNavigator`] moves
//! around the mesh on top of that borrow. The navigator never allocates and
//! never touches vertex positions.
//!
//! # Index Types
//!
//! Table entries are generic over a signed integer type ([`MeshIndex`]),
//! so `-1` can mark boundary edges. Values read back from the tables are
//! wrapped in [`VertexId`] and [`FaceId`].
//!
//! # Example
//!
//! ```
//! use trituple::mesh::{AdjacencyOptions, TriangleAdjacency, TupleNavigator};
//!
//! let faces: Vec<[i32; 3]> = vec![[0, 1, 2], [2, 1, 3]];
//! let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
//! let tables = adjacency.tables(&faces).unwrap();
//!
//! let nav = TupleNavigator::new(tables, 0, 0);
//! assert!(nav.is_boundary_vertex());
//! ```

mod adjacency;
mod index;
mod ring;
mod table;
mod tuple;

#[cfg(test)]
pub(crate) mod test_meshes;

pub use adjacency::{AdjacencyOptions, TriangleAdjacency};
pub use index::{FaceId, MeshIndex, VertexId};
pub use ring::{FaceFan, FanStep, VertexRing};
pub use table::{MeshTables, TriTable};
pub use tuple::{HalfEdgeEnd, TupleNavigator, TupleState};

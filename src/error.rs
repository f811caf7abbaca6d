//! Error types for trituple.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building, binding or navigating mesh tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: i64,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An edge has more than two incident faces.
    #[error("edge ({v0}, {v1}) has more than two incident faces")]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
    },

    /// Two faces traverse their shared edge in the same direction.
    #[error("faces {face} and {other} have inconsistent orientation")]
    InconsistentOrientation {
        /// The first face.
        face: usize,
        /// The neighbouring face.
        other: usize,
    },

    /// A table does not have the number of rows the face list has.
    #[error("table {table} has {rows} rows, expected {expected}")]
    TableShape {
        /// Name of the offending table.
        table: &'static str,
        /// Actual row count.
        rows: usize,
        /// Expected row count.
        expected: usize,
    },

    /// A table does not have exactly three columns.
    #[error("table {table} has {cols} columns, expected 3")]
    ColumnCount {
        /// Name of the offending table.
        table: &'static str,
        /// Actual column count.
        cols: usize,
    },

    /// Flat storage does not hold three entries per row.
    #[error("table {table} holds {len} elements, expected {expected}")]
    ElementCount {
        /// Name of the offending table.
        table: &'static str,
        /// Actual element count.
        len: usize,
        /// Element count for three columns.
        expected: usize,
    },

    /// An adjacency entry lies outside its valid range.
    #[error("adjacency entry ({face}, {edge}) = {value} is out of range")]
    AdjacencyOutOfRange {
        /// The face index.
        face: usize,
        /// The local edge index.
        edge: usize,
        /// The offending value.
        value: i64,
    },

    /// Crossing an interior edge and crossing back does not return to it.
    #[error("adjacency mirror broken at face {face}, edge {edge}")]
    BrokenMirror {
        /// The face index.
        face: usize,
        /// The local edge index.
        edge: usize,
    },

    /// A tuple was requested outside the bound tables.
    #[error("tuple (face {face}, edge {edge}) is out of range for {num_faces} faces")]
    TupleOutOfRange {
        /// The requested face.
        face: usize,
        /// The requested local edge.
        edge: usize,
        /// Number of faces in the bound tables.
        num_faces: usize,
    },
}

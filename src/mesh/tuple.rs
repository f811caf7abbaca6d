//! Tuple-based half-edge navigation.
//!
//! A [`TupleNavigator`] walks a triangle mesh using only the face list and
//! the triangle-triangle adjacency tables, without building an explicit
//! half-edge structure. It follows the cell-tuple idea: a position is the
//! tuple `(face, edge, reverse)`, where `edge` is a local edge index in
//! `{0, 1, 2}` and `reverse` selects which endpoint of that edge is the
//! *active vertex*.
//!
//! A fourth flag, `boundary`, marks a *virtual* half-edge: the half-edge
//! that would lie on the far side of a boundary edge if a face existed
//! there. It is only ever set while the current edge is a boundary edge.
//!
//! # Moves
//!
//! Each elementary move changes exactly one element of the tuple:
//!
//! - [`flip_face`](TupleNavigator::flip_face) crosses the current edge
//! - [`flip_edge`](TupleNavigator::flip_edge) switches to the other edge of
//!   the face at the active vertex
//! - [`flip_vertex`](TupleNavigator::flip_vertex) switches the active vertex
//! - [`flip_halfedge`](TupleNavigator::flip_halfedge) crosses the current
//!   edge, falling back to the virtual half-edge on a boundary
//!
//! The compound moves [`next_halfedge`](TupleNavigator::next_halfedge),
//! [`iter_halfedge`](TupleNavigator::iter_halfedge) and
//! [`next_face_edge`](TupleNavigator::next_face_edge) are built from them.
//!
//! # Example
//!
//! ```
//! use trituple::prelude::*;
//!
//! // Two triangles sharing the edge (1, 2)
//! let faces: Vec<[i32; 3]> = vec![[0, 1, 2], [2, 1, 3]];
//! let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
//! let tables = adjacency.tables(&faces).unwrap();
//!
//! let mut nav = TupleNavigator::new(tables, 0, 1);
//! assert_eq!(nav.vertex(), VertexId::new(1));
//!
//! assert!(nav.flip_face());
//! assert_eq!(nav.face(), FaceId::new(1));
//! assert_eq!(nav.vertex(), VertexId::new(1));
//!
//! // Edge 1 of face 1 lies on the border
//! nav.flip_edge();
//! assert_eq!(nav.edge(), 1);
//! assert!(nav.is_boundary_edge());
//! assert!(!nav.flip_face());
//! ```
//!
//! # Termination
//!
//! The search loops inside the compound moves walk around one vertex and
//! stop at a boundary edge or when they return to where they started. On
//! tables that satisfy the mirror invariant this takes at most one step per
//! incident face. Tables that break the invariant can make these loops spin
//! forever; debug builds assert a bound instead. Check untrusted tables with
//! [`MeshTables::validate`] before navigating them.

use std::fmt;

use tracing::trace;

use super::index::{FaceId, MeshIndex, VertexId};
use super::ring::{FaceFan, VertexRing};
use super::table::MeshTables;
use crate::error::{MeshError, Result};

/// The full position of a navigator.
///
/// This is a plain value: it can be stored, compared and restored with
/// [`TupleNavigator::set_state`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TupleState {
    /// Current face index.
    pub face: usize,
    /// Current local edge index in `{0, 1, 2}`.
    pub edge: usize,
    /// Selects which endpoint of the edge is the active vertex.
    pub reverse: bool,
    /// Whether the position is the virtual half-edge across a boundary edge.
    pub boundary: bool,
}

/// Which end of the current half-edge the active vertex sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfEdgeEnd {
    /// The active vertex is where the half-edge starts.
    Start,
    /// The active vertex is where the half-edge ends.
    End,
}

impl TupleState {
    /// The end of the half-edge holding the active vertex.
    ///
    /// `reverse` picks the active vertex and `boundary` swaps the half-edge's
    /// direction, so the two coincide exactly when the flags agree.
    #[inline]
    pub fn active_end(&self) -> HalfEdgeEnd {
        if self.reverse == self.boundary {
            HalfEdgeEnd::Start
        } else {
            HalfEdgeEnd::End
        }
    }
}

/// A cursor over a triangle mesh given by face and adjacency tables.
///
/// The navigator borrows its tables for its whole lifetime and owns nothing
/// else, so it is `Copy` and cheap to snapshot. Any number of navigators may
/// share the same [`MeshTables`], across threads as well.
#[derive(Clone, Copy)]
pub struct TupleNavigator<'a, I: MeshIndex = i32> {
    tables: MeshTables<'a, I>,
    state: TupleState,
}

impl<'a, I: MeshIndex> TupleNavigator<'a, I> {
    /// Create a navigator at `(face, edge)` with `reverse = false`.
    ///
    /// The position is trusted; use [`init`](Self::init) to place a
    /// navigator at an unchecked position.
    ///
    /// # Panics
    /// Debug builds panic if the position is outside the tables.
    pub fn new(tables: MeshTables<'a, I>, face: usize, edge: usize) -> Self {
        Self::with_orientation(tables, face, edge, false)
    }

    /// Create a navigator at `(face, edge, reverse)`.
    pub fn with_orientation(
        tables: MeshTables<'a, I>,
        face: usize,
        edge: usize,
        reverse: bool,
    ) -> Self {
        let nav = Self {
            tables,
            state: TupleState {
                face,
                edge,
                reverse,
                boundary: false,
            },
        };
        nav.debug_check();
        nav
    }

    /// Create a navigator on `tables` at the position of `other`.
    ///
    /// Face, edge and orientation are copied; the virtual boundary flag is
    /// cleared. The caller is responsible for `tables` describing a mesh in
    /// which that position is meaningful.
    pub fn from_position(tables: MeshTables<'a, I>, other: &TupleNavigator<'_, I>) -> Self {
        Self::with_orientation(
            tables,
            other.state.face,
            other.state.edge,
            other.state.reverse,
        )
    }

    /// Move the navigator to `(face, edge, reverse)`.
    ///
    /// This is the only move that validates its input. On failure the state
    /// is left untouched.
    pub fn init(&mut self, face: usize, edge: usize, reverse: bool) -> Result<()> {
        let num_faces = self.tables.num_faces();
        if face >= num_faces || edge > 2 {
            trace!(face, edge, num_faces, "rejected tuple init");
            return Err(MeshError::TupleOutOfRange {
                face,
                edge,
                num_faces,
            });
        }

        self.state = TupleState {
            face,
            edge,
            reverse,
            boundary: false,
        };
        Ok(())
    }

    /// The tables this navigator is bound to.
    #[inline]
    pub fn tables(&self) -> &MeshTables<'a, I> {
        &self.tables
    }

    /// Snapshot the current position.
    #[inline]
    pub fn state(&self) -> TupleState {
        self.state
    }

    /// Restore a position taken with [`state`](Self::state).
    #[inline]
    pub fn set_state(&mut self, state: TupleState) {
        self.state = state;
        self.debug_check();
    }

    /// The end of the current half-edge holding the active vertex.
    #[inline]
    pub fn active_end(&self) -> HalfEdgeEnd {
        self.state.active_end()
    }

    // ==================== Elementary moves ====================

    /// Cross the current edge into the neighbouring face.
    ///
    /// Returns `false` and leaves the state unchanged on a boundary edge.
    /// The half-edge sense always flips when crossing.
    pub fn flip_face(&mut self) -> bool {
        let Some(across) = self.ff_entry() else {
            return false;
        };

        self.state.edge = self
            .tables
            .ffi()
            .get(self.state.face, self.state.edge)
            .to_usize();
        self.state.face = across;
        self.state.reverse = !self.state.reverse;
        self.debug_check();
        true
    }

    /// Switch to the other edge of the current face at the active vertex.
    #[inline]
    pub fn flip_edge(&mut self) {
        self.state.edge = self.flipped_edge();
        self.state.reverse = !self.state.reverse;
        self.state.boundary = false;
        self.debug_check();
    }

    /// Switch the active vertex to the other endpoint of the current edge.
    #[inline]
    pub fn flip_vertex(&mut self) {
        self.state.reverse = !self.state.reverse;
    }

    /// Move to the opposite half-edge.
    ///
    /// Like [`flip_face`](Self::flip_face), but on a boundary edge it toggles
    /// between the real half-edge and the virtual one outside the mesh
    /// instead of failing.
    pub fn flip_halfedge(&mut self) {
        let crossed = self.flip_face();
        self.state.boundary = !crossed && !self.state.boundary;
        self.debug_check();
    }

    // ==================== Compound moves ====================

    /// Move to the next half-edge, whose start is the current half-edge's end.
    ///
    /// Inside a face this is the next edge of the triangle. From a virtual
    /// boundary half-edge it walks through the faces around the end vertex
    /// to the next boundary edge and continues on its virtual half-edge, so
    /// repeated calls trace a boundary loop.
    pub fn next_halfedge(&mut self) {
        if !self.state.boundary {
            self.state.edge = if self.state.edge == 2 {
                0
            } else {
                self.state.edge + 1
            };
            return;
        }

        if self.state.reverse {
            self.flip_vertex();
            self.cross_to_boundary();
            self.flip_halfedge();
        } else {
            self.cross_to_boundary();
            self.flip_halfedge();
            self.flip_vertex();
        }
    }

    /// Move to the next half-edge around the active vertex.
    ///
    /// Virtual boundary half-edges are included, so repeated calls visit
    /// every edge incident to the active vertex once and then return to the
    /// starting position.
    pub fn iter_halfedge(&mut self) {
        match self.active_end() {
            HalfEdgeEnd::End => {
                self.next_halfedge();
                self.flip_vertex();
                self.flip_halfedge();
            }
            HalfEdgeEnd::Start => {
                self.flip_halfedge();
                self.next_halfedge();
                self.flip_vertex();
            }
        }
    }

    /// Move to the next face around the active vertex, skipping the border.
    ///
    /// ```text
    ///      _________
    ///     /\ c | b /\
    ///    /  \  |  /  \
    ///   / d  \ | / a  \
    ///  /______\|/______\
    ///          v
    /// ```
    ///
    /// With `a` and `d` touching the border, repeated calls from `a` visit
    /// `b, c, d, a, b, ...`. Returns `false` for the step that jumps over the
    /// border (from `d` back to `a`) and `true` otherwise.
    pub fn next_face_edge(&mut self) -> bool {
        if self.is_boundary_edge() {
            self.cross_to_boundary();
            self.flip_edge();
            false
        } else {
            self.flip_face();
            self.flip_edge();
            true
        }
    }

    /// Repeat `flip_face; flip_edge` until the current edge is a boundary edge.
    ///
    /// The first iteration always runs, so starting on a boundary edge finds
    /// the next one around the active vertex.
    fn cross_to_boundary(&mut self) {
        let mut steps = 0usize;
        loop {
            self.flip_face();
            self.flip_edge();
            if self.is_boundary_edge() {
                break;
            }
            steps += 1;
            debug_assert!(
                steps <= self.tables.num_faces(),
                "malformed adjacency: no boundary edge found around vertex {:?}",
                self.vertex()
            );
        }
    }

    // ==================== Boundary queries ====================

    /// Check if the current edge is a mesh boundary edge.
    #[inline]
    pub fn is_boundary_edge(&self) -> bool {
        self.ff_entry().is_none()
    }

    /// Check if the navigator sits on a virtual boundary half-edge.
    ///
    /// This is a property of the position, not of the edge: the real
    /// half-edge of a boundary edge reports `false`.
    #[inline]
    pub fn is_boundary_halfedge(&self) -> bool {
        self.state.boundary
    }

    /// Check if any edge incident to the active vertex is a boundary edge.
    ///
    /// Walks the one-ring of the active vertex, so this costs O(valence).
    pub fn is_boundary_vertex(&self) -> bool {
        let mut iter = self.ring_start();
        let end = iter;
        let limit = self.ring_limit();
        let mut steps = 0usize;

        loop {
            if iter.is_boundary_edge() {
                return true;
            }
            iter.iter_halfedge();
            if iter == end {
                return false;
            }
            steps += 1;
            debug_assert!(
                steps <= limit,
                "malformed adjacency: one-ring of vertex {:?} does not close",
                self.vertex()
            );
        }
    }

    /// Iterate over every half-edge around the active vertex.
    ///
    /// See [`VertexRing`].
    pub fn ring(&self) -> VertexRing<'a, I> {
        VertexRing::new(*self)
    }

    /// Iterate over the faces around the active vertex, skipping the border.
    ///
    /// See [`FaceFan`].
    pub fn fan(&self) -> FaceFan<'a, I> {
        FaceFan::new(*self)
    }

    /// A copy placed where one-ring walks begin: the active vertex at the
    /// start of the half-edge.
    pub(crate) fn ring_start(&self) -> Self {
        let mut start = *self;
        if start.active_end() == HalfEdgeEnd::End {
            start.flip_halfedge();
        }
        start
    }

    /// Upper bound on the positions of any one-ring in these tables.
    pub(crate) fn ring_limit(&self) -> usize {
        2 * self.tables.num_faces() + 2
    }

    // ==================== Index accessors ====================

    /// Local index (in the current face) of the active vertex.
    #[inline]
    pub fn local_vertex(&self) -> usize {
        if self.state.reverse {
            (self.state.edge + 1) % 3
        } else {
            self.state.edge
        }
    }

    /// The active vertex.
    #[inline]
    pub fn vertex(&self) -> VertexId {
        self.face_vertex(self.local_vertex())
    }

    /// Local index of the other endpoint of the current edge.
    #[inline]
    pub fn flipped_local_vertex(&self) -> usize {
        if self.state.reverse {
            self.state.edge
        } else {
            (self.state.edge + 1) % 3
        }
    }

    /// The other endpoint of the current edge.
    #[inline]
    pub fn flipped_vertex(&self) -> VertexId {
        self.face_vertex(self.flipped_local_vertex())
    }

    /// Local index of the vertex where the current half-edge starts.
    #[inline]
    pub fn local_start(&self) -> usize {
        if self.state.boundary {
            (self.state.edge + 1) % 3
        } else {
            self.state.edge
        }
    }

    /// The vertex where the current half-edge starts.
    #[inline]
    pub fn start_vertex(&self) -> VertexId {
        self.face_vertex(self.local_start())
    }

    /// Local index of the vertex where the current half-edge ends.
    #[inline]
    pub fn local_end(&self) -> usize {
        if self.state.boundary {
            self.state.edge
        } else {
            (self.state.edge + 1) % 3
        }
    }

    /// The vertex where the current half-edge ends.
    #[inline]
    pub fn end_vertex(&self) -> VertexId {
        self.face_vertex(self.local_end())
    }

    /// The current local edge index.
    #[inline]
    pub fn edge(&self) -> usize {
        self.state.edge
    }

    /// The local index of the edge [`flip_edge`](Self::flip_edge) moves to.
    #[inline]
    pub fn flipped_edge(&self) -> usize {
        if self.state.reverse {
            (self.state.edge + 1) % 3
        } else {
            (self.state.edge + 2) % 3
        }
    }

    /// The local index the neighbouring face uses for the current edge.
    ///
    /// `None` on a boundary edge.
    #[inline]
    pub fn opposite_edge(&self) -> Option<usize> {
        self.tables
            .ffi()
            .get(self.state.face, self.state.edge)
            .to_option()
    }

    /// The current face.
    #[inline]
    pub fn face(&self) -> FaceId {
        FaceId::new(self.state.face)
    }

    /// The face across the current edge, `None` on a boundary edge.
    #[inline]
    pub fn flipped_face(&self) -> Option<FaceId> {
        self.ff_entry().map(FaceId::new)
    }

    #[inline]
    fn ff_entry(&self) -> Option<usize> {
        self.tables
            .ff()
            .get(self.state.face, self.state.edge)
            .to_option()
    }

    #[inline]
    fn face_vertex(&self, local: usize) -> VertexId {
        VertexId::new(self.tables.faces().get(self.state.face, local).to_usize())
    }

    #[inline]
    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            let TupleState {
                face,
                edge,
                boundary,
                ..
            } = self.state;
            debug_assert!(
                face < self.tables.num_faces(),
                "face {} out of range for {} faces",
                face,
                self.tables.num_faces()
            );
            debug_assert!(edge < 3, "local edge {} out of range", edge);
            debug_assert!(
                !boundary || self.is_boundary_edge(),
                "virtual half-edge on interior edge ({}, {})",
                face,
                edge
            );
            let expected = match self.active_end() {
                HalfEdgeEnd::Start => self.local_start(),
                HalfEdgeEnd::End => self.local_end(),
            };
            debug_assert_eq!(self.local_vertex(), expected);
        }
    }
}

impl<I: MeshIndex> PartialEq for TupleNavigator<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.tables.same_tables(&other.tables)
    }
}

impl<I: MeshIndex> Eq for TupleNavigator<'_, I> {}

impl<I: MeshIndex> fmt::Debug for TupleNavigator<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TupleNavigator")
            .field("face", &self.state.face)
            .field("edge", &self.state.edge)
            .field("reverse", &self.state.reverse)
            .field("boundary", &self.state.boundary)
            .finish()
    }
}

//! Iterators around a vertex.
//!
//! Both iterators start from a [`TupleNavigator`] and circulate around its
//! active vertex until they come back to where they began:
//!
//! - [`VertexRing`] visits every incident half-edge, including the virtual
//!   half-edges across boundary edges
//! - [`FaceFan`] visits the incident faces, jumping over the border

use super::index::{FaceId, MeshIndex};
use super::tuple::{TupleNavigator, TupleState};

/// Iterator over the half-edges around a vertex.
///
/// Yields one navigator per edge incident to the active vertex within its
/// wedge (the faces reachable from the start by crossing edges at that
/// vertex), each with that vertex at the start of its half-edge. Fans that
/// touch the vertex without sharing an edge with the wedge are not visited.
/// The neighbour across each edge is
/// [`flipped_vertex`](TupleNavigator::flipped_vertex).
///
/// # Example
/// ```
/// use trituple::prelude::*;
///
/// // A single triangle: every vertex has two incident edges
/// let faces: Vec<[i32; 3]> = vec![[0, 1, 2]];
/// let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
/// let tables = adjacency.tables(&faces).unwrap();
///
/// let nav = TupleNavigator::new(tables, 0, 0);
/// let neighbors: Vec<VertexId> = nav.ring().map(|he| he.flipped_vertex()).collect();
/// assert_eq!(neighbors, vec![VertexId::new(1), VertexId::new(2)]);
/// ```
#[derive(Debug, Clone)]
pub struct VertexRing<'a, I: MeshIndex = i32> {
    current: TupleNavigator<'a, I>,
    start: TupleState,
    limit: usize,
    steps: usize,
    done: bool,
}

impl<'a, I: MeshIndex> VertexRing<'a, I> {
    pub(crate) fn new(nav: TupleNavigator<'a, I>) -> Self {
        let current = nav.ring_start();
        Self {
            start: current.state(),
            limit: current.ring_limit(),
            current,
            steps: 0,
            done: false,
        }
    }
}

impl<'a, I: MeshIndex> Iterator for VertexRing<'a, I> {
    type Item = TupleNavigator<'a, I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current.iter_halfedge();
        self.steps += 1;
        debug_assert!(
            self.steps <= self.limit,
            "malformed adjacency: one-ring of vertex {:?} does not close",
            result.vertex()
        );

        if self.current.state() == self.start {
            self.done = true;
        }

        Some(result)
    }
}

/// One step of a [`FaceFan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanStep {
    /// The face reached by this step.
    pub face: FaceId,
    /// `false` if the step jumped over the border to get there.
    pub crossed: bool,
}

/// Iterator over the faces around a vertex, skipping the border.
///
/// Each item is one [`next_face_edge`](TupleNavigator::next_face_edge)
/// step. Iteration ends once the navigator is back at its starting
/// position, so the last item is the starting face.
#[derive(Debug, Clone)]
pub struct FaceFan<'a, I: MeshIndex = i32> {
    current: TupleNavigator<'a, I>,
    start: TupleState,
    limit: usize,
    steps: usize,
    done: bool,
}

impl<'a, I: MeshIndex> FaceFan<'a, I> {
    pub(crate) fn new(nav: TupleNavigator<'a, I>) -> Self {
        Self {
            start: nav.state(),
            limit: nav.tables().num_faces(),
            current: nav,
            steps: 0,
            done: false,
        }
    }

    /// The navigator at the position reached so far.
    pub fn position(&self) -> &TupleNavigator<'a, I> {
        &self.current
    }
}

impl<I: MeshIndex> Iterator for FaceFan<'_, I> {
    type Item = FanStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let crossed = self.current.next_face_edge();
        self.steps += 1;
        debug_assert!(
            self.steps <= self.limit,
            "malformed adjacency: face fan of vertex {:?} does not close",
            self.current.vertex()
        );

        if self.current.state() == self.start {
            self.done = true;
        }

        Some(FanStep {
            face: self.current.face(),
            crossed,
        })
    }
}

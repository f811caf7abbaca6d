//! Small meshes shared by the unit tests.

use std::collections::BTreeSet;

use super::adjacency::{AdjacencyOptions, TriangleAdjacency};
use super::table::MeshTables;

/// A face list together with its adjacency tables.
#[derive(Debug, Clone)]
pub(crate) struct Fixture {
    pub faces: Vec<[i32; 3]>,
    pub ff: Vec<[i32; 3]>,
    pub ffi: Vec<[i32; 3]>,
}

impl Fixture {
    pub fn from_faces(faces: Vec<[i32; 3]>) -> Self {
        let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
        Self {
            ff: adjacency.ff().to_vec(),
            ffi: adjacency.ffi().to_vec(),
            faces,
        }
    }

    pub fn tables(&self) -> MeshTables<'_, i32> {
        MeshTables::new(&self.faces, &self.ff, &self.ffi).unwrap()
    }

    /// The first `(face, corner)` holding vertex `v`.
    pub fn first_corner(&self, v: i32) -> (usize, usize) {
        self.faces
            .iter()
            .enumerate()
            .find_map(|(f, tri)| tri.iter().position(|&x| x == v).map(|c| (f, c)))
            .unwrap()
    }

    /// Vertices sharing an edge with `v`.
    pub fn neighbors(&self, v: i32) -> BTreeSet<usize> {
        self.faces
            .iter()
            .filter(|tri| tri.contains(&v))
            .flat_map(|tri| tri.iter().copied())
            .filter(|&x| x != v)
            .map(|x| x as usize)
            .collect()
    }
}

/// Two triangles sharing the edge (1, 2).
pub(crate) fn two_triangles() -> Fixture {
    Fixture::from_faces(vec![[0, 1, 2], [2, 1, 3]])
}

/// One triangle with no neighbours.
pub(crate) fn isolated_triangle() -> Fixture {
    Fixture::from_faces(vec![[0, 1, 2]])
}

/// Four triangles fanned around vertex 0.
///
/// ```text
///      4____3____2
///      /\ c | b /\
///     /  \  |  /  \
///    / d  \ | / a  \
///   /______\|/______\
///  5        0        1
/// ```
///
/// Faces `a, b, c, d` are 0..4; the edges (0, 1) and (5, 0) are on the border.
pub(crate) fn fan() -> Fixture {
    Fixture::from_faces(vec![[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 5]])
}

/// A `w x h` quad grid split into counter-clockwise triangles.
///
/// Vertex `(i, j)` has index `j * (w + 1) + i`.
pub(crate) fn grid(w: usize, h: usize) -> Fixture {
    Fixture::from_faces(grid_faces(w, h))
}

pub(crate) fn grid_faces(w: usize, h: usize) -> Vec<[i32; 3]> {
    let mut faces = Vec::with_capacity(w * h * 2);
    for j in 0..h {
        for i in 0..w {
            let v00 = (j * (w + 1) + i) as i32;
            let v10 = v00 + 1;
            let v01 = v00 + (w + 1) as i32;
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }
    faces
}

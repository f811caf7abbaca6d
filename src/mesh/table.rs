//! Read-only table views.
//!
//! A [`TriTable`] is a borrowed `#rows x 3` integer table. It can sit on top of
//! row-major storage (`&[[I; 3]]`) or on top of column-major storage such as a
//! nalgebra `OMatrix<I, Dyn, U3>`, without copying.
//!
//! [`MeshTables`] bundles the three tables a [`TupleNavigator`] needs:
//!
//! - `F`: the face list, one row of vertex indices per triangle
//! - `FF`: the face across each local edge, or `-1` on a boundary edge
//! - `FFi`: the local edge index the neighbouring face uses for that edge
//!
//! Local edge `e` of face `f` joins `F(f, e)` and `F(f, (e + 1) % 3)`.
//!
//! [`TupleNavigator`]: super::TupleNavigator

use std::fmt;

use nalgebra::{DMatrix, Dyn, OMatrix, U3};

use super::index::MeshIndex;
use crate::error::{MeshError, Result};

#[derive(Clone, Copy)]
enum Layout<'a, I> {
    Rows(&'a [[I; 3]]),
    Columns { data: &'a [I], rows: usize },
}

/// A borrowed, read-only `#rows x 3` table of mesh indices.
#[derive(Clone, Copy)]
pub struct TriTable<'a, I> {
    layout: Layout<'a, I>,
}

impl<'a, I: MeshIndex> TriTable<'a, I> {
    /// View row-major storage.
    pub fn from_rows(rows: &'a [[I; 3]]) -> Self {
        Self {
            layout: Layout::Rows(rows),
        }
    }

    /// View column-major storage holding `rows` rows.
    ///
    /// Fails if `data` does not hold exactly `3 * rows` elements.
    pub fn from_column_major(data: &'a [I], rows: usize) -> Result<Self> {
        if data.len() != rows * 3 {
            return Err(MeshError::ElementCount {
                table: "column-major",
                len: data.len(),
                expected: rows * 3,
            });
        }
        Ok(Self {
            layout: Layout::Columns { data, rows },
        })
    }

    /// View a dynamically sized nalgebra matrix, which must have 3 columns.
    pub fn from_dmatrix(matrix: &'a DMatrix<I>) -> Result<Self> {
        if matrix.ncols() != 3 {
            return Err(MeshError::ColumnCount {
                table: "matrix",
                cols: matrix.ncols(),
            });
        }
        Ok(Self {
            layout: Layout::Columns {
                data: matrix.as_slice(),
                rows: matrix.nrows(),
            },
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        match self.layout {
            Layout::Rows(rows) => rows.len(),
            Layout::Columns { rows, .. } => rows,
        }
    }

    /// Check if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    /// Get entry `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()` or `col >= 3`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> I {
        match self.layout {
            Layout::Rows(rows) => rows[row][col],
            Layout::Columns { data, rows } => {
                assert!(col < 3, "column {} out of range", col);
                assert!(row < rows, "row {} out of range", row);
                data[col * rows + row]
            }
        }
    }

    /// Get a full row.
    #[inline]
    pub fn row(&self, row: usize) -> [I; 3] {
        [self.get(row, 0), self.get(row, 1), self.get(row, 2)]
    }

    /// Iterate over all rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = [I; 3]> + '_ {
        (0..self.rows()).map(move |r| self.row(r))
    }

    /// Check whether both views sit on the very same storage.
    ///
    /// This is identity, not value equality: two tables holding equal values
    /// in different buffers are not the same source.
    pub fn same_source(&self, other: &Self) -> bool {
        match (self.layout, other.layout) {
            (Layout::Rows(a), Layout::Rows(b)) => {
                std::ptr::eq(a.as_ptr(), b.as_ptr()) && a.len() == b.len()
            }
            (Layout::Columns { data: a, rows: ra }, Layout::Columns { data: b, rows: rb }) => {
                std::ptr::eq(a.as_ptr(), b.as_ptr()) && ra == rb
            }
            _ => false,
        }
    }
}

impl<I: MeshIndex> fmt::Debug for TriTable<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = match self.layout {
            Layout::Rows(_) => "rows",
            Layout::Columns { .. } => "columns",
        };
        f.debug_struct("TriTable")
            .field("rows", &self.rows())
            .field("layout", &layout)
            .finish()
    }
}

impl<'a, I: MeshIndex> From<&'a [[I; 3]]> for TriTable<'a, I> {
    fn from(rows: &'a [[I; 3]]) -> Self {
        Self::from_rows(rows)
    }
}

impl<'a, I: MeshIndex> From<&'a Vec<[I; 3]>> for TriTable<'a, I> {
    fn from(rows: &'a Vec<[I; 3]>) -> Self {
        Self::from_rows(rows.as_slice())
    }
}

impl<'a, I: MeshIndex> From<&'a OMatrix<I, Dyn, U3>> for TriTable<'a, I> {
    fn from(matrix: &'a OMatrix<I, Dyn, U3>) -> Self {
        Self {
            layout: Layout::Columns {
                data: matrix.as_slice(),
                rows: matrix.nrows(),
            },
        }
    }
}

/// The face, face-adjacency and adjacency-edge-index tables of one mesh.
///
/// The tables are borrowed; the lifetime `'a` ties every navigator built on
/// them to the caller's storage.
#[derive(Clone, Copy, Debug)]
pub struct MeshTables<'a, I: MeshIndex = i32> {
    faces: TriTable<'a, I>,
    ff: TriTable<'a, I>,
    ffi: TriTable<'a, I>,
}

impl<'a, I: MeshIndex> MeshTables<'a, I> {
    /// Bind a face list and its adjacency tables.
    ///
    /// Only the row counts are checked here. Use [`MeshTables::validate`] to
    /// check the adjacency contents.
    ///
    /// # Example
    /// ```
    /// use trituple::mesh::MeshTables;
    ///
    /// let faces: Vec<[i32; 3]> = vec![[0, 1, 2], [2, 1, 3]];
    /// let ff: Vec<[i32; 3]> = vec![[-1, 1, -1], [0, -1, -1]];
    /// let ffi: Vec<[i32; 3]> = vec![[-1, 0, -1], [1, -1, -1]];
    ///
    /// let tables = MeshTables::new(&faces, &ff, &ffi).unwrap();
    /// assert_eq!(tables.num_faces(), 2);
    /// assert!(tables.validate().is_ok());
    /// ```
    pub fn new(
        faces: impl Into<TriTable<'a, I>>,
        ff: impl Into<TriTable<'a, I>>,
        ffi: impl Into<TriTable<'a, I>>,
    ) -> Result<Self> {
        let faces = faces.into();
        let ff = ff.into();
        let ffi = ffi.into();

        let expected = faces.rows();
        for (table, view) in [("FF", &ff), ("FFi", &ffi)] {
            if view.rows() != expected {
                return Err(MeshError::TableShape {
                    table,
                    rows: view.rows(),
                    expected,
                });
            }
        }

        Ok(Self { faces, ff, ffi })
    }

    /// The face table `F`.
    #[inline]
    pub fn faces(&self) -> &TriTable<'a, I> {
        &self.faces
    }

    /// The face adjacency table `FF`.
    #[inline]
    pub fn ff(&self) -> &TriTable<'a, I> {
        &self.ff
    }

    /// The adjacency edge index table `FFi`.
    #[inline]
    pub fn ffi(&self) -> &TriTable<'a, I> {
        &self.ffi
    }

    /// Number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.rows()
    }

    /// Number of vertex ids referenced by the face table (largest index + 1).
    pub fn vertex_count(&self) -> usize {
        self.faces
            .iter_rows()
            .flatten()
            .map(|v| v.to_usize() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Check whether both triples are bound to the same storage.
    pub fn same_tables(&self, other: &Self) -> bool {
        self.faces.same_source(&other.faces)
            && self.ff.same_source(&other.ff)
            && self.ffi.same_source(&other.ffi)
    }

    /// Check the adjacency tables against the face list.
    ///
    /// Verifies that every `F` entry is a non-negative vertex index, that
    /// every `FF` entry is `-1` or a face index, that interior `FFi` entries
    /// are local edge indices, and that crossing an interior edge and
    /// crossing back returns to the same face and edge.
    pub fn validate(&self) -> Result<()> {
        let num_faces = self.num_faces();

        for face in 0..num_faces {
            for vertex in self.faces.row(face) {
                if vertex.to_i64() < 0 {
                    return Err(MeshError::InvalidVertexIndex {
                        face,
                        vertex: vertex.to_i64(),
                    });
                }
            }

            for edge in 0..3 {
                let across = self.ff.get(face, edge);
                if across.is_none() {
                    continue;
                }
                if across.to_i64() < 0 || across.to_i64() >= num_faces as i64 {
                    return Err(MeshError::AdjacencyOutOfRange {
                        face,
                        edge,
                        value: across.to_i64(),
                    });
                }

                let mirror = self.ffi.get(face, edge);
                if !(0..3).contains(&mirror.to_i64()) {
                    return Err(MeshError::AdjacencyOutOfRange {
                        face,
                        edge,
                        value: mirror.to_i64(),
                    });
                }

                let (g, h) = (across.to_usize(), mirror.to_usize());
                let back = self.ff.get(g, h);
                if back.is_none()
                    || back.to_usize() != face
                    || self.ffi.get(g, h).to_i64() != edge as i64
                {
                    return Err(MeshError::BrokenMirror { face, edge });
                }
            }
        }

        Ok(())
    }
}

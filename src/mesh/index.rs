//! Index types for mesh tables.
//!
//! Adjacency tables store signed integers so that a boundary edge can be
//! marked with the sentinel `-1`. The element type is generic so callers can
//! pick the width that matches their storage (`i16` for small meshes, `i32`
//! for typical meshes, `i64`/`isize` for massive ones).
//!
//! Values read out of the tables are surfaced as type-safe [`VertexId`] and
//! [`FaceId`] wrappers.

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for integer types that can be stored in face and adjacency tables.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static
{
    /// The boundary sentinel (`-1`).
    const NONE: Self;

    /// Convert from usize to this index type.
    ///
    /// # Panics
    /// Panics in debug builds if the value is too large for this index type.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    ///
    /// Negative values are a caller error; debug builds assert against them.
    fn to_usize(self) -> usize;

    /// Widen to `i64`, keeping the sign (used for error reporting).
    fn to_i64(self) -> i64;

    /// Check if this is the boundary sentinel.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// `None` for the sentinel, the value as `usize` otherwise.
    #[inline]
    fn to_option(self) -> Option<usize> {
        if self.is_none() {
            None
        } else {
            Some(self.to_usize())
        }
    }
}

macro_rules! impl_mesh_index {
    ($($ty:ty),*) => {
        $(
            impl MeshIndex for $ty {
                const NONE: Self = -1;

                #[inline]
                fn from_usize(v: usize) -> Self {
                    debug_assert!(
                        v <= <$ty>::MAX as usize,
                        "index {} too large for {}",
                        v,
                        stringify!($ty)
                    );
                    v as $ty
                }

                #[inline]
                fn to_usize(self) -> usize {
                    debug_assert!(self >= 0, "negative index {} used as position", self);
                    self as usize
                }

                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

impl_mesh_index!(i16, i32, i64, isize);

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(usize);

/// A type-safe face index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(usize);

macro_rules! impl_id_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new id from a raw value.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_id_type!(VertexId, "V");
impl_id_type!(FaceId, "F");

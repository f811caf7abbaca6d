//! Whole-mesh algorithms built on the tuple navigator.
//!
//! - **Boundary**: Boundary vertex classification and vertex valences

pub mod boundary;

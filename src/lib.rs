/*!
tetragrav
========

**tetragrav** interpolates a spatially-varying gravity field across tetrahedral
cells, using barycentric coordinates, with the rust programming language.

A [`GravityCell`](shape::GravityCell) is built from four [`GravityPoint`](shape::GravityPoint)
samples. It caches the affine transform from cartesian to barycentric coordinates so that
containment tests and gravity interpolation are a single matrix-vector product away.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive. Depend on `tetragrav-f64` for double precision.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod debug;
pub mod shape;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Matrix4, Point3, Vector3, Vector4};

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The number of vertices of a tetrahedron, i.e., the number of barycentric coordinates.
    pub const NUM_VERTICES: usize = DIM + 1;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The barycentric coordinates type.
    ///
    /// Its `i`-th component is the weight of the `i`-th vertex of a tetrahedron.
    pub type BarycentricCoordinates = Vector4<Real>;

    /// The matrix type mapping homogeneous cartesian coordinates to barycentric coordinates.
    pub type BarycentricTransform = Matrix4<Real>;
}

//! Fixed-dimension real vectors.
//!
//! [`FixedVector<N>`] stores `N` `f64` components inline and supports the
//! usual linear-algebra operations: componentwise arithmetic, scaling, dot
//! product, norm and normalization, and the 3D cross product. Named
//! operations are the primary API; the operators wrap them:
//!
//! | operation | named | operator |
//! |-----------|-------|----------|
//! | scale     | `v.scale(s)` | `v * s`, `s * v` |
//! | dot       | `v.dot(&w)` | `v * w` |
//! | cross     | `u.cross(&v)?` | `u ^ v` (3D only) |
//!
//! Structs with named `f64` fields can opt into the same arithmetic with
//! `#[derive(NamedComponents)]` (feature `derive`, on by default).

mod error;
mod interop;
mod named;
mod ops;
mod vector;

pub use error::VectorError;
pub use named::NamedComponents;
pub use vector::FixedVector;

#[cfg(feature = "derive")]
pub use fixed_vector_derive::NamedComponents;

//! A small linear algebra library for 3D transformation pipelines.
//!
//! This crate provides exactly two data shapes and the operations a rendering or geometry layer
//! needs to push points through a transform stack:
//!
//! - [`Vector<T, N>`]: a fixed-arity column vector (arity is part of the type, typically 2–4),
//!   with construction, copying, indexing (including Python-style negative indexing via
//!   [`Vector::at`]), element-wise arithmetic, dot product, and Euclidean length.
//! - [`Mat4<T>`]: a 4x4 homogeneous transform matrix. 4x4 is the *only* supported matrix size;
//!   shorter vectors are handled by implicit homogeneous extension instead of smaller matrix
//!   types. Construction (identity by default), matrix-vector and matrix-matrix multiplication,
//!   homogeneous point transforms with perspective divide, and planar rotation constructors are
//!   provided.
//!
//! Out of scope by design: arbitrary-dimension matrices, inversion and decompositions, SIMD, and
//! serialization.
//!
//! # Conventions
//!
//! - **Column vectors.** Transforms apply by left-multiplication, and composed transforms apply
//!   right-to-left: `m3 * m2 * m1 * v` runs `m1` first.
//! - **Mutation is structural.** Operations that mutate their receiver are exactly the `*Assign`
//!   operators and require `&mut` access; everything else takes read-only/by-value operands and
//!   returns a fresh value. There is no naming convention to remember and no way to mutate
//!   through a shared reference.
//!
//! # Preconditions, not errors
//!
//! Nothing in this crate performs I/O or can partially fail, so no operation returns [`Result`].
//! The remaining failure modes are caller contract violations, which fail fast instead of being
//! silently "fixed":
//!
//! - vector indices outside `[-N, N)` — a negative index is adjusted exactly once and never
//!   re-wrapped ([`Vector::at`]);
//! - rotation plane axes that are equal or outside `[0, 4)` ([`Mat4::rotation`]);
//! - element-wise operations on mismatched arities, which the type system rejects outright.
//!
//! # Thread safety
//!
//! All values here are plain `Copy` data. Distinct values can be used from any number of threads;
//! mutating shared state requires `&mut` and is thereby subject to the usual aliasing rules, so
//! there is nothing for this crate to guard.

pub mod approx;
mod matrix;
mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;

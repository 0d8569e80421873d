//! # sl3
//!
//! This library provides a minimal-parameter representation for planar projective
//! transforms (homographies) using the lie algebra of the special linear group of
//! 3×3 matrices, SL(3).
//!
//! A raw homography matrix has 9 entries but only 8 true degrees of freedom, since
//! it is defined up to scale. Optimizing over all 9 entries is rank-deficient and
//! ill-conditioned. Instead, this crate maps an unconstrained 8-vector [`Sl3`]
//! (the free coordinates of a traceless 3×3 matrix) onto a unit-determinant
//! [`Homography`] through the matrix exponential, and approximately back through
//! the principal matrix logarithm:
//!
//! ```text
//! 8-vector --hat--> traceless matrix --exp--> raw matrix --normalize--> SL(3)
//! 8-vector <--vee-- principal log   <--------------------normalize <-- SL(3)
//! ```
//!
//! The exponential direction is total for finite input. The logarithm direction is
//! only an approximate inverse: the matrix logarithm is multivalued, and the
//! principal branch returned here coincides with the originating algebra element
//! only when that element is small enough that no eigenvalue argument wraps
//! around. Callers that need exact round trips must keep their algebra elements
//! small; this is a documented limitation, not a recoverable error.
//!
//! The intended use is as the inner parameterization of a nonlinear least-squares
//! refinement, where the optimizer walks the unconstrained 8-vector and every
//! candidate is mapped into SL(3) before projecting points.

mod algebra;
mod homography;
mod logm;
mod matches;
mod point;

pub use algebra::*;
pub use homography::*;
pub use logm::*;
pub use matches::*;
pub use nalgebra;
pub use point::*;
pub use sample_consensus;

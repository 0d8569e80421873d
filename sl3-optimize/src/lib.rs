//! Nonlinear refinement of a planar homography from point correspondences.
//!
//! The optimizer walks an unconstrained [`sl3::Sl3`] 8-vector; every candidate
//! is mapped into SL(3) through the exponential map before projecting the
//! source points, so rank deficiency of the raw 9-entry matrix never enters the
//! normal equations. The cost driven to a minimum is the flattened per-point
//! reprojection residual against the target points.

mod homography_optimizer;

pub use homography_optimizer::*;

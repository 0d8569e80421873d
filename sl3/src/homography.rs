use crate::{principal_log, PlanarPoint, PointMatch, Projective, Sl3};
use core::ops::Mul;
use derive_more::{AsMut, AsRef, From, Into};
use nalgebra::Matrix3;
use sample_consensus::Model;

/// This contains a planar projective transform, stored as its unit-determinant
/// representative in SL(3).
///
/// Two matrices that differ by a non-zero scalar multiple describe the same
/// geometric transform; of each such family, only the unit-determinant member is
/// canonical in this parameterization, and [`Homography::from_matrix`] rescales
/// any representative onto it. The matrix maps homogeneous source coordinates to
/// homogeneous target coordinates, so transformed points generally need to be
/// dehomogenized before comparison.
#[derive(Debug, Clone, Copy, PartialEq, AsMut, AsRef, From, Into)]
pub struct Homography(pub Matrix3<f64>);

impl Homography {
    /// Creates a homography with no effect on any point.
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Rescales a matrix to its unit-determinant representative.
    ///
    /// The determinant is a homogeneous function, `det(s * H) = s³ * det(H)`, so
    /// scaling by `s = det(H)^(-1/3)` yields a determinant of one. The real cube
    /// root is used, which takes the negative branch for a negative determinant
    /// rather than leaving the reals. A zero determinant has no valid scale; the
    /// resulting matrix entries become non-finite and poison any computation
    /// performed with them, rather than being silently replaced.
    pub fn from_matrix(mat: Matrix3<f64>) -> Self {
        let s = mat.determinant().cbrt().recip();
        Self(mat * s)
    }

    /// Retrieve the unit-determinant matrix.
    pub fn matrix(self) -> Matrix3<f64> {
        self.into()
    }

    /// Takes the inverse of the transform.
    ///
    /// A unit-determinant matrix is always invertible; an inverse can only fail
    /// to exist for a homography whose entries were already poisoned (see
    /// [`Homography::from_matrix`]), in which case the poison is propagated.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self(
            self.0
                .try_inverse()
                .unwrap_or_else(|| Matrix3::repeat(f64::NAN)),
        )
    }

    /// Retrieve the sl(3) representation of the homography.
    ///
    /// This is the logarithm map. The input does not need to be normalized; the
    /// unit-determinant representative is taken first. Returns `None` when no
    /// real principal logarithm exists, which cannot happen for outputs of
    /// [`Homography::from_sl3`] with small algebra elements but can happen for
    /// arbitrary matrices (for example those with negative real eigenvalues).
    ///
    /// The logarithm is multivalued: for algebra elements with a large enough
    /// rotational component, the principal branch recovered here differs from
    /// the element that generated the homography. Only `exp(log(H)) ≈ H` holds
    /// in general, not `log(exp(h)) ≈ h`.
    pub fn sl3(self) -> Option<Sl3> {
        principal_log(&Self::from_matrix(self.0).0).map(Sl3::vee)
    }

    /// Creates the homography from its sl(3) representation.
    ///
    /// This is the exponential map: the matrix exponential of the traceless
    /// matrix form, rescaled to unit determinant. Analytically the determinant
    /// of the exponential is already `exp(trace) = 1`; the normalization only
    /// corrects floating-point drift.
    ///
    /// ```
    /// use sl3::{Homography, Sl3};
    ///
    /// let identity = Homography::from_sl3(Sl3::identity());
    /// assert!((identity.matrix() - sl3::nalgebra::Matrix3::identity()).norm() < 1e-12);
    /// ```
    pub fn from_sl3(h: Sl3) -> Self {
        Self::from_matrix(h.hat().exp())
    }

    /// Transforms a point on the projective plane.
    ///
    /// The result is homogeneous and is not dehomogenized; a finite input point
    /// can land on the line at infinity if it lies on the vanishing line of the
    /// transform.
    pub fn transform(self, point: PlanarPoint) -> PlanarPoint {
        PlanarPoint(self.0 * point.homogeneous())
    }

    /// The distance between two homographies measured in the algebra: the norm
    /// of `log(self⁻¹ * other)`. Near zero when both describe nearly the same
    /// transform.
    pub fn algebra_distance(self, other: Self) -> Option<f64> {
        (self.inverse() * other).sl3().map(|diff| diff.norm())
    }
}

/// This is the exponential map.
impl From<Sl3> for Homography {
    fn from(h: Sl3) -> Self {
        Self::from_sl3(h)
    }
}

/// Composition of transforms. The unit determinant is preserved analytically;
/// renormalization only corrects floating-point drift.
impl Mul for Homography {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_matrix(self.0 * rhs.0)
    }
}

impl Model<PointMatch> for Homography {
    fn residual(&self, data: &PointMatch) -> f64 {
        let &PointMatch(source, target) = data;

        match (self.transform(source).point(), target.point()) {
            (Some(projected), Some(target)) => (projected - target).norm(),
            _ => f64::INFINITY,
        }
    }
}

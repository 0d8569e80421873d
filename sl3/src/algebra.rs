use core::{
    iter::Sum,
    ops::{Add, AddAssign},
};
use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::{Matrix3, OVector, U8};

/// Contains a member of the lie algebra sl(3), the tangent space of the group of
/// unit-determinant 3×3 matrices at the identity. Elements of sl(3) are traceless
/// 3×3 matrices; this type stores their 8 free coordinates in a fixed generator
/// basis.
///
/// This is only intended to be used in optimization problems where it is
/// desirable to have unconstrained variables representing the degrees of freedom
/// of a homography. In all other cases, a [`Homography`](crate::Homography)
/// should be used to store the transform, since the conversion to and from the
/// group is non-trivial.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
pub struct Sl3(pub OVector<f64, U8>);

impl Sl3 {
    /// The zero algebra element, which maps to the identity homography.
    pub fn identity() -> Self {
        Self(OVector::<f64, U8>::zeros())
    }

    /// This converts the [`Sl3`] into its traceless matrix form.
    ///
    /// The two free diagonal degrees of freedom are the components at indices
    /// 4 and 5; the middle diagonal entry is forced to their negated sum, which
    /// guarantees a zero trace.
    #[rustfmt::skip]
    pub fn hat(self) -> Matrix3<f64> {
        let h = &self.0;
        Matrix3::new(
            h[4],          h[2], h[0],
            h[3], -h[4] - h[5], h[1],
            h[6],          h[7], h[5],
        )
    }

    /// This converts a matrix in traceless form into an [`Sl3`].
    ///
    /// Warning: Does no check to ensure the matrix is actually traceless. The
    /// middle diagonal entry is redundant and never read.
    pub fn vee(mat: Matrix3<f64>) -> Self {
        Self(OVector::<f64, U8>::from_column_slice(&[
            mat.m13, mat.m23, mat.m12, mat.m21, mat.m11, mat.m33, mat.m31, mat.m32,
        ]))
    }

    /// Computes the lie bracket [self, rhs].
    #[must_use]
    pub fn bracket(self, rhs: Self) -> Self {
        Self::vee(self.hat() * rhs.hat() - rhs.hat() * self.hat())
    }

    /// Scales the algebra element.
    #[must_use]
    pub fn scale(self, scale: f64) -> Self {
        Self(self.0 * scale)
    }
}

impl Add for Sl3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Sl3 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Sl3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Sl3::identity(), |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hat_places_components() {
        let h = Sl3(OVector::<f64, U8>::from_column_slice(&[
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0,
        ]));
        let mat = h.hat();
        assert_eq!(mat[(0, 2)], 1.0);
        assert_eq!(mat[(1, 2)], 2.0);
        assert_eq!(mat[(0, 1)], 3.0);
        assert_eq!(mat[(1, 0)], 4.0);
        assert_eq!(mat[(0, 0)], 5.0);
        assert_eq!(mat[(2, 2)], 6.0);
        assert_eq!(mat[(2, 0)], 7.0);
        assert_eq!(mat[(2, 1)], 8.0);
        assert_eq!(mat[(1, 1)], -11.0);
        assert_eq!(mat.trace(), 0.0);
        assert_eq!(Sl3::vee(mat), h);
    }

    #[test]
    fn bracket_is_closed() {
        let a = Sl3(OVector::<f64, U8>::from_column_slice(&[
            0.3, -0.1, 0.2, 0.5, -0.4, 0.1, 0.0, 0.7,
        ]));
        let b = Sl3(OVector::<f64, U8>::from_column_slice(&[
            -0.2, 0.6, 0.1, -0.3, 0.2, -0.5, 0.4, 0.0,
        ]));
        // Commutators of traceless matrices are traceless, so vee then hat must
        // reproduce the commutator exactly, middle diagonal entry included.
        let commutator = a.hat() * b.hat() - b.hat() * a.hat();
        assert!((a.bracket(b).hat() - commutator).norm() < 1e-12);
    }
}

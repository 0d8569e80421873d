use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::{Point2, Vector3};

/// This trait is implemented for homogeneous projective 2d coordinates.
pub trait Projective: From<Vector3<f64>> + Clone + Copy {
    /// Retrieve the homogeneous vector.
    ///
    /// No constraints are put on this vector. All components can move freely and it is not
    /// normalized. However, this vector may be normalized if desired and it will still be
    /// equivalent to the original.
    fn homogeneous(self) -> Vector3<f64>;

    /// Retrieve the euclidean 2d point by dehomogenizing the coordinate.
    ///
    /// This may fail, as a homogeneous coordinate can lie on the line at infinity
    /// (zero third coordinate), where no euclidean equivalent exists.
    fn point(self) -> Option<Point2<f64>> {
        Point2::from_homogeneous(self.homogeneous())
    }

    /// Convert the euclidean 2d point into homogeneous coordinates.
    fn from_point(point: Point2<f64>) -> Self {
        point.to_homogeneous().into()
    }
}

/// A point on the projective plane in homogeneous coordinates.
///
/// Finite points take the form `(x, y, 1)` after dehomogenization; points with a
/// zero third coordinate lie on the line at infinity and cannot be dehomogenized.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
pub struct PlanarPoint(pub Vector3<f64>);

impl Projective for PlanarPoint {
    fn homogeneous(self) -> Vector3<f64> {
        self.into()
    }
}

use nalgebra::Matrix3;
use num_traits::Float;

/// Compute the principal logarithm of a real 3×3 matrix
///
/// # Method
///
/// Inverse scaling and squaring based on [^1]: Denman–Beavers iterations pull
/// repeated square roots of the input until it lies close enough to the identity
/// for the Mercator series of `log(I + X)` to converge quickly, and the series
/// result is scaled back by the number of roots taken.
///
/// # Resources
///
/// [^1]: Higham, Functions of Matrices: Theory and Computation. ch. 11
///
/// <https://en.wikipedia.org/wiki/Logarithm_of_a_matrix#Calculating_the_logarithm_of_a_diagonalizable_matrix>
///
/// Returns `None` when the input is singular, contains non-finite entries, or
/// has eigenvalues on the closed negative real axis, in which cases no real
/// principal logarithm exists. The logarithm is multivalued; the principal
/// branch returned here is only guaranteed to invert the matrix exponential for
/// arguments whose eigenvalue arguments stay within the branch range.
pub fn principal_log(mat: &Matrix3<f64>) -> Option<Matrix3<f64>> {
    const NEAR_IDENTITY: f64 = 0.25;
    const MAX_ROOTS: u32 = 40;
    const MAX_TERMS: i32 = 48;

    if !mat.iter().all(|n| n.is_finite()) {
        return None;
    }

    // Square-root down to the neighborhood of the identity.
    let mut root = *mat;
    let mut scalings = 0u32;
    while (root - Matrix3::identity()).norm() > NEAR_IDENTITY {
        if scalings == MAX_ROOTS {
            return None;
        }
        root = sqrt(&root)?;
        scalings += 1;
    }

    // Mercator series: log(I + X) = X - X²/2 + X³/3 - ...
    let x = root - Matrix3::identity();
    let mut power = x;
    let mut series = x;
    for n in 2..=MAX_TERMS {
        power *= x;
        let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
        let term = power * (sign / f64::from(n));
        series += term;
        if term.norm() <= f64::epsilon() * series.norm() {
            break;
        }
    }

    Some(series * f64::powi(2.0, scalings as i32))
}

/// Principal square root by the Denman–Beavers iteration. Quadratically
/// convergent for matrices with no eigenvalues on the closed negative real
/// axis; diverges (and returns `None`) otherwise.
fn sqrt(mat: &Matrix3<f64>) -> Option<Matrix3<f64>> {
    const MAX_ITERATIONS: usize = 64;

    let mut y = *mat;
    let mut z = Matrix3::identity();
    for _ in 0..MAX_ITERATIONS {
        let y_inv = y.try_inverse()?;
        let z_inv = z.try_inverse()?;
        let next_y = (y + z_inv) * 0.5;
        let next_z = (z + y_inv) * 0.5;
        let delta = (next_y - y).norm();
        y = next_y;
        z = next_z;
        if !y.iter().all(|n| n.is_finite()) {
            return None;
        }
        if delta <= 4.0 * f64::epsilon() * y.norm() {
            return Some(y);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_of_identity_is_zero() {
        let log = principal_log(&Matrix3::identity()).unwrap();
        assert!(log.norm() < 1e-12);
    }

    #[test]
    fn log_of_exponential_scaling() {
        // diag(e, 1, 1/e) is the exponential of diag(1, 0, -1).
        let mat = Matrix3::from_diagonal(&nalgebra::Vector3::new(
            core::f64::consts::E,
            1.0,
            core::f64::consts::E.recip(),
        ));
        let expected = Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, 0.0, -1.0));
        let log = principal_log(&mat).unwrap();
        assert!((log - expected).norm() < 1e-9);
    }

    #[test]
    fn singular_input_has_no_logarithm() {
        let mat = Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, 1.0, 0.0));
        assert!(principal_log(&mat).is_none());
    }
}

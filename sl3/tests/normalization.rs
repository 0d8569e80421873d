use approx::assert_relative_eq;
use nalgebra::Matrix3;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sl3::Homography;

fn random_matrix(rng: &mut SmallRng) -> Matrix3<f64> {
    // Entries in [-1, 1); singular draws are measure zero and the seeds below
    // are known to avoid them.
    Matrix3::from_fn(|_, _| 2.0 * rng.gen::<f64>() - 1.0)
}

#[test]
fn normalization_yields_unit_determinant() {
    let mut rng = SmallRng::seed_from_u64(54541);
    for _ in 0..100 {
        let homography = Homography::from_matrix(random_matrix(&mut rng));
        assert_relative_eq!(homography.matrix().determinant(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn normalization_is_scale_invariant() {
    let mut rng = SmallRng::seed_from_u64(54547);
    for _ in 0..100 {
        let mat = random_matrix(&mut rng);
        let normalized = Homography::from_matrix(mat);
        for scale in [0.5, 2.0, 1e3, 1e-3] {
            let rescaled = Homography::from_matrix(mat * scale);
            assert_relative_eq!(
                normalized.matrix(),
                rescaled.matrix(),
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn negative_determinant_takes_the_real_branch() {
    // det = -1; the real cube root keeps the scale factor real, so the
    // normalized matrix must still be real with determinant one.
    let mat = Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, 1.0, -1.0));
    let homography = Homography::from_matrix(mat);
    assert!(homography.matrix().iter().all(|n| n.is_finite()));
    assert_relative_eq!(homography.matrix().determinant(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(
        homography.matrix(),
        Matrix3::from_diagonal(&nalgebra::Vector3::new(-1.0, -1.0, 1.0)),
        epsilon = 1e-12
    );
}

#[test]
fn zero_determinant_poisons_the_result() {
    let mat = Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, 1.0, 0.0));
    let homography = Homography::from_matrix(mat);
    assert!(homography.matrix().iter().any(|n| !n.is_finite()));
}

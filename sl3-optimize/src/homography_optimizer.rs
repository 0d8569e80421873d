use levenberg_marquardt::{
    differentiate_numerically, LeastSquaresProblem, LevenbergMarquardt, MinimizationReport,
};
use sl3::{
    nalgebra::{
        dimension::{Dynamic, U1, U8},
        DMatrix, DVector, OVector, VecStorage,
    },
    Homography, PointMatch, Projective, Sl3,
};

/// Levenberg-Marquardt problem for refining a homography against point
/// correspondences.
///
/// The optimization state is the sl(3) representation of the homography, so the
/// solver sees 8 unconstrained parameters rather than 9 matrix entries defined
/// only up to scale. Each residual evaluation maps the candidate through the
/// exponential map, projects every source point and compares against the
/// corresponding target point after dehomogenization.
#[derive(Clone)]
pub struct HomographyOptimizer<I> {
    pub sl3: Sl3,
    matches: I,
}

impl<I> HomographyOptimizer<I>
where
    I: Iterator<Item = PointMatch> + Clone,
{
    pub fn new(matches: I, sl3: Sl3) -> Self {
        Self { sl3, matches }
    }

    /// The homography described by the current parameters.
    pub fn homography(&self) -> Homography {
        self.sl3.into()
    }
}

impl<I> LeastSquaresProblem<f64, Dynamic, Dynamic> for HomographyOptimizer<I>
where
    I: Iterator<Item = PointMatch> + Clone,
{
    /// Storage type used for the residuals. Use `nalgebra::storage::Owned<F, M>`
    /// if you want to use `OVector` or `OMatrix`.
    type ResidualStorage = VecStorage<f64, Dynamic, U1>;
    type JacobianStorage = VecStorage<f64, Dynamic, Dynamic>;
    type ParameterStorage = VecStorage<f64, Dynamic, U1>;

    /// Set the stored parameters `$\vec{x}$`.
    fn set_params(&mut self, x: &DVector<f64>) {
        assert_eq!(
            x.len(),
            8,
            "homography parameter vector must have 8 components"
        );
        self.sl3 = Sl3(OVector::<f64, U8>::from_column_slice(x.as_slice()));
    }

    /// Get the stored parameters `$\vec{x}$`.
    fn params(&self) -> DVector<f64> {
        DVector::from_iterator(8, self.sl3.iter().copied())
    }

    /// Compute the residual vector.
    ///
    /// Residuals are ordered point-major, x difference then y difference. A
    /// source point projected onto the line at infinity has no euclidean
    /// equivalent, so the whole evaluation fails and the solver rejects the
    /// step instead of receiving a silently substituted value.
    fn residuals(&self) -> Option<DVector<f64>> {
        let homography = self.homography();
        let mut residuals = Vec::new();
        for PointMatch(source, target) in self.matches.clone() {
            let projected = homography.transform(source).point()?;
            let target = target.point()?;
            residuals.push(projected.x - target.x);
            residuals.push(projected.y - target.y);
        }
        Some(DVector::from_vec(residuals))
    }

    /// Compute the Jacobian of the residual vector.
    fn jacobian(&self) -> Option<DMatrix<f64>> {
        let mut clone = self.clone();
        differentiate_numerically(&mut clone)
    }
}

/// Refines a homography from point correspondences with Levenberg-Marquardt.
///
/// The conventional initial guess is [`Sl3::identity`], the identity
/// homography. Returns the refined homography along with the solver
/// diagnostics (termination reason, evaluation count, final objective).
pub fn refine_homography<I>(matches: I, initial: Sl3) -> (Homography, MinimizationReport<f64>)
where
    I: Iterator<Item = PointMatch> + Clone,
{
    let lm = LevenbergMarquardt::new();
    let (optimizer, report) = lm.minimize(HomographyOptimizer::new(matches, initial));
    log::info!("Levenberg-Marquardt: {:?}", report.termination);
    (optimizer.homography(), report)
}

use nalgebra::{Cholesky, DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

use super::ForecastError;

const PIVOT_TOLERANCE: f64 = 1e-12;

/// Solves `(XᵀX + diag(penalties)) β = Xᵀy` by Cholesky factorisation.
pub(crate) fn solve_ridge(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    penalties: &[f64],
) -> Result<Array1<f64>, ForecastError> {
    let p = x.ncols();
    if penalties.len() != p || y.len() != x.nrows() {
        return Err(ForecastError::InvalidConfig(format!(
            "design is {}x{} but got {} targets and {} penalties",
            x.nrows(),
            p,
            y.len(),
            penalties.len()
        )));
    }

    let mut xtx = x.t().dot(&x);
    let xty = x.t().dot(&y);
    for (i, &lambda) in penalties.iter().enumerate() {
        xtx[[i, i]] += lambda;
    }

    let normal = DMatrix::from_fn(p, p, |i, j| xtx[[i, j]]);
    let chol = Cholesky::new(normal).ok_or(ForecastError::SingularSystem)?;

    // Pivots lost to cancellation count as zero
    let l = chol.l_dirty();
    let degenerate = (0..p).any(|j| {
        let pivot = l[(j, j)] * l[(j, j)];
        !pivot.is_finite() || pivot <= PIVOT_TOLERANCE * xtx[[j, j]].abs().max(1.0)
    });
    if degenerate {
        return Err(ForecastError::SingularSystem);
    }

    let beta = chol.solve(&DVector::from_iterator(p, xty.iter().copied()));
    if beta.iter().all(|v| v.is_finite()) {
        Ok(beta.iter().copied().collect())
    } else {
        Err(ForecastError::SingularSystem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn recovers_exact_linear_fit() {
        // y = 2 + 3x
        let x = Array2::from_shape_fn((5, 2), |(i, j)| if j == 0 { 1.0 } else { i as f64 });
        let y = x.column(1).mapv(|xi| 2.0 + 3.0 * xi);
        let beta = solve_ridge(x.view(), y.view(), &[1e-12, 1e-12]).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-6);
        assert!((beta[1] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn penalty_shrinks_coefficients() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![2.0, 4.0, 6.0];
        let free = solve_ridge(x.view(), y.view(), &[0.0]).unwrap()[0];
        let shrunk = solve_ridge(x.view(), y.view(), &[14.0]).unwrap()[0];
        assert!((free - 2.0).abs() < 1e-9);
        assert!((shrunk - 1.0).abs() < 1e-9);
    }

    #[test]
    fn collinear_columns_without_penalty_are_singular() {
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        let y = array![1.0, 2.0, 3.0];
        let res = solve_ridge(x.view(), y.view(), &[0.0, 0.0]);
        assert_eq!(res, Err(ForecastError::SingularSystem));
    }

    #[test]
    fn mismatched_penalties_are_rejected() {
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let y = array![1.0, 1.0];
        let res = solve_ridge(x.view(), y.view(), &[0.0]);
        assert!(matches!(res, Err(ForecastError::InvalidConfig(_))));
    }
}

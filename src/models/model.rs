//! Model evaluation for a fitted orthogonal polynomial regression.
//!
//! Two primitive operations:
//! - evaluate the basis functions at `x` (for the basis dump and the design matrix)
//! - predict `y(x)` as intercept plus the coefficient-weighted basis values

use std::fmt;

use nalgebra::DMatrix;

use crate::error::ModelError;
use crate::math::{basis_recursive, constant_term, design_matrix, fill_basis};

/// A validated orthogonal polynomial fit.
///
/// Holds the recurrence constants (`alpha`, `norm2`) and the linear model
/// coefficients. `coeffs[0]` is the intercept; `coeffs[i + 1]` multiplies
/// basis function `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthoPolyModel {
    alpha: Vec<f64>,
    norm2: Vec<f64>,
    coeffs: Vec<f64>,
}

impl OrthoPolyModel {
    /// Validate the three vectors and build a model.
    ///
    /// Requires `coeffs.len() == norm2.len() - 1` and `coeffs.len() == alpha.len() + 1`.
    pub fn new(alpha: Vec<f64>, norm2: Vec<f64>, coeffs: Vec<f64>) -> Result<Self, ModelError> {
        if coeffs.len() + 1 != norm2.len() || coeffs.len() != alpha.len() + 1 {
            return Err(ModelError::SizeMismatch {
                coeffs: coeffs.len(),
                norm2: norm2.len(),
                alpha: alpha.len(),
            });
        }

        Ok(Self { alpha, norm2, coeffs })
    }

    /// Number of non-constant basis functions.
    pub fn degree(&self) -> usize {
        self.alpha.len()
    }

    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    pub fn norm2(&self) -> &[f64] {
        &self.norm2
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluate basis function `d` at `x`, with `d` in `[-1, degree - 1]`.
    ///
    /// `d = -1` is the constant function, `d = 0` the linear one.
    pub fn basis(&self, d: i32, x: f64) -> Result<f64, ModelError> {
        let degree = self.degree();
        if d < -1 || d >= degree as i32 {
            return Err(ModelError::DegreeOutOfRange { requested: d, degree });
        }
        if d == -1 {
            return Ok(constant_term(&self.norm2));
        }

        let mut out = vec![0.0; d as usize + 1];
        fill_basis(&self.alpha, &self.norm2, x, &mut out);
        Ok(out[d as usize])
    }

    /// All non-constant basis values at `x`: `[f(0, x), ..., f(degree - 1, x)]`.
    pub fn basis_values(&self, x: f64) -> Vec<f64> {
        let mut out = vec![0.0; self.degree()];
        fill_basis(&self.alpha, &self.norm2, x, &mut out);
        out
    }

    /// Predict `y(x)`. Any finite or non-finite `x` is accepted (extrapolation included).
    pub fn predict(&self, x: f64) -> f64 {
        let basis = self.basis_values(x);
        let mut y = self.coeffs[0];
        for (c, f) in self.coeffs[1..].iter().zip(&basis) {
            y += c * f;
        }
        y
    }

    /// Predict via the direct recursive formula. Slow; for cross-checking only.
    pub fn predict_recursive(&self, x: f64) -> f64 {
        let mut y = self.coeffs[0];
        for i in 0..self.degree() {
            y += self.coeffs[i + 1] * basis_recursive(&self.alpha, &self.norm2, i as i32, x);
        }
        y
    }

    /// Design matrix at `xs`: columns are the constant then each basis function.
    ///
    /// A verification aid (orthonormality on the fit points); `predict` does not use it.
    pub fn design_matrix(&self, xs: &[f64]) -> DMatrix<f64> {
        design_matrix(&self.alpha, &self.norm2, self.degree(), xs)
    }

    /// Human-readable dump of the model constants with 1-based indices.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrthoPolyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Degree {} polynomial fit", self.degree())?;
        write_section(f, "Alpha values", &self.alpha)?;
        write_section(f, "Norm2 values", &self.norm2)?;
        write_section(f, "Model coeff values", &self.coeffs)
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, values: &[f64]) -> fmt::Result {
    writeln!(f, "{title} :")?;
    for (i, v) in values.iter().enumerate() {
        writeln!(f, "{} : {v:.6}", i + 1)?;
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cubic(coeffs: Vec<f64>) -> OrthoPolyModel {
        OrthoPolyModel::new(vec![5.5, 5.5, 5.5], vec![1.0, 10.0, 82.5, 528.0, 3088.8], coeffs).unwrap()
    }

    #[test]
    fn rejects_size_mismatches() {
        let cases = [
            (vec![1.0], vec![1.0, 2.0, 3.0], vec![1.0]),
            (vec![1.0], vec![1.0, 2.0], vec![1.0, 2.0]),
            (vec![], vec![1.0, 2.0, 3.0], vec![1.0, 2.0]),
            (vec![1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0]),
            (vec![], vec![], vec![]),
        ];
        for (alpha, norm2, coeffs) in cases {
            let (a, n, c) = (alpha.len(), norm2.len(), coeffs.len());
            let err = OrthoPolyModel::new(alpha, norm2, coeffs).unwrap_err();
            assert_eq!(
                err,
                ModelError::SizeMismatch {
                    coeffs: c,
                    norm2: n,
                    alpha: a
                }
            );
        }
    }

    #[test]
    fn degree_is_alpha_length() {
        for degree in 0..6 {
            let model = OrthoPolyModel::new(
                vec![0.0; degree],
                vec![1.0; degree + 2],
                vec![0.0; degree + 1],
            )
            .unwrap();
            assert_eq!(model.degree(), degree);
        }
    }

    #[test]
    fn intercept_only_model_is_constant() {
        let model = OrthoPolyModel::new(vec![], vec![1.0, 7.0], vec![3.25]).unwrap();
        assert_eq!(model.degree(), 0);
        for &x in &[-1e6, -1.0, 0.0, 2.5, 1e9] {
            assert_eq!(model.predict(x), 3.25);
        }
        assert!(model.basis_values(1.0).is_empty());
        assert!((model.basis(-1, 0.0).unwrap() - 1.0 / 7f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn basis_matches_known_r_values() {
        let model = cubic(vec![0.0; 4]);
        let expected = [-0.3743277, 0.1440493, 0.1890351];
        for (d, e) in expected.iter().enumerate() {
            let v = model.basis(d as i32, 2.1).unwrap();
            assert!((v - e).abs() < 1e-6, "basis({d}) = {v}");
        }
    }

    #[test]
    fn predict_is_linear_combination() {
        let model = cubic(vec![1.5, -2.0, 0.75, 3.0]);
        let y = model.predict(2.1);
        let expected = 1.5 + -2.0 * -0.3743277 + 0.75 * 0.1440493 + 3.0 * 0.1890351;
        assert!((y - expected).abs() < 1e-6, "y = {y}, expected {expected}");
    }

    #[test]
    fn predict_matches_hand_written_cubic_at_random_points() {
        let coeffs = vec![0.4, 1.1, -0.6, 2.2];
        let model = cubic(coeffs.clone());
        let n = [1.0f64, 10.0, 82.5, 528.0, 3088.8];
        let a = 5.5;

        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let x: f64 = rng.gen_range(-20.0..30.0);
            let f_const = 1.0 / n[1].sqrt();
            let f0 = (x - a) / n[2].sqrt();
            let f1 = ((x - a) * n[2].sqrt() * f0 - n[2] / n[1].sqrt() * f_const) / n[3].sqrt();
            let f2 = ((x - a) * n[3].sqrt() * f1 - n[3] / n[2].sqrt() * f0) / n[4].sqrt();
            let expected = coeffs[0] + coeffs[1] * f0 + coeffs[2] * f1 + coeffs[3] * f2;

            let y = model.predict(x);
            assert!(
                (y - expected).abs() <= 1e-10 * expected.abs().max(1.0),
                "x = {x}: {y} vs {expected}"
            );
            assert_eq!(y, model.predict_recursive(x));
        }
    }

    #[test]
    fn out_of_range_basis_is_an_error() {
        let model = cubic(vec![0.0; 4]);
        assert_eq!(
            model.basis(3, 1.0),
            Err(ModelError::DegreeOutOfRange { requested: 3, degree: 3 })
        );
        assert_eq!(
            model.basis(-2, 1.0),
            Err(ModelError::DegreeOutOfRange { requested: -2, degree: 3 })
        );
        assert!(model.basis(2, 1.0).is_ok());
        assert!(model.basis(-1, 1.0).is_ok());
    }

    #[test]
    fn degree_zero_rejects_linear_term() {
        let model = OrthoPolyModel::new(vec![], vec![1.0, 4.0], vec![2.0]).unwrap();
        assert!(model.basis(0, 1.0).is_err());
    }

    #[test]
    fn describe_uses_one_based_indices() {
        let model = OrthoPolyModel::new(vec![5.5], vec![1.0, 10.0, 82.5], vec![2.0, -1.0]).unwrap();
        let text = model.describe();
        assert!(text.starts_with("Degree 1 polynomial fit\n"));
        assert!(text.contains("Alpha values :\n1 : 5.500000\n"));
        assert!(text.contains("Norm2 values :\n1 : 1.000000\n2 : 10.000000\n3 : 82.500000\n"));
        assert!(text.contains("Model coeff values :\n1 : 2.000000\n2 : -1.000000\n"));
    }

    #[test]
    fn design_matrix_times_coeffs_is_predict() {
        let model = cubic(vec![0.4, 1.1, -0.6, 2.2]);
        let xs = [-2.0, 0.5, 3.0, 11.0];
        let coeffs = nalgebra::DVector::from_row_slice(&[
            0.4 * 10f64.sqrt(),
            1.1,
            -0.6,
            2.2,
        ]);

        // The constant column is 1/sqrt(10), so the intercept is rescaled.
        let y = model.design_matrix(&xs) * coeffs;
        for (i, &x) in xs.iter().enumerate() {
            assert!((y[i] - model.predict(x)).abs() < 1e-9);
        }
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OrthoPolyModel>();
    }
}

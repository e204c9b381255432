//! Three-term recurrence for orthogonal polynomials.
//!
//! The basis is never stored as explicit polynomial coefficients. Instead it is
//! regenerated at each `x` from two constant sequences produced by the fit:
//!
//! - `alpha[d]`: recentering constant for degree `d + 1`
//! - `norm2[k]`: squared norm of the monic polynomial of degree `k - 2`
//!   (`norm2[0]` is a leading 1, `norm2[1]` is the number of fitted points)
//!
//! Indexing follows storage order, so `f(-1, x)` is the constant function and
//! `f(0, x)` the linear one:
//!
//! ```text
//! f(-1, x) = 1 / sqrt(n[1])
//! f(0, x)  = (x - a[0]) / sqrt(n[2])
//! f(d, x)  = [(x - a[d]) * sqrt(n[d+1]) * f(d-1, x) - n[d+1] / sqrt(n[d]) * f(d-2, x)] / sqrt(n[d+2])
//! ```
//!
//! Evaluation is a single forward pass. Each term is computed once from its two
//! predecessors with the same operation order as the recursive formula, so the
//! results match the direct recursion bit for bit.

use nalgebra::DMatrix;

/// Value of the constant basis function `f(-1, x)`.
///
/// # Panics
/// Panics if `norm2` has fewer than two entries.
pub fn constant_term(norm2: &[f64]) -> f64 {
    1.0 / norm2[1].sqrt()
}

/// Fill `out[d]` with `f(d, x)` for `d` in `0..out.len()`.
///
/// # Panics
/// Panics if `alpha.len() < out.len()` or `norm2.len() < out.len() + 2`.
/// Callers size these from a validated model.
pub fn fill_basis(alpha: &[f64], norm2: &[f64], x: f64, out: &mut [f64]) {
    let n = out.len();
    if n == 0 {
        return;
    }

    let f_const = constant_term(norm2);
    out[0] = (x - alpha[0]) / norm2[2].sqrt();

    for d in 1..n {
        let f_prev = out[d - 1];
        let f_prev2 = if d >= 2 { out[d - 2] } else { f_const };
        out[d] = ((x - alpha[d]) * norm2[d + 1].sqrt() * f_prev - norm2[d + 1] / norm2[d].sqrt() * f_prev2)
            / norm2[d + 2].sqrt();
    }
}

/// Direct recursive evaluation of `f(d, x)`.
///
/// Re-evaluates lower degrees on every call and grows like the Fibonacci
/// numbers in `d`. Kept as the literal form of the recurrence for cross-checks;
/// use [`fill_basis`] for real work.
///
/// # Panics
/// Panics if `d > alpha.len() - 1`, `d < -1`, or `norm2` is too short.
pub fn basis_recursive(alpha: &[f64], norm2: &[f64], d: i32, x: f64) -> f64 {
    assert!(d >= -1, "basis index {d} is below the constant term");
    if d == -1 {
        return constant_term(norm2);
    }
    if d == 0 {
        return (x - alpha[0]) / norm2[2].sqrt();
    }

    let u = d as usize;
    ((x - alpha[u]) * norm2[u + 1].sqrt() * basis_recursive(alpha, norm2, d - 1, x)
        - norm2[u + 1] / norm2[u].sqrt() * basis_recursive(alpha, norm2, d - 2, x))
        / norm2[u + 2].sqrt()
}

/// Build the design matrix for `xs`, for orthonormality checks against the fit points.
///
/// One row per x; columns are `[f(-1, x), f(0, x), ..., f(degree - 1, x)]`.
/// Evaluated at the points the model was fitted on, the columns are orthonormal.
/// Not used on the evaluation path; [`fill_basis`] is.
pub fn design_matrix(alpha: &[f64], norm2: &[f64], degree: usize, xs: &[f64]) -> DMatrix<f64> {
    let mut m = DMatrix::zeros(xs.len(), degree + 1);
    let mut row = vec![0.0; degree];
    let f_const = constant_term(norm2);

    for (r, &x) in xs.iter().enumerate() {
        fill_basis(alpha, norm2, x, &mut row);
        m[(r, 0)] = f_const;
        for (c, v) in row.iter().enumerate() {
            m[(r, c + 1)] = *v;
        }
    }

    m
}

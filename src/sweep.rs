//! Range sweep: evaluate a model over an x grid.
//!
//! The grid is built sequentially (it is an accumulated sum), then each point is
//! evaluated in parallel. The model is read-only, so threads share it without
//! locking; results are collected in grid order so output is deterministic.

use rayon::prelude::*;
use tracing::warn;

use crate::domain::SweepRange;
use crate::models::OrthoPolyModel;

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Evaluate `model` at every point of `range`.
///
/// Non-finite predictions (overflow far outside the fitted domain) are kept
/// as-is and reported once, rather than aborting the sweep.
pub fn run_sweep(model: &OrthoPolyModel, range: &SweepRange) -> Vec<Sample> {
    let xs = range.points();
    let samples = evaluate_points(model, &xs);

    let non_finite = samples.iter().filter(|s| !s.y.is_finite()).count();
    if non_finite > 0 {
        warn!(non_finite, total = samples.len(), "sweep produced non-finite predictions");
    }

    samples
}

/// Evaluate `model` at each of `xs`, preserving order.
pub fn evaluate_points(model: &OrthoPolyModel, xs: &[f64]) -> Vec<Sample> {
    xs.par_iter()
        .map(|&x| Sample {
            x,
            y: model.predict(x),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic() -> OrthoPolyModel {
        OrthoPolyModel::new(
            vec![5.5, 5.5, 5.5],
            vec![1.0, 10.0, 82.5, 528.0, 3088.8],
            vec![0.3, 1.0, -2.0, 0.5],
        )
        .unwrap()
    }

    #[test]
    fn sweep_matches_sequential_evaluation() {
        let model = cubic();
        let range = SweepRange::new(-1.5, 0.01, 1.5).unwrap();

        let samples = run_sweep(&model, &range);
        let xs = range.points();

        assert_eq!(samples.len(), xs.len());
        for (s, x) in samples.iter().zip(&xs) {
            assert_eq!(s.x, *x);
            assert_eq!(s.y, model.predict(*x));
        }
    }

    #[test]
    fn sweep_is_deterministic() {
        let model = cubic();
        let range = SweepRange::new(0.0, 0.1, 12.0).unwrap();
        assert_eq!(run_sweep(&model, &range), run_sweep(&model, &range));
    }

    #[test]
    fn sweep_row_count_tracks_range() {
        let model = cubic();
        let range = SweepRange::new(1.0, 0.5, 10.0).unwrap();
        assert_eq!(run_sweep(&model, &range).len(), 19);
    }

    #[test]
    fn non_finite_predictions_are_kept() {
        let model = cubic();
        let samples = evaluate_points(&model, &[f64::INFINITY, 1.0]);
        assert!(!samples[0].y.is_finite());
        assert!(samples[1].y.is_finite());
    }
}

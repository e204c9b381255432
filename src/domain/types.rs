//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built from CLI flags
//! - exported to JSON
//! - reloaded later as an alternative model source

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ModelError};
use crate::models::OrthoPolyModel;

/// How the loader treats lines that are not blank but do not parse as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Reject the file, reporting the offending line.
    Strict,
    /// Read a non-numeric line as its longest numeric prefix, or `0.0`, and keep going.
    Lenient,
}

/// The file set belonging to one fitted model.
///
/// Everything is derived from a single base name. For base `myData` the inputs are
/// `myData_polyAlphas.dat`, `myData_polyNorms.dat`, `myData_modelCoefficients.dat`
/// and the outputs `myData_out.dat` / `myData_savePolys.dat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    base_name: String,
    output_dir: Option<PathBuf>,
}

impl ModelFiles {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            output_dir: None,
        }
    }

    /// Write outputs into `dir` instead of next to the inputs.
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn alphas(&self) -> PathBuf {
        self.input("polyAlphas")
    }

    pub fn norms(&self) -> PathBuf {
        self.input("polyNorms")
    }

    pub fn coefficients(&self) -> PathBuf {
        self.input("modelCoefficients")
    }

    /// `(x, y)` sweep output.
    pub fn fit_output(&self) -> PathBuf {
        self.output("out")
    }

    /// Per-basis-function dump written in debug mode.
    pub fn basis_output(&self) -> PathBuf {
        self.output("savePolys")
    }

    fn input(&self, suffix: &str) -> PathBuf {
        PathBuf::from(format!("{}_{suffix}.dat", self.base_name))
    }

    fn output(&self, suffix: &str) -> PathBuf {
        match &self.output_dir {
            None => self.input(suffix),
            Some(dir) => {
                let stem = Path::new(&self.base_name)
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| self.base_name.clone());
                dir.join(format!("{stem}_{suffix}.dat"))
            }
        }
    }
}

/// Upper bound on the number of grid points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 10_000_000;

/// The x grid: `min, min + step, min + 2*step, ...` while `x <= max`.
///
/// Points are accumulated by repeated addition, so rounding at the upper
/// boundary follows the accumulated value rather than `min + i * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub min: f64,
    pub step: f64,
    pub max: f64,
}

impl SweepRange {
    /// Validate a range. Rejects non-finite bounds, non-positive steps, steps too
    /// small to move `x` at the range's magnitude, and grids above [`MAX_SWEEP_POINTS`].
    pub fn new(min: f64, step: f64, max: f64) -> Result<Self, AppError> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(AppError::new(2, format!("Range bounds must be finite (min {min}, max {max}).")));
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(AppError::new(2, format!("Step must be a positive number, got {step}.")));
        }
        if min + step <= min || max + step <= max {
            return Err(AppError::new(
                2,
                format!("Step {step} is too small to advance x over [{min}, {max}]."),
            ));
        }

        let range = Self { min, step, max };
        if range.interval_count().is_some_and(|n| n >= MAX_SWEEP_POINTS as f64) {
            return Err(AppError::new(
                2,
                format!(
                    "Range [{min}, {max}] by {step} has more than {MAX_SWEEP_POINTS} points."
                ),
            ));
        }
        Ok(range)
    }

    /// Every x in the sweep, in order.
    pub fn points(&self) -> Vec<f64> {
        let mut xs = Vec::with_capacity(self.expected_len());
        let mut x = self.min;
        while x <= self.max && xs.len() <= MAX_SWEEP_POINTS {
            xs.push(x);
            let next = x + self.step;
            if next <= x {
                break;
            }
            x = next;
        }
        xs
    }

    /// `floor((max - min) / step) + 1`, or 0 for an empty range, capped at
    /// [`MAX_SWEEP_POINTS`].
    ///
    /// The accumulated grid may differ by one at the boundary.
    pub fn expected_len(&self) -> usize {
        match self.interval_count() {
            None => 0,
            Some(n) if n.is_finite() && n < MAX_SWEEP_POINTS as f64 => n as usize + 1,
            Some(_) => MAX_SWEEP_POINTS,
        }
    }

    /// `floor((max - min) / step)`; `None` when `max < min`.
    fn interval_count(&self) -> Option<f64> {
        if self.max < self.min {
            return None;
        }
        let n = ((self.max - self.min) / self.step).floor();
        Some(if n.is_nan() { f64::INFINITY } else { n })
    }
}

/// Resolved configuration for a run.
///
/// This is derived from CLI flags (plus environment and defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub files: ModelFiles,
    pub range: SweepRange,
    pub parse_mode: ParseMode,
    pub debug: bool,
    /// Load the model from a curve JSON instead of the three vector files.
    pub from_json: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

/// Portable representation of an applied model: constants plus a sampled grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    /// RFC 3339 timestamp of when the file was written.
    pub generated: String,
    pub base_name: String,
    pub degree: usize,
    pub alpha: Vec<f64>,
    pub norm2: Vec<f64>,
    pub coeffs: Vec<f64>,
    pub grid: CurveGrid,
}

impl CurveFile {
    /// Rebuild (and re-validate) the model stored in this file.
    pub fn to_model(&self) -> Result<OrthoPolyModel, ModelError> {
        OrthoPolyModel::new(self.alpha.clone(), self.norm2.clone(), self.coeffs.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    /// `None` where the prediction was not finite (JSON has no NaN/inf).
    pub y: Vec<Option<f64>>,
}
